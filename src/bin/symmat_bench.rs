//! Сравнение производительности плотных и упакованных симметричных матриц
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use symmat::{
    dense,
    matrix::packed_len,
    utils::average_time,
    workload::{
        access_all, apply, compare_results, dense_access_all, initialize_operands, Operation,
        Outcome, Representation,
    },
    FixedSymmetricMatrix, PackedSymmetric, RandomScalar,
};

const DEFAULT_ITERATIONS: u32 = 10;
const DEFAULT_SEED: u64 = 42;
/// Размерности матриц фиксированного размера, см. `Bench::run`
const FIXED_DIMS: [usize; 4] = [10, 20, 50, 100];
const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Размерности матриц динамического размера, через запятую
    #[arg(short, long, value_delimiter = ',', default_values_t = [100, 200, 500, 1000])]
    dims: Vec<usize>,

    /// Число повторов каждой операции; в отчёт идёт среднее время
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Запустить только одну операцию
    #[arg(short, long, value_enum)]
    operation: Option<Operation>,

    /// Тип элементов
    #[arg(long, value_enum, default_value_t = ScalarKind::Int)]
    scalar: ScalarKind,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Пропустить матрицы фиксированного размера
    #[arg(long)]
    skip_fixed: bool,

    /// Записать результаты в JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
enum ScalarKind {
    Int,
    Double,
}

#[derive(Debug, Serialize)]
struct Record {
    dimension: usize,
    fixed: bool,
    scalar: ScalarKind,
    operation: Operation,
    representation: Representation,
    mean_ns: u128,
    matches: bool,
}

struct Bench<'a> {
    args: &'a Args,
    rng: StdRng,
    progress: ProgressBar,
    records: Vec<Record>,
}

impl Bench<'_> {
    fn operations(&self) -> Vec<Operation> {
        match self.args.operation {
            Some(operation) => vec![operation],
            None => Operation::ALL.to_vec(),
        }
    }

    fn push(
        &mut self,
        dimension: usize,
        fixed: bool,
        operation: Operation,
        representation: Representation,
        elapsed: Duration,
        matches: bool,
    ) {
        self.records.push(Record {
            dimension,
            fixed,
            scalar: self.args.scalar,
            operation,
            representation,
            mean_ns: elapsed.as_nanos(),
            matches,
        });
        self.progress.inc(1);
    }

    fn run_dynamic<T: RandomScalar>(&mut self) -> Result<()> {
        let args = self.args;
        for &dim in &args.dims {
            self.progress
                .set_message(format!("динамическая размерность {}", dim));
            let operands = initialize_operands::<T, _>(dim, &mut self.rng)
                .with_context(|| format!("Не удалось подготовить операнды {}x{}", dim, dim))?;

            for operation in self.operations() {
                let reference = apply(operation, Representation::Dense, &operands)?;
                for representation in Representation::ALL {
                    let (outcome, elapsed) = average_time(args.iterations, || {
                        apply(operation, representation, &operands)
                    });
                    let matches = compare_results(&reference, &outcome?);
                    self.push(dim, false, operation, representation, elapsed, matches);
                }
            }
        }
        Ok(())
    }

    fn run_fixed<T: RandomScalar, const N: usize, const LEN: usize>(&mut self) -> Result<()> {
        self.progress
            .set_message(format!("фиксированная размерность {}", N));
        let a = FixedSymmetricMatrix::<T, N, LEN>::random(&mut self.rng);
        let b = FixedSymmetricMatrix::<T, N, LEN>::random(&mut self.rng);
        let (dense_a, dense_b) = (a.to_dense(), b.to_dense());
        let array_b = b.to_array();
        let iterations = self.args.iterations;

        for operation in self.operations() {
            let mut reference = None;
            for representation in Representation::ALL {
                use Operation::*;
                use Representation::*;

                let (outcome, elapsed) = match (operation, representation) {
                    (Add, Dense) => timed(iterations, || &dense_a + &dense_b, Outcome::Dense),
                    (Add, Packed) => timed(iterations, || a + b, |m| Outcome::Packed(m.into())),
                    (Add, PackedDense) => timed(iterations, || a + array_b, |m| {
                        Outcome::Dense(dense::from_array(&m))
                    }),
                    (Sub, Dense) => timed(iterations, || &dense_a - &dense_b, Outcome::Dense),
                    (Sub, Packed) => timed(iterations, || a - b, |m| Outcome::Packed(m.into())),
                    (Sub, PackedDense) => timed(iterations, || a - array_b, |m| {
                        Outcome::Dense(dense::from_array(&m))
                    }),
                    (Mul, Dense) => timed(iterations, || dense_a.dot(&dense_b), Outcome::Dense),
                    (Mul, Packed) => timed(iterations, || a * b, Outcome::Dense),
                    (Mul, PackedDense) => timed(iterations, || a * array_b, Outcome::Dense),
                    (Access, Dense) => {
                        timed(iterations, || dense_access_all(&dense_a), Outcome::Scalar)
                    }
                    (Access, Packed | PackedDense) => {
                        timed(iterations, || access_all(&a), Outcome::Scalar)
                    }
                };

                let matches = match &reference {
                    Some(reference) => compare_results(reference, &outcome),
                    None => true,
                };
                if representation == Dense {
                    reference = Some(outcome);
                }
                self.push(N, true, operation, representation, elapsed, matches);
            }
        }
        Ok(())
    }

    fn run<T: RandomScalar>(&mut self) -> Result<()> {
        self.run_dynamic::<T>()?;
        if !self.args.skip_fixed {
            self.run_fixed::<T, 10, { packed_len(10) }>()?;
            self.run_fixed::<T, 20, { packed_len(20) }>()?;
            self.run_fixed::<T, 50, { packed_len(50) }>()?;
            self.run_fixed::<T, 100, { packed_len(100) }>()?;
        }
        Ok(())
    }
}

fn timed<R, T>(
    iterations: u32,
    f: impl FnMut() -> R,
    convert: impl FnOnce(R) -> Outcome<T>,
) -> (Outcome<T>, Duration) {
    let (result, elapsed) = average_time(iterations, f);
    (convert(result), elapsed)
}

fn print_report(records: &[Record]) {
    let mut table = Table::new();
    table.add_row(row![
        "Размерность",
        "Хранение",
        "Операция",
        "Представление",
        "Среднее время",
        "Совпадает"
    ]);
    for record in records {
        table.add_row(row![
            record.dimension,
            if record.fixed { "фикс." } else { "дин." },
            format!("{:?}", record.operation),
            format!("{:?}", record.representation),
            format!("{:?}", Duration::from_nanos(record.mean_ns as u64)),
            if record.matches { "да" } else { "НЕТ" }
        ]);
    }
    table.printstd();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Сравнение плотных и упакованных симметричных матриц");
    println!("Размерности: {:?}, повторов: {}", args.dims, args.iterations);

    let operations = args.operation.map_or(Operation::ALL.len(), |_| 1);
    let fixed_cases = if args.skip_fixed { 0 } else { FIXED_DIMS.len() };
    let total = (args.dims.len() + fixed_cases) * operations * Representation::ALL.len();

    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .context("Некорректный шаблон индикатора")?
        .progress_chars("#>-");
    let progress = ProgressBar::new(total as u64);
    progress.set_style(style);

    let mut bench = Bench {
        args: &args,
        rng: StdRng::seed_from_u64(args.seed),
        progress,
        records: Vec::new(),
    };

    let (result, duration) = average_time(1, || match args.scalar {
        ScalarKind::Int => bench.run::<i32>(),
        ScalarKind::Double => bench.run::<f64>(),
    });
    result?;
    bench.progress.finish_with_message("готово");

    println!("\nРезультаты ({:?} всего):", duration);
    print_report(&bench.records);

    let mismatches = bench.records.iter().filter(|r| !r.matches).count();
    if mismatches > 0 {
        println!("Расхождений с плотными матрицами: {}", mismatches);
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("Не удалось создать файл {}", path.display()))?;
        serde_json::to_writer_pretty(file, &bench.records)
            .context("Не удалось записать результаты")?;
        println!("Результаты записаны в {}", path.display());
    }

    Ok(())
}


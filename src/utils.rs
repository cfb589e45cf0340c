//! Вспомогательные функции и утилиты

use std::time::{Duration, Instant};

/// Среднее время одного вызова за `iterations` повторов.
///
/// Результат последнего вызова возвращается, чтобы вычисление не было
/// выброшено оптимизатором. При `iterations == 0` функция вызывается один раз.
pub fn average_time<F, T>(iterations: u32, mut f: F) -> (T, Duration)
where
    F: FnMut() -> T,
{
    let iterations = iterations.max(1);
    let start = Instant::now();
    let mut result = std::hint::black_box(f());
    for _ in 1..iterations {
        result = std::hint::black_box(f());
    }
    (result, start.elapsed() / iterations)
}

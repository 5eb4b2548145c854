//! Single-shot wall-clock measurement.

use std::time::Instant;

/// Run `f` exactly once and return the elapsed wall-clock time in fractional
/// milliseconds.
///
/// The reading comes from a monotonic clock at microsecond resolution; one
/// call is one measurement, with no warm-up, repetition, or averaging. Panics
/// raised by `f` propagate unmodified.
///
/// # Example
/// ```
/// let ms = seqbench::time_millis(|| {
///     let v: Vec<u64> = (0..10_000).collect();
///     std::hint::black_box(v);
/// });
/// assert!(ms >= 0.0 && ms.is_finite());
/// ```
pub fn time_millis<F: FnOnce()>(f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_micros() as f64 / 1000.0
}

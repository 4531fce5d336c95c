//! # Timing Wrapper
//!
//! A decorator-style higher-order function for measuring wall-clock duration
//! around a call.
//!
//! [`timed`] takes a callable and hands back a new callable with the same
//! calling convention: each invocation runs the original, reports the
//! elapsed seconds through `tracing`, and returns the original's result
//! unchanged. Arguments are captured by the closure, which is how Rust
//! spells a variadic wrapper.
//!
//! ```rust
//! use cart_recipe::timing::timed;
//!
//! let mut slow_sum = timed("slow_sum", || (0..1_000u32).sum::<u32>());
//! let total = slow_sum(); // logs: "slow_sum took 0.00 seconds to run"
//! assert_eq!(total, 499_500);
//! ```
//!
//! [`time`] is the measurement core without the report, for callers that
//! want the raw [`Duration`].

use std::time::{Duration, Instant};

use tracing::info;

/// Invokes `f` once, returning its result and the elapsed wall-clock time.
pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Wraps a callable so every invocation reports its duration.
///
/// The report is a single `info!` line tagged with `name`, with elapsed
/// seconds formatted to two decimal places. The wrapped callable's return
/// value passes through unchanged. If the callable panics, the panic
/// propagates and the report is skipped.
pub fn timed<R>(name: impl Into<String>, mut f: impl FnMut() -> R) -> impl FnMut() -> R {
    let name = name.into();
    move || {
        let (result, elapsed) = time(&mut f);
        info!("{} took {:.2} seconds to run", name, elapsed.as_secs_f64());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_passes_result_through() {
        let (result, elapsed) = time(|| 21 * 2);

        assert_eq!(result, 42);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_timed_passes_result_through() {
        let mut double = timed("double", || 21 * 2);

        assert_eq!(double(), 42);
    }

    #[test]
    fn test_timed_wrapper_is_reinvocable() {
        let mut count = 0;
        let mut bump = timed("bump", || {
            count += 1;
            count
        });

        assert_eq!(bump(), 1);
        assert_eq!(bump(), 2);
    }

    #[test]
    fn test_time_measures_a_sleep() {
        let (_, elapsed) = time(|| std::thread::sleep(Duration::from_millis(10)));

        assert!(elapsed >= Duration::from_millis(10));
    }
}

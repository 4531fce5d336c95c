//! # Sequence Generator
//!
//! Builds the Fibonacci sequence as a materialized list.
//!
//! Terms are `u128`: the first [`MAX_FIBONACCI_TERMS`] terms are exact, and
//! asking for more returns [`SequenceError::TooManyTerms`] instead of
//! wrapping around. Negative input is unrepresentable (`usize`).

use thiserror::Error;

/// The largest request [`fibonacci`] can satisfy without overflowing `u128`.
pub const MAX_FIBONACCI_TERMS: usize = 187;

/// Errors that can occur during sequence generation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    /// The requested length exceeds what the term type can represent.
    #[error("cannot produce {requested} Fibonacci terms: values overflow u128 after {MAX_FIBONACCI_TERMS}")]
    TooManyTerms { requested: usize },
}

/// Returns the first `n` Fibonacci numbers, starting 0, 1, 1, 2, 3, 5, …
///
/// `n == 0` yields an empty vec. Computed iteratively with O(n) additions.
pub fn fibonacci(n: usize) -> Result<Vec<u128>, SequenceError> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(SequenceError::TooManyTerms { requested: n });
    }
    let mut result = Vec::with_capacity(n);
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        result.push(a);
        // Terms beyond fib(186) are computed as lookahead but never pushed
        // (n is bounded above), so wrapping arithmetic is acceptable here.
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    Ok(result)
}

//! Fibonacci computation and the counting loop range
//!
//! `fibonacci` is pure: it holds no state between calls and can be used from
//! any number of threads without synchronization.

use std::ops::RangeInclusive;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Range printed by the counting loop of an interactive run
pub const DEFAULT_COUNT: RangeInclusive<i64> = 1..=10;

/// Compute the n-th Fibonacci number (0-indexed, `F(0) = 0`, `F(1) = 1`)
///
/// Every `n <= 0` maps to 0, negative indices included. The accumulators are
/// arbitrary precision, so the result never wraps.
pub fn fibonacci(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }
    if n == 1 {
        return BigUint::one();
    }

    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for _ in 2..=n {
        // (a, b) <- (b, a + b)
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    b
}

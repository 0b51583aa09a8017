//! The modular integer ring `Z_n`.
use crate::error::{CatalogError, Result};

use core::ops::Range;
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Compute `x * y mod n` without overflow.
///
/// The product is computed in `T` when it fits, and otherwise in `u128`, which is wide enough for
/// any pair of 64-bit operands.
///
/// # Panics
///
/// When `n` is zero.
pub fn mul_mod<T>(x: T, y: T, n: T) -> T
where
    T: PrimInt + Unsigned + AsPrimitive<u128>,
    u128: AsPrimitive<T>,
{
    match x.checked_mul(&y) {
        Some(p) => p % n,
        None => {
            let wide: u128 = x.as_() * y.as_();
            (wide % n.as_()).as_()
        }
    }
}

/// The ring `Z_n` for a fixed `n >= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ring {
    n: u64,
}

impl Ring {
    /// Construct `Z_n`, failing with [`CatalogError::InvalidRing`] when `n < 2`.
    pub fn new(n: u64) -> Result<Self> {
        if n < 2 {
            return Err(CatalogError::InvalidRing { n });
        }
        Ok(Ring { n })
    }

    /// The modulus `n`.
    pub fn modulus(&self) -> u64 {
        self.n
    }

    /// All elements `0..n` in ascending order.
    pub fn elements(&self) -> Range<u64> {
        0..self.n
    }

    /// Product of two elements, reduced mod `n`.
    pub fn mul(&self, x: u64, y: u64) -> u64 {
        mul_mod(x, y, self.n)
    }

    /// True when `x` is nonzero and `x * y = 0` for some nonzero `y`.
    pub fn is_zero_divisor(&self, x: u64) -> bool {
        !x.is_multiple_of(self.n) && (1..self.n).any(|y| self.mul(x, y) == 0)
    }
}

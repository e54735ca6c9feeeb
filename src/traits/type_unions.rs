// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, ToPrimitive};

/// Trait for types valid as float elements in row vectors.
///
/// Useful when specifying `my_fn::<T: Float>() {}`.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float:
    NumFloat + Copy + Default + ToPrimitive + PartialEq + Debug + Display + Send + Sync + 'static
{
    /// Widens to `f64` for kernels and reductions.
    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Narrows an `f64` kernel result back to the element type.
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}
impl Float for f32 {}
impl Float for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_widths() {
        assert_eq!(1.5f32.to_f64_lossless(), 1.5);
        assert_eq!(f32::from_f64_lossy(2.25), 2.25f32);
        assert_eq!(f64::from_f64_lossy(-3.0), -3.0);
    }
}

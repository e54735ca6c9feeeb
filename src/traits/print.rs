// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Print Module** - *Pretty Printing with Attitude*
//!
//! Contains the `Print` trait, which wraps `Display` to provide
//! `myobj.print()` for any object that implements it, and the shared
//! float formatting used by vector and matrix previews.
use std::fmt::Display;

use crate::Float;

pub(crate) const MAX_PREVIEW: usize = 50;

/// # Print
///
/// Provides a more convenient way to activate `Display`
/// for vectors and matrices via `myobj.print()`,
/// avoiding the need to write `println!("{}", myobj);`
pub trait Print {
    #[inline]
    fn print(&self)
    where
        Self: Display,
    {
        println!("{}", self);
    }
}

impl<T: Display> Print for T where T: Display {}

pub(crate) fn format_float<T: Float + Display>(v: T) -> String {
    let s = format!("{:.6}", v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float_trims() {
        assert_eq!(format_float(2.5f64), "2.5");
        assert_eq!(format_float(3.0f64), "3");
        assert_eq!(format_float(0.125f32), "0.125");
    }
}

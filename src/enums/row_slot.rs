// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # RowSlot Enum Module
//!
//! Tri-state storage slot for a single matrix row.

/// One entry of a `RowMatrix` row array.
///
/// `Absent` and `Cleared` behave identically for reads. They are kept apart
/// so callers can tell a never-materialised row from one released with
/// `clear_row`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowSlot<V> {
    /// Never materialised.
    #[default]
    Absent,
    /// Holds a row vector.
    Present(V),
    /// Explicitly released.
    Cleared,
}

impl<V> RowSlot<V> {
    /// True for `Absent` and `Cleared`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, RowSlot::Present(_))
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        matches!(self, RowSlot::Cleared)
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&V> {
        match self {
            RowSlot::Present(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut V> {
        match self {
            RowSlot::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Moves the vector out, leaving the slot `Cleared`.
    #[inline]
    pub fn take(&mut self) -> Option<V> {
        match std::mem::replace(self, RowSlot::Cleared) {
            RowSlot::Present(v) => Some(v),
            other => {
                *self = other;
                None
            }
        }
    }
}

impl<V> From<V> for RowSlot<V> {
    #[inline]
    fn from(v: V) -> Self {
        RowSlot::Present(v)
    }
}

impl<V> From<Option<V>> for RowSlot<V> {
    #[inline]
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => RowSlot::Present(v),
            None => RowSlot::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states() {
        let a: RowSlot<i32> = RowSlot::Absent;
        assert!(a.is_absent());
        assert!(!a.is_cleared());
        assert_eq!(a.as_ref(), None);

        let p = RowSlot::Present(5);
        assert!(p.is_present());
        assert_eq!(p.as_ref(), Some(&5));

        let c: RowSlot<i32> = RowSlot::Cleared;
        assert!(c.is_absent());
        assert!(c.is_cleared());
    }

    #[test]
    fn test_take() {
        let mut p = RowSlot::Present(vec![1, 2]);
        assert_eq!(p.take(), Some(vec![1, 2]));
        assert!(p.is_cleared());

        let mut a: RowSlot<i32> = RowSlot::Absent;
        assert_eq!(a.take(), None);
        assert!(!a.is_cleared());
    }

    #[test]
    fn test_from_option() {
        let s: RowSlot<u8> = None.into();
        assert_eq!(s, RowSlot::Absent);
        let s: RowSlot<u8> = Some(3).into();
        assert_eq!(s, RowSlot::Present(3));
    }
}

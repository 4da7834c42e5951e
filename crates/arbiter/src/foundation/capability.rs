//! Capability traits that leaf rules are generic over
//!
//! Each rule family states the one capability it needs ("has a length",
//! "has a zero value", "is an integer"), and the set of supported types is
//! fixed at compile time. Applying a rule to a type without the capability
//! is a type error rather than a runtime failure.
//!
//! [`Integer`] and [`Float`] are sealed: the arithmetic behind them is only
//! correct for the primitive types implemented here. [`HasLength`] and
//! [`Zeroable`] are open so callers can teach their own containers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// LENGTH
// ============================================================================

/// Types with a well-defined element count.
///
/// Strings count Unicode scalar values, not bytes.
pub trait HasLength {
    /// Number of elements (characters for strings).
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// `None` has length zero.
impl<T: HasLength> HasLength for Option<T> {
    fn length(&self) -> usize {
        self.as_ref().map_or(0, HasLength::length)
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

// ============================================================================
// ZERO VALUE
// ============================================================================

/// Types with a distinguished zero value.
pub trait Zeroable {
    /// Returns true for the type's zero value (`0`, `""`, `false`, empty
    /// collection, `None`).
    fn is_zero(&self) -> bool;

    /// Returns true when no meaningful value is present.
    ///
    /// Same as [`is_zero`](Zeroable::is_zero) except for `Option`, where
    /// `Some(zero)` is blank too.
    fn is_blank(&self) -> bool {
        self.is_zero()
    }
}

macro_rules! impl_zeroable_num {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Zeroable for $t {
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_zeroable_num! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

impl Zeroable for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zeroable for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zeroable for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zeroable for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zeroable for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zeroable for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Zeroable for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zeroable for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Zeroable for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zeroable for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zeroable> Zeroable for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Zeroable::is_blank)
    }
}

// ============================================================================
// INTEGERS
// ============================================================================

/// Primitive integer types.
pub trait Integer: Copy + PartialOrd + Default + Display + sealed::Sealed {
    /// Widens the value losslessly.
    fn as_i128(self) -> i128;

    /// Returns true for even values.
    fn is_even(self) -> bool {
        self.as_i128() % 2 == 0
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// FLOATS
// ============================================================================

/// Primitive floating point types.
pub trait Float: Copy + PartialOrd + Display + sealed::Sealed {
    /// Number of decimal places in the shortest decimal form that
    /// round-trips the value.
    ///
    /// `2.75` has 2, `19.99` has 2, `42.0` has 0 and `1.23e-4` (`0.000123`)
    /// has 6.
    fn decimal_places(self) -> usize;
}

fn decimal_places_of(decimal: &str) -> usize {
    decimal.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

// `Display` for floats prints the shortest round-trip form and never switches
// to exponent notation, so whole numbers have no fractional part.
impl Float for f32 {
    fn decimal_places(self) -> usize {
        decimal_places_of(&self.to_string())
    }
}

impl Float for f64 {
    fn decimal_places(self) -> usize {
        decimal_places_of(&self.to_string())
    }
}

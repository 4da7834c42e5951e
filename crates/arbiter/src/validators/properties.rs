//! Integer property rules

use crate::foundation::{Integer, ValidationError};

crate::rule! {
    /// Validates that an integer is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(even().validate(&4u8).is_ok());
    /// assert!(even().validate(&-3).is_err());
    /// ```
    pub Even<T: Integer> for T;
    check(input) { input.is_even() }
    error(input) {
        ValidationError::new("even", "value must be even").with_param("actual", input.to_string())
    }
    fn even();
}

crate::rule! {
    /// Validates that an integer is odd.
    pub Odd<T: Integer> for T;
    check(input) { !input.is_even() }
    error(input) {
        ValidationError::new("odd", "value must be odd").with_param("actual", input.to_string())
    }
    fn odd();
}

crate::rule! {
    /// Validates that an integer is a prime number.
    ///
    /// Values below 2 are never prime.
    pub Prime<T: Integer> for T;
    check(input) { is_prime(input.as_i128()) }
    error(input) {
        ValidationError::new("prime", "value is not a prime number")
            .with_param("actual", input.to_string())
    }
    fn prime();
}

/// Trial division up to the square root.
fn is_prime(n: i128) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(-4, true)]
    #[case(1, false)]
    #[case(-7, false)]
    fn test_even_odd(#[case] value: i32, #[case] is_even: bool) {
        assert_eq!(even().validate(&value).is_ok(), is_even);
        assert_eq!(odd().validate(&value).is_ok(), !is_even);
    }

    #[rstest]
    #[case(2, true)]
    #[case(3, true)]
    #[case(17, true)]
    #[case(7919, true)]
    #[case(0, false)]
    #[case(1, false)]
    #[case(9, false)]
    #[case(-7, false)]
    #[case(7917, false)]
    fn test_prime(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(prime().validate(&value).is_ok(), ok);
    }

    #[test]
    fn test_unsigned_prime() {
        assert!(prime().validate(&u64::from(u32::MAX)).is_err());
        assert!(prime().validate(&65_537u32).is_ok());
    }

    #[test]
    fn test_messages() {
        assert_eq!(even().validate(&1u16).unwrap_err().message, "value must be even");
        assert_eq!(odd().validate(&2usize).unwrap_err().message, "value must be odd");
        assert_eq!(prime().validate(&4).unwrap_err().code, "prime");
    }
}

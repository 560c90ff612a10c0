//! Field-level validation rules shared by every record payload.

use rust_decimal::Decimal;
use thiserror::Error;

/// Maximum length of record names.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of free-text descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Decimal places kept by stored money columns.
pub const MONEY_SCALE: u32 = 2;

/// Digits allowed before the decimal point in stored money columns.
pub const MONEY_INTEGER_DIGITS: u32 = 14;

/// Validation errors raised before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{field} must not be empty")]
    Empty {
        /// Offending field.
        field: &'static str,
    },

    /// A text field exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum number of characters.
        max: usize,
    },

    /// Amount is zero or negative.
    #[error("{field} must be greater than zero")]
    NonPositiveAmount {
        /// Offending field.
        field: &'static str,
    },

    /// Amount carries more decimal places than are stored.
    #[error("{field} must have at most {max} decimal places")]
    TooPrecise {
        /// Offending field.
        field: &'static str,
        /// Maximum number of decimal places.
        max: u32,
    },

    /// Amount does not fit the stored money column.
    #[error("{field} must have at most {digits} digits before the decimal point")]
    AmountOutOfRange {
        /// Offending field.
        field: &'static str,
        /// Maximum number of integer digits.
        digits: u32,
    },

    /// Value outside of an enumerated set.
    #[error("{field} must be one of: {allowed}")]
    UnknownVariant {
        /// Offending field.
        field: &'static str,
        /// Comma separated list of accepted values.
        allowed: &'static str,
    },

    /// Color is not a `#RGB` / `#RRGGBB` hex string.
    #[error("color must be a hex color such as #1e90ff")]
    InvalidColor,

    /// Email address is not well-formed.
    #[error("email must be a valid email address")]
    InvalidEmail,

    /// Password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

/// Checks a required name field.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Checks an optional description.
pub fn validate_description(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(ValidationError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_LEN,
        }),
        _ => Ok(()),
    }
}

/// Checks that a money value is stored exactly: at most [`MONEY_SCALE`]
/// decimal places and [`MONEY_INTEGER_DIGITS`] integer digits, either sign.
pub fn validate_money(field: &'static str, amount: Decimal) -> Result<(), ValidationError> {
    // Trailing zeros such as `10.500` still fit.
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(ValidationError::TooPrecise {
            field,
            max: MONEY_SCALE,
        });
    }
    if amount.abs() >= Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS)) {
        return Err(ValidationError::AmountOutOfRange {
            field,
            digits: MONEY_INTEGER_DIGITS,
        });
    }
    Ok(())
}

/// Checks that a monetary amount is storable and strictly positive.
pub fn validate_positive_amount(field: &'static str, amount: Decimal) -> Result<(), ValidationError> {
    validate_money(field, amount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { field });
    }
    Ok(())
}

/// Checks an optional display color.
pub fn validate_color(value: Option<&str>) -> Result<(), ValidationError> {
    let Some(color) = value else {
        return Ok(());
    };

    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor)
    }
}

/// Trims an optional text value, turning blank text into `None`.
#[must_use]
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("BDO Savings", true)]
    #[case("  Wallet  ", true)]
    #[case("", false)]
    #[case("   ", false)]
    fn test_validate_name(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(validate_name("name", name).is_ok(), ok);
    }

    #[test]
    fn test_name_too_long() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            validate_name("name", &name),
            Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN
            })
        );
    }

    #[rstest]
    #[case(dec!(0.01), true)]
    #[case(dec!(5000), true)]
    #[case(dec!(10.500), true)]
    #[case(dec!(99999999999999.99), true)]
    #[case(dec!(0), false)]
    #[case(dec!(-10), false)]
    #[case(dec!(0.001), false)]
    #[case(dec!(100000000000000), false)]
    fn test_validate_positive_amount(#[case] amount: Decimal, #[case] ok: bool) {
        assert_eq!(validate_positive_amount("amount", amount).is_ok(), ok);
    }

    #[rstest]
    #[case(dec!(0), Ok(()))]
    #[case(dec!(-1250.75), Ok(()))]
    #[case(dec!(-99999999999999.99), Ok(()))]
    #[case(dec!(0.001), Err(ValidationError::TooPrecise { field: "balance", max: 2 }))]
    #[case(dec!(-12.345), Err(ValidationError::TooPrecise { field: "balance", max: 2 }))]
    #[case(dec!(100000000000000), Err(ValidationError::AmountOutOfRange { field: "balance", digits: 14 }))]
    #[case(dec!(-100000000000000.00), Err(ValidationError::AmountOutOfRange { field: "balance", digits: 14 }))]
    fn test_validate_money(#[case] amount: Decimal, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_money("balance", amount), expected);
    }

    #[test]
    fn test_sub_cent_amount_is_not_rounded_into_zero() {
        assert_eq!(
            validate_positive_amount("amount", dec!(0.001)),
            Err(ValidationError::TooPrecise {
                field: "amount",
                max: MONEY_SCALE
            })
        );
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("#fff"), true)]
    #[case(Some("#1E90ff"), true)]
    #[case(Some("1e90ff"), false)]
    #[case(Some("#12345"), false)]
    #[case(Some("#ggg"), false)]
    fn test_validate_color(#[case] color: Option<&str>, #[case] ok: bool) {
        assert_eq!(validate_color(color).is_ok(), ok);
    }

    #[test]
    fn test_description_length() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("Monthly salary")).is_ok());
        let long = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_description(Some(&long)).is_err());
    }

    #[test]
    fn test_normalize_optional_text() {
        assert_eq!(normalize_optional_text(Some("  rent ")), Some("rent".to_string()));
        assert_eq!(normalize_optional_text(Some("   ")), None);
        assert_eq!(normalize_optional_text(None), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Empty { field: "name" }.to_string(),
            "name must not be empty"
        );
        assert_eq!(
            ValidationError::NonPositiveAmount { field: "amount" }.to_string(),
            "amount must be greater than zero"
        );
    }
}

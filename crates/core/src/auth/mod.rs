//! Authentication: password hashing and credential checks.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Registration payload checks and email normalization

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use crate::validation::{ValidationError, validate_name};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum stored email length.
pub const MAX_EMAIL_LEN: usize = 255;

/// Lower-cases and trims an email so lookups are case-insensitive.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks an email address shape (`local@domain.tld`, no whitespace) and
/// that its stored form fits [`MAX_EMAIL_LEN`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if normalize_email(email).chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email",
            max: MAX_EMAIL_LEN,
        });
    }

    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));

    if local.is_empty() || !domain_ok || domain.contains('@') || email.contains(char::is_whitespace)
    {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Checks a registration payload.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    validate_name("name", name)?;
    validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("russell@mail.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("no-at-sign.com", false)]
    #[case("@mail.com", false)]
    #[case("russell@localhost", false)]
    #[case("russell@mail.", false)]
    #[case("a@b@mail.com", false)]
    #[case("rus sell@mail.com", false)]
    fn test_validate_email(#[case] email: &str, #[case] ok: bool) {
        assert_eq!(validate_email(email).is_ok(), ok);
    }

    #[rstest]
    #[case(MAX_EMAIL_LEN, true)]
    #[case(MAX_EMAIL_LEN + 1, false)]
    fn test_email_length_limit(#[case] len: usize, #[case] ok: bool) {
        let domain = "@mail.com";
        let email = format!("{}{domain}", "a".repeat(len - domain.len()));
        assert_eq!(email.chars().count(), len);

        let result = validate_email(&email);
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert_eq!(
                result,
                Err(ValidationError::TooLong {
                    field: "email",
                    max: MAX_EMAIL_LEN
                })
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count_towards_email_length() {
        let email = format!("  {}@mail.com  ", "a".repeat(MAX_EMAIL_LEN - "@mail.com".len()));
        assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Russell@Mail.COM "), "russell@mail.com");
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Russell", "russell@mail.com", "password123").is_ok());
        assert_eq!(
            validate_registration("Russell", "russell@mail.com", "short"),
            Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert_eq!(
            validate_registration("", "russell@mail.com", "password123"),
            Err(ValidationError::Empty { field: "name" })
        );
    }
}

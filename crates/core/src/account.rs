//! Account credential validation (registration and login input).

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Ensure both credential fields are present and non-blank.
pub fn require_credentials(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Email and password are required".into(),
        ));
    }
    Ok(())
}

/// Validate a registration email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.trim().validate_email() {
        return Err(CoreError::Validation("Invalid email format".into()));
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
///
/// Length is counted in characters, not bytes, so multi-byte passwords are
/// not favoured.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Canonical form used to store and look up email addresses.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_credentials_rejected() {
        assert_matches!(require_credentials("", "secret"), Err(CoreError::Validation(_)));
        assert_matches!(require_credentials("a@b.io", ""), Err(CoreError::Validation(_)));
        assert_matches!(require_credentials("   ", "secret"), Err(CoreError::Validation(_)));
        assert!(require_credentials("a@b.io", "secret").is_ok());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("writer@example.com").is_ok());
        assert!(validate_email("  writer@example.com ").is_ok());
        let err = validate_email("not-an-email").unwrap_err();
        assert!(err.to_string().contains("Invalid email format"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        // Six characters, more than six bytes.
        assert!(validate_password("ééééé").is_err());
        assert!(validate_password("éééééé").is_ok());
    }

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email(" Writer@Example.COM "), "writer@example.com");
    }
}

//! Credential checks.
//!
//! These run before any simulated round trip; a failure here is shown
//! immediately.

use crate::SessionError;

/// Accepted admin credentials. Any non-blank pair is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
}

/// Check that both fields are filled in.
pub fn validate_admin(username: &str, password: &str) -> Result<AdminCredentials, SessionError> {
    if username.is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }
    Ok(AdminCredentials {
        username: username.to_string(),
    })
}

/// Check a Turkish mobile number: `05` followed by nine digits.
pub fn validate_phone(phone: &str) -> Result<&str, SessionError> {
    let valid = phone.len() == 11
        && phone.starts_with("05")
        && phone.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(phone)
    } else {
        Err(SessionError::InvalidPhone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_needs_both_fields() {
        assert!(validate_admin("admin", "x").is_ok());
        assert!(matches!(validate_admin("", "x"), Err(SessionError::MissingCredentials)));
        assert!(matches!(validate_admin("admin", ""), Err(SessionError::MissingCredentials)));
    }

    #[test]
    fn test_phone_format() {
        assert_eq!(validate_phone("05551234567").unwrap(), "05551234567");
        for bad in ["5551234567", "0555123456", "055512345678", "04551234567", "0555 123 45 67", "05551234a67", ""] {
            assert!(matches!(validate_phone(bad), Err(SessionError::InvalidPhone)), "{bad}");
        }
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            SessionError::InvalidPhone.to_string(),
            "Lütfen geçerli bir telefon numarası giriniz (05XX XXX XX XX)"
        );
    }
}

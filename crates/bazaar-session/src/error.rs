//! Session error types.
//!
//! Validation variants display the inline message shown under the login form.

use crate::Role;
use thiserror::Error;

/// Errors that can occur during login, mount and submission.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Username or password left blank.
    #[error("Lütfen kullanıcı adı ve şifre giriniz")]
    MissingCredentials,

    /// Phone number is not `05` followed by nine digits.
    #[error("Lütfen geçerli bir telefon numarası giriniz (05XX XXX XX XX)")]
    InvalidPhone,

    /// No seed customer has this phone number.
    #[error("Bu telefon numarasına ait müşteri bulunamadı")]
    CustomerNotFound(String),

    /// The portal's markers are missing or stale.
    #[error("not logged in to the {0} portal")]
    NotLoggedIn(Role),

    /// Another submission is still in flight.
    #[error("a submission is already in progress")]
    SubmissionPending,

    /// Failed to read or write the marker file.
    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Marker file is not a JSON object of strings.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Order validation failed.
    #[error(transparent)]
    Commerce(#[from] bazaar_commerce::CommerceError),
}

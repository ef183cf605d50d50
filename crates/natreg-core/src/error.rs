//! # Error Types
//!
//! Validation errors for the checked identifier constructors, built with
//! `thiserror`. The keystroke pipeline itself never fails; these errors
//! only surface when a caller asks for a value that is *guaranteed* valid
//! (a [`Cpf`](crate::Cpf), a [`Cnpj`](crate::Cnpj), or strictly canonical
//! digits).

use thiserror::Error;

/// Validation errors for national registration newtypes.
///
/// Each variant carries the offending input so that operators can see
/// exactly what was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input contains characters other than digits and mask separators.
    #[error(
        "invalid national registration: \"{0}\" contains characters other than \
         digits and mask separators"
    )]
    NonDigit(String),

    /// Digit count matches neither CPF (11) nor CNPJ (14).
    #[error(
        "invalid national registration length: \"{value}\" has {digit_count} digits \
         (expected 11 for CPF or 14 for CNPJ)"
    )]
    InvalidLength {
        /// The rejected input.
        value: String,
        /// Number of digits found in the input.
        digit_count: usize,
    },

    /// CPF failed the repeated-digit or check-digit test.
    #[error("invalid CPF: \"{0}\" (check digits do not match)")]
    InvalidCpf(String),

    /// CNPJ failed the repeated-digit or check-digit test.
    #[error("invalid CNPJ: \"{0}\" (check digits do not match)")]
    InvalidCnpj(String),
}

//! # Error Types
//!
//! `thiserror` enums for the form layer. `Display` is the diagnostic text
//! for logs; [`FormError::user_message`] gives the operator-facing text.

use std::path::PathBuf;

use thiserror::Error;

use natreg_core::InvalidReason;

use crate::messages;

/// Submission was refused before reaching the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No digits were entered.
    #[error("national registration number is required")]
    Required,

    /// The number failed validation.
    #[error("national registration number is invalid: {0}")]
    InvalidNumber(InvalidReason),
}

impl FormError {
    /// Text shown next to the number field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Required => messages::REQUIRED_FIELD,
            Self::InvalidNumber(_) => messages::INVALID_NUMBER,
        }
    }
}

/// Rejected list filter change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Page size not among the configured options.
    #[error("unsupported page size {requested} (allowed: {allowed:?})")]
    UnsupportedPageSize {
        /// The requested page size.
        requested: u32,
        /// The configured options.
        allowed: Vec<u32>,
    },
}

/// Configuration could not be loaded or is inconsistent.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML did not parse into a configuration.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No page sizes configured.
    #[error("page_size_options must not be empty")]
    NoPageSizes,

    /// A page size of zero was configured.
    #[error("page sizes must be positive")]
    ZeroPageSize,

    /// The default page size is not one of the options.
    #[error("default_page_size {default} is not one of page_size_options {options:?}")]
    DefaultPageSizeNotOffered {
        /// Configured default.
        default: u32,
        /// Configured options.
        options: Vec<u32>,
    },

    /// The digit cap would make CNPJs impossible to enter.
    #[error("max_digits {0} is below the 14 digits of a CNPJ")]
    MaxDigitsTooSmall(usize),

    /// The digit cap would let digits past a complete CNPJ into the field.
    #[error("max_digits {0} is above the 14 digits of a CNPJ")]
    MaxDigitsTooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use natreg_core::IdentifierKind;

    #[test]
    fn user_messages() {
        assert_eq!(FormError::Required.user_message(), "Este campo é obrigatório");
        let err = FormError::InvalidNumber(InvalidReason::CheckDigit {
            kind: IdentifierKind::Cpf,
        });
        assert_eq!(err.user_message(), "CPF/CNPJ inválido.");
        assert!(err.to_string().contains("CPF check digits do not match"));
    }

    #[test]
    fn filter_error_lists_options() {
        let err = FilterError::UnsupportedPageSize {
            requested: 7,
            allowed: vec![5, 10, 20],
        };
        assert_eq!(err.to_string(), "unsupported page size 7 (allowed: [5, 10, 20])");
    }
}

//! # Identifier Validator
//!
//! Mod-11 check-digit validation for CPF and CNPJ.
//!
//! ## Routing
//!
//! The algorithm is chosen from the digit count at validation time, never
//! from the classifier's display state: 11 digits → CPF, 14 digits → CNPJ,
//! anything else is rejected without running either algorithm. A pasted
//! 14-digit value therefore validates correctly even if no keystroke ever
//! moved the classifier.
//!
//! ## Check digits
//!
//! Both identifiers carry two trailing check digits. Each is computed from
//! the digits before it as `Σ digit[i] · weight[i]`, then
//! `r = sum mod 11` and the expected digit is `0` when `r < 2`, else
//! `11 - r`.
//!
//! | Identifier | First digit weights | Second digit weights |
//! |------------|---------------------|----------------------|
//! | CPF  | `10..=2` over 9 digits | `11..=2` over 10 digits |
//! | CNPJ | `5,4,3,2,9,8,7,6,5,4,3,2` | `6,5,4,3,2,9,8,7,6,5,4,3,2` |
//!
//! Sequences of one repeated digit are rejected up front; several of them
//! (e.g. `00000000000`, `11111111111`) would otherwise pass the checksum.

use serde::{Deserialize, Serialize};

use crate::classifier::{IdentifierKind, CNPJ_DIGITS, CPF_DIGITS};
use crate::digits::CanonicalDigits;

const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidReason {
    /// Digit count is neither 11 nor 14. No algorithm was attempted.
    Length {
        /// Number of characters examined.
        digit_count: usize,
    },
    /// Input contained a character outside `0`-`9`.
    NonDigit,
    /// Every digit is identical.
    RepeatedDigits {
        /// Algorithm selected by length.
        kind: IdentifierKind,
    },
    /// A check digit did not match.
    CheckDigit {
        /// Algorithm selected by length.
        kind: IdentifierKind,
    },
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { digit_count } => {
                write!(f, "{digit_count} digits (expected 11 or 14)")
            }
            Self::NonDigit => f.write_str("contains non-digit characters"),
            Self::RepeatedDigits { kind } => write!(f, "{kind} with all digits identical"),
            Self::CheckDigit { kind } => write!(f, "{kind} check digits do not match"),
        }
    }
}

/// Result of validating a digit string.
///
/// Validation fails closed: there is no partial validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ValidationVerdict {
    /// Both check digits matched under the algorithm for `kind`.
    Valid {
        /// Algorithm that accepted the value.
        kind: IdentifierKind,
    },
    /// Rejected.
    Invalid {
        /// Why.
        #[serde(flatten)]
        reason: InvalidReason,
    },
}

impl ValidationVerdict {
    /// Whether submission may proceed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The algorithm that was applied, if the length selected one.
    pub fn kind(&self) -> Option<IdentifierKind> {
        match self {
            Self::Valid { kind } => Some(*kind),
            Self::Invalid {
                reason: InvalidReason::RepeatedDigits { kind } | InvalidReason::CheckDigit { kind },
            } => Some(*kind),
            Self::Invalid { .. } => None,
        }
    }

    fn invalid(reason: InvalidReason) -> Self {
        Self::Invalid { reason }
    }
}

impl std::fmt::Display for ValidationVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid { kind } => write!(f, "valid {kind}"),
            Self::Invalid { reason } => write!(f, "invalid: {reason}"),
        }
    }
}

/// Validate canonical digits.
pub fn validate(digits: &CanonicalDigits) -> ValidationVerdict {
    validate_str(digits.as_str())
}

/// Validate an arbitrary string with the same routing as [`validate`].
///
/// No separators are stripped here: any character outside `0`-`9` makes the
/// value invalid.
pub fn validate_str(value: &str) -> ValidationVerdict {
    let Some(values) = value
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect::<Option<Vec<u8>>>()
    else {
        return ValidationVerdict::invalid(InvalidReason::NonDigit);
    };

    let Some(kind) = IdentifierKind::for_complete_length(values.len()) else {
        return ValidationVerdict::invalid(InvalidReason::Length {
            digit_count: values.len(),
        });
    };

    if values.iter().all(|d| *d == values[0]) {
        return ValidationVerdict::invalid(InvalidReason::RepeatedDigits { kind });
    }

    let (first_weights, second_weights): (&[u32], &[u32]) = match kind {
        IdentifierKind::Cpf => (&CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS),
        IdentifierKind::Cnpj => (&CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS),
    };

    let body = kind.digit_count() - 2;
    let expected = check_digit_pair(&values[..body], first_weights, second_weights);
    if values[body..] == expected {
        ValidationVerdict::Valid { kind }
    } else {
        ValidationVerdict::invalid(InvalidReason::CheckDigit { kind })
    }
}

/// Compute the two CPF check digits for a 9-digit base.
pub fn cpf_check_digits(base: &[u8; CPF_DIGITS - 2]) -> [u8; 2] {
    check_digit_pair(base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS)
}

/// Compute the two CNPJ check digits for a 12-digit base.
pub fn cnpj_check_digits(base: &[u8; CNPJ_DIGITS - 2]) -> [u8; 2] {
    check_digit_pair(base, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS)
}

fn check_digit_pair(base: &[u8], first_weights: &[u32], second_weights: &[u32]) -> [u8; 2] {
    let first = mod11_check_digit(base, first_weights);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = mod11_check_digit(&extended, second_weights);
    [first, second]
}

/// Weighted mod-11 check digit.
///
/// `digits` and `weights` are zipped; callers pass slices of equal length.
pub fn mod11_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        // r is in 2..=10, so the result fits in a single digit.
        r => (11 - r) as u8,
    }
}

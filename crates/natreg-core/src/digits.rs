//! # Digit Extraction
//!
//! Every edit event starts here. Whatever the input field currently holds
//! (previously rendered separators, pasted text with spaces, stray
//! letters) is reduced to the ordered ASCII digits it contains.
//!
//! No length limit is enforced: truncation is a caller policy (see
//! [`CanonicalDigits::truncated`]).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An ordered, separator-free string of ASCII decimal digits.
///
/// Constructed either leniently through [`extract`] (drops everything that
/// is not a digit) or strictly through [`CanonicalDigits::from_digits`]
/// (rejects anything that is not a digit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalDigits(String);

impl<'de> Deserialize<'de> for CanonicalDigits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_digits(raw).map_err(serde::de::Error::custom)
    }
}

/// Strip every non-digit character from `raw`, preserving order.
///
/// Total: never fails, empty input yields empty output.
pub fn extract(raw: &str) -> CanonicalDigits {
    CanonicalDigits(raw.chars().filter(char::is_ascii_digit).collect())
}

impl CanonicalDigits {
    /// Create canonical digits from a string that must already be digits only.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonDigit`] if any character is not `0`-`9`.
    pub fn from_digits(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonDigit(s));
        }
        Ok(Self(s))
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        // ASCII only, so bytes == chars.
        self.0.len()
    }

    /// Whether no digits were entered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of each digit, in order.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Keep at most `max` leading digits.
    ///
    /// The engine never truncates on its own; forms call this to cap the
    /// field at the longest identifier they accept.
    pub fn truncated(mut self, max: usize) -> Self {
        self.0.truncate(max);
        self
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_strips_separators() {
        assert_eq!(extract("529.982.247-25").as_str(), "52998224725");
        assert_eq!(extract("11.444.777/0001-61").as_str(), "11444777000161");
    }

    #[test]
    fn extract_drops_letters_and_whitespace() {
        assert_eq!(extract(" 12a3\tb-4 ").as_str(), "1234");
    }

    #[test]
    fn extract_empty() {
        assert!(extract("").is_empty());
        assert!(extract("./-").is_empty());
    }

    #[test]
    fn extract_does_not_truncate() {
        let long = "1".repeat(30);
        assert_eq!(extract(&long).len(), 30);
    }

    #[test]
    fn extract_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not decimal ASCII.
        assert_eq!(extract("١٢3４5").as_str(), "35");
    }

    #[test]
    fn from_digits_rejects_separators() {
        assert!(CanonicalDigits::from_digits("12345").is_ok());
        assert!(CanonicalDigits::from_digits("").is_ok());
        assert_eq!(
            CanonicalDigits::from_digits("123.45"),
            Err(ValidationError::NonDigit("123.45".to_string()))
        );
    }

    #[test]
    fn digits_yields_numeric_values() {
        let d = extract("0-9-5");
        assert_eq!(d.digits().collect::<Vec<_>>(), vec![0, 9, 5]);
    }

    #[test]
    fn truncated_keeps_prefix() {
        assert_eq!(extract("1234567890123456").truncated(14).as_str(), "12345678901234");
        assert_eq!(extract("123").truncated(14).as_str(), "123");
    }

    #[test]
    fn serde_transparent_and_validating() {
        let d = extract("12.3");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"123\"");
        let back: CanonicalDigits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<CanonicalDigits>("\"12.3\"").is_err());
    }
}

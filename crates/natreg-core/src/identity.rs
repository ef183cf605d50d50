//! # National Registration Newtypes
//!
//! Validated identifiers for code that needs a number that is *known* to be
//! good: the payload handed to the persistence layer, records read back
//! from it, fixtures. The keystroke pipeline does not use these; it works
//! with [`CanonicalDigits`] and [`ValidationVerdict`](crate::ValidationVerdict).
//!
//! ## Validation
//!
//! Constructors accept either the bare digits (`"52998224725"`) or the
//! masked form (`"529.982.247-25"`). Anything other than digits and the
//! mask separators (`.`, `-`, `/`, whitespace) is rejected. The canonical
//! digit string is what gets stored and serialized.

use serde::{Deserialize, Serialize};

use crate::classifier::IdentifierKind;
use crate::digits::{extract, CanonicalDigits};
use crate::error::ValidationError;
use crate::mask::render;
use crate::validator::{validate, ValidationVerdict};

/// Route deserialization through the validating constructor so invalid
/// values are rejected at the boundary.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Strip mask separators, rejecting any other non-digit.
fn canonicalize(raw: &str) -> Result<CanonicalDigits, ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '/') || c.is_whitespace();
    if !raw.chars().all(allowed) {
        return Err(ValidationError::NonDigit(raw.to_string()));
    }
    Ok(extract(raw))
}

/// Validate `raw` as the given kind, returning its canonical digits.
fn checked(raw: String, kind: IdentifierKind) -> Result<CanonicalDigits, ValidationError> {
    let digits = canonicalize(&raw)?;
    if digits.len() != kind.digit_count() {
        return Err(ValidationError::InvalidLength {
            digit_count: digits.len(),
            value: raw,
        });
    }
    match validate(&digits) {
        ValidationVerdict::Valid { .. } => Ok(digits),
        ValidationVerdict::Invalid { .. } => Err(match kind {
            IdentifierKind::Cpf => ValidationError::InvalidCpf(raw),
            IdentifierKind::Cnpj => ValidationError::InvalidCnpj(raw),
        }),
    }
}

/// A checksum-valid CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(CanonicalDigits);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from raw or masked input.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NonDigit`], [`ValidationError::InvalidLength`] or
    /// [`ValidationError::InvalidCpf`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(value.into(), IdentifierKind::Cpf).map(Self)
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Masked form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        render(&self.0, IdentifierKind::Cpf.template())
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// A checksum-valid CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cnpj(CanonicalDigits);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from raw or masked input.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NonDigit`], [`ValidationError::InvalidLength`] or
    /// [`ValidationError::InvalidCnpj`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        checked(value.into(), IdentifierKind::Cnpj).map(Self)
    }

    /// The 14 canonical digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Masked form: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        render(&self.0, IdentifierKind::Cnpj.template())
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Either a CPF or a CNPJ, chosen by digit count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NationalRegistration {
    /// Individual.
    Cpf(Cpf),
    /// Entity.
    Cnpj(Cnpj),
}

impl_validating_deserialize!(NationalRegistration);

impl NationalRegistration {
    /// Parse raw or masked input, routing by digit count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] when the digit count is
    /// neither 11 nor 14, otherwise the error of the selected type.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digit_count = canonicalize(&raw)?.len();
        match IdentifierKind::for_complete_length(digit_count) {
            Some(IdentifierKind::Cpf) => Cpf::new(raw).map(Self::Cpf),
            Some(IdentifierKind::Cnpj) => Cnpj::new(raw).map(Self::Cnpj),
            None => Err(ValidationError::InvalidLength { value: raw, digit_count }),
        }
    }

    /// Alias for [`new`](Self::new).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::new(value)
    }

    /// Which identifier this is.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Cpf(_) => IdentifierKind::Cpf,
            Self::Cnpj(_) => IdentifierKind::Cnpj,
        }
    }

    /// Canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(c) => c.as_str(),
            Self::Cnpj(c) => c.as_str(),
        }
    }

    /// Masked form for the identifier's kind.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(c) => c.formatted(),
            Self::Cnpj(c) => c.formatted(),
        }
    }
}

impl std::fmt::Display for NationalRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for NationalRegistration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Cpf> for NationalRegistration {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for NationalRegistration {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cpf --

    #[test]
    fn cpf_accepts_raw_and_masked() {
        let raw = Cpf::new("52998224725").unwrap();
        let masked = Cpf::new("529.982.247-25").unwrap();
        assert_eq!(raw, masked);
        assert_eq!(masked.as_str(), "52998224725");
        assert_eq!(raw.formatted(), "529.982.247-25");
        assert_eq!(format!("{raw}"), "529.982.247-25");
    }

    #[test]
    fn cpf_rejects_invalid() {
        assert!(matches!(Cpf::new(""), Err(ValidationError::InvalidLength { digit_count: 0, .. })));
        assert!(matches!(Cpf::new("11111111111"), Err(ValidationError::InvalidCpf(_))));
        assert!(matches!(Cpf::new("52998224726"), Err(ValidationError::InvalidCpf(_))));
        assert!(matches!(Cpf::new("5299822472a"), Err(ValidationError::NonDigit(_))));
        assert!(matches!(
            Cpf::new("11444777000161"),
            Err(ValidationError::InvalidLength { digit_count: 14, .. })
        ));
    }

    // -- Cnpj --

    #[test]
    fn cnpj_accepts_raw_and_masked() {
        let cnpj = Cnpj::new("11.444.777/0001-61").unwrap();
        assert_eq!(cnpj.as_str(), "11444777000161");
        assert_eq!(cnpj.formatted(), "11.444.777/0001-61");
    }

    #[test]
    fn cnpj_rejects_invalid() {
        assert!(matches!(Cnpj::new("11111111111111"), Err(ValidationError::InvalidCnpj(_))));
        assert!(matches!(Cnpj::new("11444777000160"), Err(ValidationError::InvalidCnpj(_))));
        assert!(Cnpj::new("52998224725").is_err());
    }

    // -- NationalRegistration --

    #[test]
    fn registration_routes_by_length() {
        let cpf: NationalRegistration = "529.982.247-25".parse().unwrap();
        assert_eq!(cpf.kind(), IdentifierKind::Cpf);
        let cnpj = NationalRegistration::parse("11444777000161").unwrap();
        assert_eq!(cnpj.kind(), IdentifierKind::Cnpj);
        assert_eq!(cnpj.to_string(), "11.444.777/0001-61");
    }

    #[test]
    fn registration_rejects_incomplete() {
        assert_eq!(
            NationalRegistration::parse("529982247251"),
            Err(ValidationError::InvalidLength {
                value: "529982247251".to_string(),
                digit_count: 12
            })
        );
    }

    #[test]
    fn registration_serializes_canonical_digits() {
        let reg = NationalRegistration::parse("529.982.247-25").unwrap();
        assert_eq!(serde_json::to_string(&reg).unwrap(), "\"52998224725\"");
        let back: NationalRegistration = serde_json::from_str("\"11444777000161\"").unwrap();
        assert_eq!(back.kind(), IdentifierKind::Cnpj);
    }

    #[test]
    fn deserialize_rejects_bad_checksum() {
        assert!(serde_json::from_str::<Cpf>("\"11111111111\"").is_err());
        assert!(serde_json::from_str::<NationalRegistration>("\"123\"").is_err());
    }

    #[test]
    fn from_impls() {
        let cpf = Cpf::new("52998224725").unwrap();
        assert_eq!(NationalRegistration::from(cpf.clone()), NationalRegistration::Cpf(cpf));
    }
}

//! Persisted registration records as the console receives them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use natreg_core::{format_for_display, CanonicalDigits};

/// Identifier of a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    /// Create a new random registration identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a registration identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RegistrationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// A stored CPF or CNPJ.
///
/// `number` is kept as canonical digits rather than a checked
/// [`NationalRegistration`](natreg_core::NationalRegistration): the listing
/// shows whatever the backend holds, valid or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// Record identifier.
    pub id: RegistrationId,
    /// Canonical digits.
    pub number: CanonicalDigits,
    /// Whether the number is blocked.
    pub blocked: bool,
}

impl RegistrationRecord {
    /// Number formatted for the listing table.
    pub fn formatted_number(&self) -> String {
        format_for_display(&self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natreg_core::extract;

    #[test]
    fn id_roundtrip() {
        let id = RegistrationId::new();
        let parsed: RegistrationId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_ne!(RegistrationId::new(), RegistrationId::default());
    }

    #[test]
    fn record_serde_shape() {
        let id = RegistrationId::from_uuid(Uuid::nil());
        let record = RegistrationRecord {
            id,
            number: extract("52998224725"),
            blocked: true,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "number": "52998224725",
                "blocked": true
            })
        );
        let back: RegistrationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_rejects_separators_in_number() {
        let json = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "number": "529.982.247-25",
            "blocked": false
        });
        assert!(serde_json::from_value::<RegistrationRecord>(json).is_err());
    }

    #[test]
    fn formatted_number() {
        let record = RegistrationRecord {
            id: RegistrationId::new(),
            number: extract("11444777000161"),
            blocked: false,
        };
        assert_eq!(record.formatted_number(), "11.444.777/0001-61");
    }
}

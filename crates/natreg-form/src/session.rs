//! # Registration Form Session
//!
//! One open "Cadastrar/Atualizar CPF/CNPJ" form. The session owns its own
//! [`MaskClassifier`], so several identifier fields on one screen never
//! share classification state, and closing or resetting the form discards
//! it.
//!
//! ## Lifecycle
//!
//! ```text
//! open_new() / open_existing() ──▶ input()* ──▶ submit() ──▶ Submission
//!                                     │              │
//!                                     │              └──▶ FormError (Required | InvalidNumber)
//!                                     └──▶ reset()
//! ```
//!
//! Edit events must be fed one at a time, in order.

use serde::{Deserialize, Serialize};

use natreg_core::{
    extract, render, validate, CanonicalDigits, IdentifierKind, MaskClassifier, ValidationVerdict,
};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::messages;
use crate::record::{RegistrationId, RegistrationRecord};

/// What the backend should do with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum SubmitAction {
    /// Store a new record.
    Create,
    /// Overwrite the record with this id.
    Update(RegistrationId),
}

/// Body sent to the backend: canonical digits only, never the mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    /// Canonical digits.
    pub number: CanonicalDigits,
    /// Whether the number is blocked.
    pub blocked: bool,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Create or update.
    pub action: SubmitAction,
    /// Identifier type that validated.
    pub kind: IdentifierKind,
    /// Body for the backend.
    pub payload: RegistrationPayload,
}

/// How a save attempt failed after leaving the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitFailure {
    /// The number is already registered.
    AlreadyExists,
    /// The backend could not be reached.
    Network,
    /// Anything else.
    Other,
}

impl SubmitFailure {
    /// Classify a backend error response body.
    pub fn from_response_body(body: &str) -> Self {
        if body == messages::ALREADY_EXISTS_RESPONSE {
            Self::AlreadyExists
        } else {
            Self::Other
        }
    }

    /// Operator-facing message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::AlreadyExists => messages::ALREADY_REGISTERED,
            Self::Network => messages::SERVICE_UNAVAILABLE,
            Self::Other => messages::SAVE_FAILED,
        }
    }
}

/// One open registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    record_id: Option<RegistrationId>,
    classifier: MaskClassifier,
    digits: CanonicalDigits,
    display: String,
    blocked: bool,
    max_digits: usize,
}

impl RegistrationForm {
    /// Open an empty form for a new record.
    pub fn open_new(config: &FormConfig) -> Self {
        Self {
            record_id: None,
            classifier: MaskClassifier::new(),
            digits: CanonicalDigits::default(),
            display: String::new(),
            blocked: false,
            max_digits: config.max_digits,
        }
    }

    /// Open a form pre-filled from a stored record.
    ///
    /// The stored number is fed through the session like a paste, so the
    /// classifier starts in the state matching its length.
    pub fn open_existing(config: &FormConfig, record: &RegistrationRecord) -> Self {
        let mut form = Self::open_new(config);
        form.record_id = Some(record.id);
        form.blocked = record.blocked;
        form.input(record.number.as_str());
        form
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self.record_id {
            Some(_) => messages::TITLE_UPDATE,
            None => messages::TITLE_CREATE,
        }
    }

    /// Process one edit event carrying the field's full raw text.
    ///
    /// Returns the text the field should now display.
    pub fn input(&mut self, raw: &str) -> &str {
        let digits = extract(raw).truncated(self.max_digits);
        let template = self.classifier.observe(&digits);
        self.display = render(&digits, template);
        self.digits = digits;
        &self.display
    }

    /// Text currently displayed in the number field.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Canonical digits entered so far.
    pub fn digits(&self) -> &CanonicalDigits {
        &self.digits
    }

    /// Current mask classification.
    pub fn kind(&self) -> IdentifierKind {
        self.classifier.kind()
    }

    /// Blocked switch state.
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// Set the blocked switch.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Record being edited, if any.
    pub fn record_id(&self) -> Option<RegistrationId> {
        self.record_id
    }

    /// Verdict for the digits as they stand.
    pub fn verdict(&self) -> ValidationVerdict {
        validate(&self.digits)
    }

    /// Gate submission on the validation verdict.
    pub fn submit(&self) -> Result<Submission, FormError> {
        if self.digits.is_empty() {
            tracing::debug!("submit refused: number missing");
            return Err(FormError::Required);
        }

        match self.verdict() {
            ValidationVerdict::Valid { kind } => {
                let action = match self.record_id {
                    Some(id) => SubmitAction::Update(id),
                    None => SubmitAction::Create,
                };
                tracing::debug!(%kind, ?action, "submit accepted");
                Ok(Submission {
                    action,
                    kind,
                    payload: RegistrationPayload {
                        number: self.digits.clone(),
                        blocked: self.blocked,
                    },
                })
            }
            ValidationVerdict::Invalid { reason } => {
                tracing::debug!(%reason, "submit refused: invalid number");
                Err(FormError::InvalidNumber(reason))
            }
        }
    }

    /// Record a failed save reported by the backend and return the message
    /// to show the operator.
    pub fn report_failure(&self, failure: SubmitFailure) -> &'static str {
        tracing::warn!(
            ?failure,
            record_id = ?self.record_id,
            "saving national registration failed"
        );
        failure.user_message()
    }

    /// Clear the field, the blocked switch and the classification state.
    ///
    /// The record being edited stays bound to the form.
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.digits = CanonicalDigits::default();
        self.display.clear();
        self.blocked = false;
    }
}

//! # Mask Classifier
//!
//! Decides, on every edit, whether the digits typed so far belong to a CPF
//! or a CNPJ, and hands back the matching [`MaskTemplate`].
//!
//! ## States
//!
//! ```text
//!            len > 11
//!   CPF ─────────────────▶ CNPJ
//!    ▲                       │
//!    └───────────────────────┘
//!            len <= 11
//! ```
//!
//! 11 digits is the last length classified as CPF; the 12th digit flips the
//! state on that same edit. Removing digits back down to 11 flips it back.
//!
//! One classifier belongs to one editing session. Two identifier fields on
//! the same screen each own their own instance.

use serde::{Deserialize, Serialize};

use crate::digits::{extract, CanonicalDigits};
use crate::mask::{render, MaskTemplate, CNPJ_MASK, CPF_MASK};

/// Digit count of a complete CPF.
pub const CPF_DIGITS: usize = 11;

/// Digit count of a complete CNPJ.
pub const CNPJ_DIGITS: usize = 14;

/// The two national registration shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas: individual, 11 digits.
    #[default]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: entity, 14 digits.
    Cnpj,
}

impl IdentifierKind {
    /// Digit count of a complete identifier of this kind.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => CPF_DIGITS,
            Self::Cnpj => CNPJ_DIGITS,
        }
    }

    /// The mask bound to this kind.
    pub fn template(self) -> &'static MaskTemplate {
        match self {
            Self::Cpf => &CPF_MASK,
            Self::Cnpj => &CNPJ_MASK,
        }
    }

    /// The kind whose complete length is exactly `len`, if any.
    pub fn for_complete_length(len: usize) -> Option<Self> {
        match len {
            CPF_DIGITS => Some(Self::Cpf),
            CNPJ_DIGITS => Some(Self::Cnpj),
            _ => None,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        };
        f.pad(s)
    }
}

/// Session-scoped classification state.
///
/// Starts as [`IdentifierKind::Cpf`]. Callers must run [`observe`](Self::observe)
/// before rendering on every edit so the template reflects the latest digit
/// count; [`apply`](Self::apply) does both in the required order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskClassifier {
    kind: IdentifierKind,
}

impl MaskClassifier {
    /// A fresh classifier for a new editing session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Update the classification from the current digits and return the
    /// template to render with.
    pub fn observe(&mut self, digits: &CanonicalDigits) -> &'static MaskTemplate {
        let len = digits.len();
        let next = match self.kind {
            IdentifierKind::Cpf if len > CPF_DIGITS => IdentifierKind::Cnpj,
            IdentifierKind::Cnpj if len <= CPF_DIGITS => IdentifierKind::Cpf,
            unchanged => unchanged,
        };

        if next != self.kind {
            tracing::debug!(
                from = %self.kind,
                to = %next,
                digit_count = len,
                "mask classification changed"
            );
            self.kind = next;
        }

        self.kind.template()
    }

    /// Process one raw edit event: extract, observe, render.
    pub fn apply(&mut self, raw: &str) -> String {
        let digits = extract(raw);
        let template = self.observe(&digits);
        render(&digits, template)
    }

    /// Discard the session state, returning to CPF.
    pub fn reset(&mut self) {
        self.kind = IdentifierKind::Cpf;
    }
}

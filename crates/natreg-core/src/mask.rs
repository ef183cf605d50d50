//! # Mask Templates and Rendering
//!
//! The two fixed masks, reproduced character for character:
//!
//! | Kind | Pattern | Digits | Rendered length |
//! |------|---------|--------|-----------------|
//! | CPF  | `###.###.###-##`     | 11 | 14 |
//! | CNPJ | `##.###.###/####-##` | 14 | 18 |
//!
//! Rendering shows no guide characters: partial input displays only the
//! digits typed so far plus the separators that sit *between* them. A
//! separator is never left dangling after the last digit.

use serde::{Deserialize, Serialize};

use crate::classifier::IdentifierKind;
use crate::digits::CanonicalDigits;

/// One position in a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSlot {
    /// Filled by the next unconsumed digit.
    Digit,
    /// A fixed separator (`.`, `-`, `/`).
    Literal(char),
}

/// An immutable sequence of digit placeholders and literal separators.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MaskTemplate {
    kind: IdentifierKind,
    slots: &'static [MaskSlot],
}

const D: MaskSlot = MaskSlot::Digit;
const DOT: MaskSlot = MaskSlot::Literal('.');
const DASH: MaskSlot = MaskSlot::Literal('-');
const SLASH: MaskSlot = MaskSlot::Literal('/');

/// CPF mask: `###.###.###-##`.
pub static CPF_MASK: MaskTemplate = MaskTemplate {
    kind: IdentifierKind::Cpf,
    slots: &[D, D, D, DOT, D, D, D, DOT, D, D, D, DASH, D, D],
};

/// CNPJ mask: `##.###.###/####-##`.
pub static CNPJ_MASK: MaskTemplate = MaskTemplate {
    kind: IdentifierKind::Cnpj,
    slots: &[
        D, D, DOT, D, D, D, DOT, D, D, D, SLASH, D, D, D, D, DASH, D, D,
    ],
};

impl MaskTemplate {
    /// Which identifier this template renders.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// The slots in order.
    pub fn slots(&self) -> &'static [MaskSlot] {
        self.slots
    }

    /// Number of digit placeholders (11 for CPF, 14 for CNPJ).
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, MaskSlot::Digit)).count()
    }

    /// Length of a fully rendered value.
    pub fn rendered_len(&self) -> usize {
        self.slots.len()
    }

    /// Textual pattern with `#` for each placeholder.
    pub fn pattern(&self) -> String {
        self.slots
            .iter()
            .map(|s| match s {
                MaskSlot::Digit => '#',
                MaskSlot::Literal(c) => *c,
            })
            .collect()
    }
}

impl std::fmt::Display for MaskTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern())
    }
}

/// Render `digits` through `template`.
///
/// Rendering stops as soon as the digits run out, so a literal is emitted
/// only when a later placeholder will still receive a digit. Digits beyond
/// the template's placeholders are ignored.
pub fn render(digits: &CanonicalDigits, template: &MaskTemplate) -> String {
    let mut remaining = digits.as_str().chars().peekable();
    let mut out = String::with_capacity(template.rendered_len());

    for slot in template.slots() {
        if remaining.peek().is_none() {
            break;
        }
        match slot {
            MaskSlot::Digit => {
                if let Some(c) = remaining.next() {
                    out.push(c);
                }
            }
            MaskSlot::Literal(c) => out.push(*c),
        }
    }

    out
}

/// Format a stored number for the listing table.
///
/// Routes by length alone with no session state: exactly 11 digits render
/// as CPF, anything else as CNPJ.
pub fn format_for_display(digits: &CanonicalDigits) -> String {
    let template = if digits.len() == IdentifierKind::Cpf.digit_count() {
        &CPF_MASK
    } else {
        &CNPJ_MASK
    };
    render(digits, template)
}

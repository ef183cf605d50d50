//! # natreg-core — Adaptive National Registration Input Engine
//!
//! The algorithmic heart of the national registration console. Brazilian
//! taxpayer identifiers come in two shapes: the 11-digit individual CPF and
//! the 14-digit entity CNPJ. Operators type either into the same field, so
//! the engine has to decide which one is being entered while it is typed,
//! reformat the field on every keystroke, and validate the finished number
//! before the form is allowed to submit.
//!
//! ## Pipeline
//!
//! ```text
//! raw edit ──▶ extract() ──▶ MaskClassifier::observe() ──▶ render() ──▶ display
//!                  │
//!   submit ────────┴──────────▶ validate() ──▶ ValidationVerdict
//! ```
//!
//! 1. **Digit extraction** ([`digits`]): strips everything that is not an
//!    ASCII digit, yielding [`CanonicalDigits`].
//!
//! 2. **Classification** ([`classifier`]): a two-state machine that flips to
//!    CNPJ on the 12th digit and back to CPF at 11 or fewer.
//!
//! 3. **Rendering** ([`mask`]): walks the selected [`MaskTemplate`] and emits
//!    separators only ahead of a digit that is actually present.
//!
//! 4. **Validation** ([`validator`]): routes by digit count alone and runs
//!    the mod-11 check-digit algorithms.
//!
//! ## Crate Policy
//!
//! - No I/O, no configuration, no global state.
//! - Extraction, rendering and validation are total: "invalid" is a return
//!   value ([`ValidationVerdict::Invalid`]), never an error.
//! - Only the checked constructors ([`CanonicalDigits::from_digits`],
//!   [`Cpf`], [`Cnpj`], [`NationalRegistration`]) return [`ValidationError`].
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod classifier;
pub mod digits;
pub mod error;
pub mod identity;
pub mod mask;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use classifier::{IdentifierKind, MaskClassifier, CNPJ_DIGITS, CPF_DIGITS};
pub use digits::{extract, CanonicalDigits};
pub use error::ValidationError;
pub use identity::{Cnpj, Cpf, NationalRegistration};
pub use mask::{format_for_display, render, MaskSlot, MaskTemplate, CNPJ_MASK, CPF_MASK};
pub use validator::{
    cnpj_check_digits, cpf_check_digits, validate, validate_str, InvalidReason, ValidationVerdict,
};

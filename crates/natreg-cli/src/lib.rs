//! # natreg-cli — National Registration Console CLI
//!
//! Drives the CPF/CNPJ input engine from a terminal. Handy for checking
//! numbers by hand, reproducing masking behavior keystroke by keystroke,
//! and rendering listing payloads captured from the backend.
//!
//! ## Subcommands
//!
//! - `natreg format` — live-mask rendering of raw input.
//! - `natreg validate` — check-digit validation.
//! - `natreg type` — replay input one character at a time through a form session.
//! - `natreg list` — render a listing page JSON file as table rows.
//!
//! ## Exit codes
//!
//! 0 on success, 1 when a number fails validation, 2 on operational error.
//!
//! Handlers write to the writer they are given so they can be tested
//! without a terminal; `main` passes stdout.

pub mod format;
pub mod list;
pub mod typing;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use natreg_form::FormConfig;

/// Load the form configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FormConfig> {
    match path {
        Some(path) => FormConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(FormConfig::default()),
    }
}

/// Write one JSON document per line.
pub(crate) fn write_json_line(
    out: &mut dyn std::io::Write,
    value: &impl serde::Serialize,
) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

//! # Type Subcommand
//!
//! Replays an input one character at a time through a registration form
//! session, printing the field after every keystroke, then submits.
//! Useful for reproducing what an operator saw while typing.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use natreg_form::{FormConfig, RegistrationForm};

/// Arguments for the `natreg type` subcommand.
#[derive(Args, Debug)]
pub struct TypeArgs {
    /// Characters to type, in order.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Turn on the "blocked" switch before submitting.
    #[arg(long)]
    pub blocked: bool,
}

/// Execute the type subcommand.
///
/// Returns exit code: 0 if the form would submit, 1 if it refuses.
pub fn run_type(args: &TypeArgs, config: &FormConfig, out: &mut dyn Write) -> Result<u8> {
    let mut form = RegistrationForm::open_new(config);
    let mut field = String::new();

    for c in args.input.chars() {
        field.push(c);
        field = form.input(&field).to_string();
        writeln!(out, "{:<4} {field}", form.kind())?;
    }
    form.set_blocked(args.blocked);

    match form.submit() {
        Ok(submission) => {
            crate::write_json_line(out, &submission)?;
            Ok(0)
        }
        Err(e) => {
            tracing::info!(error = %e, "form refused submission");
            writeln!(out, "{}", e.user_message())?;
            Ok(1)
        }
    }
}

//! # Validate Subcommand
//!
//! Runs the check-digit validator on each input after stripping the mask.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use natreg_core::{extract, validate, ValidationVerdict};

/// Arguments for the `natreg validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Numbers to validate, masked or not.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Emit one JSON object per input.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ValidateOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    verdict: ValidationVerdict,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every input is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let mut invalid = 0usize;

    for input in &args.inputs {
        let verdict = validate(&extract(input));
        if !verdict.is_valid() {
            invalid += 1;
        }

        if args.json {
            crate::write_json_line(out, &ValidateOutput { input, verdict })?;
        } else {
            writeln!(out, "{input}: {verdict}")?;
        }
    }

    tracing::info!(total = args.inputs.len(), invalid, "validation finished");
    Ok(if invalid > 0 { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str], json: bool) -> (u8, String) {
        let args = ValidateArgs {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            json,
        };
        let mut out = Vec::new();
        let code = run_validate(&args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_valid() {
        let (code, out) = run(&["529.982.247-25", "11444777000161"], false);
        assert_eq!(code, 0);
        assert_eq!(out, "529.982.247-25: valid CPF\n11444777000161: valid CNPJ\n");
    }

    #[test]
    fn any_invalid_fails() {
        let (code, out) = run(&["52998224725", "11111111111"], false);
        assert_eq!(code, 1);
        assert!(out.contains("11111111111: invalid: CPF with all digits identical"));
    }

    #[test]
    fn json_lines() {
        let (code, out) = run(&["123"], true);
        assert_eq!(code, 1);
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["input"], "123");
        assert_eq!(v["verdict"], "invalid");
        assert_eq!(v["reason"], "length");
    }
}

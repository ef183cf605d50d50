//! # Format Subcommand
//!
//! Renders each input the way the number field would show it after the
//! input was pasted into a fresh form.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use natreg_core::{extract, IdentifierKind, MaskClassifier};

/// Arguments for the `natreg format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Raw inputs (digits, masked numbers, anything).
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Emit one JSON object per input.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FormatOutput<'a> {
    input: &'a str,
    digits: String,
    kind: IdentifierKind,
    display: String,
}

/// Execute the format subcommand. Always returns exit code 0.
pub fn run_format(args: &FormatArgs, out: &mut dyn Write) -> Result<u8> {
    for input in &args.inputs {
        // Each input is its own editing session.
        let mut classifier = MaskClassifier::new();
        let display = classifier.apply(input);

        if args.json {
            crate::write_json_line(
                out,
                &FormatOutput {
                    input,
                    digits: extract(input).into_string(),
                    kind: classifier.kind(),
                    display,
                },
            )?;
        } else {
            writeln!(out, "{display}")?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str], json: bool) -> String {
        let args = FormatArgs {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            json,
        };
        let mut out = Vec::new();
        assert_eq!(run_format(&args, &mut out).unwrap(), 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output() {
        assert_eq!(
            run(&["123", "52998224725", "11444777000161"], false),
            "123\n529.982.247-25\n11.444.777/0001-61\n"
        );
    }

    #[test]
    fn json_output() {
        let line = run(&["529.982"], true);
        let v: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(v["digits"], "529982");
        assert_eq!(v["kind"], "cpf");
        assert_eq!(v["display"], "529.982");
    }
}

//! # List Subcommand
//!
//! Renders a listing page (the JSON body the backend returns for
//! `GET /v1/national-registration`) as the table the console shows.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use natreg_form::{displayed_rows_label, FormConfig, ListFilter, RegistrationPage};

/// Arguments for the `natreg list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to a listing page JSON file (`{"data": [...], "total": N}`).
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// 0-based page index the file was fetched for.
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Rows per page the file was fetched with (defaults to the configured size).
    #[arg(long)]
    pub take: Option<u32>,

    /// Emit the rows as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the list subcommand. Returns exit code 0.
pub fn run_list(args: &ListArgs, config: &FormConfig, out: &mut dyn Write) -> Result<u8> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let page: RegistrationPage = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse listing page {}", args.file.display()))?;

    let mut filter = ListFilter::new(config);
    if let Some(take) = args.take {
        filter.set_rows_per_page(take, config)?;
    }
    filter.set_page(args.page);

    let rows = page.rows();
    tracing::debug!(rows = rows.len(), total = page.total, "rendering listing page");

    if args.json {
        crate::write_json_line(out, &rows)?;
        return Ok(0);
    }

    writeln!(out, "{:<36}  {:>18}  Bloqueado", "ID", "Número")?;
    for row in &rows {
        let blocked = if row.blocked { "sim" } else { "não" };
        writeln!(out, "{:<36}  {:>18}  {blocked}", row.id.to_string(), row.number)?;
    }
    writeln!(out, "{}", displayed_rows_label(&filter, page.total))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "data": [
            {
                "id": "00000000-0000-0000-0000-000000000001",
                "number": "52998224725",
                "blocked": false
            },
            {
                "id": "00000000-0000-0000-0000-000000000002",
                "number": "11444777000161",
                "blocked": true
            }
        ],
        "total": 7
    }"#;

    fn page_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PAGE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn table_output() {
        let file = page_file();
        let args = ListArgs {
            file: file.path().to_path_buf(),
            page: 1,
            take: Some(5),
            json: false,
        };
        let mut out = Vec::new();
        assert_eq!(run_list(&args, &FormConfig::default(), &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("    529.982.247-25  não"));
        assert!(text.contains("11.444.777/0001-61  sim"));
        assert!(text.trim_end().ends_with("6-7 de 7"));
    }

    #[test]
    fn json_output() {
        let file = page_file();
        let args = ListArgs {
            file: file.path().to_path_buf(),
            page: 0,
            take: None,
            json: true,
        };
        let mut out = Vec::new();
        run_list(&args, &FormConfig::default(), &mut out).unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows[1]["number"], "11.444.777/0001-61");
    }

    #[test]
    fn rejects_unsupported_page_size() {
        let file = page_file();
        let args = ListArgs {
            file: file.path().to_path_buf(),
            page: 0,
            take: Some(7),
            json: false,
        };
        assert!(run_list(&args, &FormConfig::default(), &mut Vec::new()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = ListArgs {
            file: PathBuf::from("/nonexistent/page.json"),
            page: 0,
            take: None,
            json: false,
        };
        assert!(run_list(&args, &FormConfig::default(), &mut Vec::new()).is_err());
    }
}

//! # List Filter
//!
//! Filter and pagination state of the registration list screen, sent to
//! the backend as query parameters.
//!
//! ## Blocked tri-state
//!
//! The "Bloqueado" checkbox cycles through three states:
//!
//! ```text
//! Some(false) ──▶ Some(true) ──▶ None (indeterminate, no filter) ──▶ Some(false)
//! ```
//!
//! `skip` is a 1-based page number, not a row offset; that is what the
//! backend expects.

use serde::{Deserialize, Serialize};

use natreg_core::{extract, CanonicalDigits};

use crate::config::FormConfig;
use crate::error::FilterError;

/// Filter and pagination sent with every list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Rows per page.
    pub take: u32,
    /// 1-based page number.
    pub skip: u32,
    /// Blocked filter; `None` lists both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    /// Number filter as canonical digits; `None` lists all numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<CanonicalDigits>,
}

impl ListFilter {
    /// Initial filter: first page, default page size, unblocked only.
    pub fn new(config: &FormConfig) -> Self {
        Self {
            take: config.default_page_size,
            skip: 1,
            blocked: Some(false),
            number: None,
        }
    }

    /// Apply the number field's raw text. A field with no digits removes
    /// the number filter.
    pub fn set_number(&mut self, raw: &str) {
        let digits = extract(raw);
        self.number = if digits.is_empty() { None } else { Some(digits) };
    }

    /// Advance the blocked checkbox one step.
    pub fn toggle_blocked(&mut self) {
        self.blocked = match self.blocked {
            Some(false) => Some(true),
            Some(true) => None,
            None => Some(false),
        };
    }

    /// Jump to a 0-based page index.
    pub fn set_page(&mut self, page: u32) {
        self.skip = page.saturating_add(1);
    }

    /// Current 0-based page index.
    pub fn page(&self) -> u32 {
        self.skip.saturating_sub(1)
    }

    /// Change the page size; only configured sizes are accepted.
    pub fn set_rows_per_page(&mut self, rows: u32, config: &FormConfig) -> Result<(), FilterError> {
        if !config.offers_page_size(rows) {
            return Err(FilterError::UnsupportedPageSize {
                requested: rows,
                allowed: config.page_size_options.clone(),
            });
        }
        self.take = rows;
        Ok(())
    }

    /// Query parameters in a stable order, absent filters omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("take", self.take.to_string()), ("skip", self.skip.to_string())];
        if let Some(blocked) = self.blocked {
            pairs.push(("blocked", blocked.to_string()));
        }
        if let Some(number) = &self.number {
            pairs.push(("number", number.to_string()));
        }
        pairs
    }
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

//! # Listing
//!
//! Page payloads returned by the backend and the rows the table shows.
//! Numbers in the table are formatted by length alone (see
//! [`format_for_display`](natreg_core::format_for_display)); no editing
//! session is involved.
//!
//! ## Delete flow
//!
//! ```text
//!   delete clicked ──▶ DeleteConfirmation ──confirmed──▶ DELETE ──▶ refetch
//!                            │
//!                            └──declined──▶ nothing
//! ```
//!
//! The transport reports each call back as a [`ListingOutcome`], which
//! decides the toast to show and whether the page must be fetched again.

use serde::{Deserialize, Serialize};

use crate::filter::ListFilter;
use crate::messages;
use crate::record::{RegistrationId, RegistrationRecord};

/// One page of registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPage {
    /// Records on this page.
    pub data: Vec<RegistrationRecord>,
    /// Total number of records matching the filter.
    pub total: u64,
}

/// A table row ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRow {
    /// Record identifier.
    pub id: RegistrationId,
    /// Masked number.
    pub number: String,
    /// Whether the number is blocked.
    pub blocked: bool,
}

impl From<&RegistrationRecord> for ListingRow {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            id: record.id,
            number: record.formatted_number(),
            blocked: record.blocked,
        }
    }
}

impl RegistrationPage {
    /// Rows for the table, in backend order.
    pub fn rows(&self) -> Vec<ListingRow> {
        self.data.iter().map(ListingRow::from).collect()
    }

    /// Look up a record on this page, e.g. to open it for editing.
    pub fn find(&self, id: RegistrationId) -> Option<&RegistrationRecord> {
        self.data.iter().find(|r| r.id == id)
    }
}

/// Pagination label: `"{from}-{to} de {count}"`.
pub fn displayed_rows_label(filter: &ListFilter, total: u64) -> String {
    let take = u64::from(filter.take);
    let page = u64::from(filter.page());
    let from = if total == 0 { 0 } else { page * take + 1 };
    let to = total.min((page + 1) * take);
    format!("{from}-{to} de {total}")
}

/// Dialog shown before a record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirmation {
    id: RegistrationId,
}

impl DeleteConfirmation {
    /// Ask before deleting `id`.
    pub fn new(id: RegistrationId) -> Self {
        Self { id }
    }

    /// The record the dialog is about.
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        messages::DELETE_CONFIRM_TITLE
    }

    /// Dialog body.
    pub fn description(&self) -> &'static str {
        messages::DELETE_CONFIRM_DESCRIPTION
    }

    /// The operator's answer. Returns the record to delete, if any.
    pub fn resolve(self, confirmed: bool) -> Option<RegistrationId> {
        tracing::debug!(id = %self.id, confirmed, "delete confirmation answered");
        confirmed.then_some(self.id)
    }
}

/// Transient notification shown after a listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Toast {
    /// Green toast.
    Success(&'static str),
    /// Red toast.
    Error(&'static str),
}

impl Toast {
    /// Text of the toast.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }
}

/// How a listing call reported by the transport ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOutcome {
    /// A page was fetched.
    Fetched,
    /// Fetching a page failed.
    FetchFailed,
    /// A record was deleted.
    Deleted,
    /// Deleting a record failed.
    DeleteFailed,
}

impl ListingOutcome {
    /// The toast to show, if any. Successful fetches are silent.
    pub fn toast(self) -> Option<Toast> {
        match self {
            Self::Fetched => None,
            Self::FetchFailed => Some(Toast::Error(messages::LIST_FAILED)),
            Self::Deleted => Some(Toast::Success(messages::OPERATION_SUCCEEDED)),
            Self::DeleteFailed => Some(Toast::Error(messages::DELETE_FAILED)),
        }
    }

    /// Whether the current page must be fetched again.
    ///
    /// Any answered delete refetches, successful or not; a failed fetch
    /// waits for the next filter change.
    pub fn needs_refresh(self) -> bool {
        matches!(self, Self::Deleted | Self::DeleteFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natreg_core::extract;

    fn record(number: &str, blocked: bool) -> RegistrationRecord {
        RegistrationRecord {
            id: RegistrationId::new(),
            number: extract(number),
            blocked,
        }
    }

    #[test]
    fn rows_format_numbers() {
        let page = RegistrationPage {
            data: vec![record("52998224725", false), record("11444777000161", true)],
            total: 2,
        };
        let rows = page.rows();
        assert_eq!(rows[0].number, "529.982.247-25");
        assert_eq!(rows[1].number, "11.444.777/0001-61");
        assert!(rows[1].blocked);
    }

    #[test]
    fn find_by_id() {
        let r = record("52998224725", false);
        let id = r.id;
        let page = RegistrationPage { data: vec![r], total: 1 };
        assert!(page.find(id).is_some());
        assert!(page.find(RegistrationId::new()).is_none());
    }

    #[test]
    fn label_first_page() {
        let f = ListFilter::default();
        assert_eq!(displayed_rows_label(&f, 25), "1-10 de 25");
    }

    #[test]
    fn label_last_partial_page() {
        let mut f = ListFilter::default();
        f.set_page(2);
        assert_eq!(displayed_rows_label(&f, 25), "21-25 de 25");
    }

    #[test]
    fn label_empty() {
        assert_eq!(displayed_rows_label(&ListFilter::default(), 0), "0-0 de 0");
    }

    #[test]
    fn page_deserializes_backend_shape() {
        let json = r#"{
            "data": [
                {
                    "id": "6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f",
                    "number": "52998224725",
                    "blocked": false
                }
            ],
            "total": 1
        }"#;
        let page: RegistrationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.rows()[0].number, "529.982.247-25");
    }

    #[test]
    fn delete_asks_first() {
        let id = RegistrationId::new();
        let dialog = DeleteConfirmation::new(id);
        assert_eq!(dialog.id(), id);
        assert_eq!(dialog.title(), "Deseja continuar?");
        assert_eq!(
            dialog.description(),
            "Clicando em confirmar, o CPF/CNPJ será excluído."
        );
        assert_eq!(dialog.resolve(true), Some(id));
        assert_eq!(dialog.resolve(false), None);
    }

    #[test]
    fn outcome_toasts() {
        assert_eq!(ListingOutcome::Fetched.toast(), None);
        assert_eq!(
            ListingOutcome::FetchFailed.toast(),
            Some(Toast::Error("Falha ao recuperar os registros."))
        );
        assert_eq!(
            ListingOutcome::Deleted.toast(),
            Some(Toast::Success("Operação realizada com sucesso."))
        );
        assert_eq!(
            ListingOutcome::DeleteFailed.toast().map(|t| t.message()),
            Some("Falha ao tentar deletar registro.")
        );
    }

    #[test]
    fn answered_delete_refetches() {
        assert!(ListingOutcome::Deleted.needs_refresh());
        assert!(ListingOutcome::DeleteFailed.needs_refresh());
        assert!(!ListingOutcome::Fetched.needs_refresh());
        assert!(!ListingOutcome::FetchFailed.needs_refresh());
    }

    #[test]
    fn toast_serializes_level_and_message() {
        let json = serde_json::to_value(Toast::Error(messages::DELETE_FAILED)).unwrap();
        assert_eq!(json["level"], "error");
        assert_eq!(json["message"], "Falha ao tentar deletar registro.");
    }
}

//! # natreg-form — Registration Form and Listing State
//!
//! The layer between the input engine in `natreg-core` and whatever front
//! end and transport an operator console uses. Everything here is pure
//! state: no HTTP, no storage, no rendering toolkit.
//!
//! ## Modules
//!
//! - **Session** (`session.rs`): one open registration form. Owns its own
//!   `MaskClassifier`, applies the digit cap, and gates submission on the
//!   validation verdict.
//! - **Filter** (`filter.rs`): the list screen's filter and pagination
//!   state, serializable as query parameters.
//! - **Listing** (`listing.rs`): page payloads, table rows with formatted
//!   numbers, the "from-to de count" pagination label, and the delete
//!   confirmation and toast outcomes of list calls.
//! - **Config** (`config.rs`): page sizes and digit cap, loadable from YAML.
//! - **Messages** (`messages.rs`): operator-facing texts.

pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod messages;
pub mod record;
pub mod session;

pub use config::FormConfig;
pub use error::{ConfigError, FilterError, FormError};
pub use filter::ListFilter;
pub use listing::{
    displayed_rows_label, DeleteConfirmation, ListingOutcome, ListingRow, RegistrationPage, Toast,
};
pub use record::{RegistrationId, RegistrationRecord};
pub use session::{
    RegistrationForm, RegistrationPayload, SubmitAction, SubmitFailure, Submission,
};

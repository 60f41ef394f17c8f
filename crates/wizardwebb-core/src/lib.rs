// Public fallible APIs in this crate share one concrete error contract (`WizardError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
#[cfg(feature = "markdown-preview")]
pub mod markdown;
pub mod models;
pub mod render;
pub mod shortcut;
pub mod view;

pub use catalog::{Catalog, load_links, parse_links, unique_categories};
pub use config::AppConfig;
pub use error::{Result, WizardError};
pub use filter::{FilterOutcome, filter_links};
pub use models::{LinkRecord, LinkStatus, StatusClass};
pub use view::{ViewEvent, ViewState};

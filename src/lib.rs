//! Browser client for the weekly status report generator.
//!
//! The page posts free-form notes, the server answers with a summary table
//! and prepares a PowerPoint report. This crate holds everything that does
//! not touch the DOM: response decoding, page configuration and the
//! submission flow, driven through the [`View`] and [`Transport`] traits.
//! The `status-web` crate implements those over `web-sys`.

pub mod config;
pub mod error;
pub mod form;
pub mod handler;
pub mod table;
pub mod transport;
pub mod view;

pub use config::PageConfig;
pub use error::{ReportError, Result};
pub use form::FormFields;
pub use handler::SubmissionHandler;
pub use table::{StatusLevel, Table, TableLayout};
pub use transport::{Reply, Transport};
pub use view::{DownloadLink, View};

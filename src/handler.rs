use std::cell::Cell;

use chrono::{Local, NaiveDate};
use log::{debug, warn};

use crate::config::PageConfig;
use crate::error::{ReportError, Result};
use crate::form::FormFields;
use crate::table::Table;
use crate::transport::{Reply, Transport};
use crate::view::{DownloadLink, View, report_file_name};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Drives one notes form: submits it, renders the returned table into the
/// modal and offers the generated report for download.
///
/// Only one submission runs at a time. A submit arriving while another is in
/// flight is rejected with [`ReportError::Busy`] without touching the page.
pub struct SubmissionHandler<V, T> {
    view: V,
    transport: T,
    config: PageConfig,
    today: fn() -> NaiveDate,
    in_flight: Cell<bool>,
}

impl<V, T> SubmissionHandler<V, T>
where
    V: View,
    T: Transport,
{
    pub fn new(view: V, transport: T, config: PageConfig) -> Self {
        Self {
            view,
            transport,
            config,
            today: local_today,
            in_flight: Cell::new(false),
        }
    }

    /// Replaces the date source used to name the downloaded report.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self, fields: FormFields) -> Result<Table> {
        if self.in_flight.replace(true) {
            warn!("Ignoring submit while a previous submission is in flight");
            return Err(ReportError::Busy);
        }

        self.view.set_submit_enabled(false);
        self.view.set_loading(true);
        debug!(
            "Submitting {} form fields to {}",
            fields.len(),
            self.config.endpoints.submit
        );

        let result = self.request_and_render(&fields).await;
        match &result {
            Ok(table) => debug!("Rendered report with {} rows", table.row_count()),
            Err(err) => self.view.report_failure(err),
        }

        self.view.set_loading(false);
        self.view.set_submit_enabled(true);
        self.in_flight.set(false);
        result
    }

    async fn request_and_render(&self, fields: &FormFields) -> Result<Table> {
        let reply = self
            .transport
            .post_form(&self.config.endpoints.submit, fields)
            .await?;

        if !reply.ok() {
            return Err(ReportError::Status {
                status: reply.status(),
                status_text: reply.status_text(),
            });
        }

        let body = reply.text().await?;
        let table = self.config.layout.decode(&body)?;

        self.view.render_table(&table)?;
        self.view.set_modal(true);
        self.view.replace_download_link(&self.download_link())?;

        Ok(table)
    }

    /// Hides the modal. Safe to call at any time, including mid-submission.
    pub fn dismiss(&self) {
        self.view.set_modal(false);
    }

    pub fn download_link(&self) -> DownloadLink {
        DownloadLink {
            id: self.config.elements.download_link.clone(),
            href: self.config.endpoints.download.clone(),
            label: self.config.download_label.clone(),
            file_name: report_file_name(&self.config.report_prefix, (self.today)()),
        }
    }
}

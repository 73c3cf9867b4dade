use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::table::Table;

/// Anchor offered once a report has been generated.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub id: String,
    pub href: String,
    pub label: String,
    pub file_name: String,
}

pub fn report_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.pptx", prefix, date.format("%Y-%m-%d"))
}

/// The page regions a submission drives.
///
/// Visibility toggles cannot fail from the handler's point of view; an
/// implementation that can fail there logs and carries on.
pub trait View {
    fn set_loading(&self, shown: bool);

    fn set_modal(&self, shown: bool);

    fn set_submit_enabled(&self, enabled: bool);

    /// Clears the table and renders the header row followed by every data
    /// row.
    fn render_table(&self, table: &Table) -> Result<()>;

    /// Removes any element already carrying `link.id`, then appends the new
    /// link to the modal content.
    fn replace_download_link(&self, link: &DownloadLink) -> Result<()>;

    /// Diagnostic channel for failed submissions. Not shown to the user.
    fn report_failure(&self, error: &ReportError);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_dated() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            report_file_name("Status_Report", date),
            "Status_Report_2024-03-07.pptx"
        );
    }
}

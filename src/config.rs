use log::LevelFilter;
use serde::Deserialize;

use crate::error::Result;
use crate::table::TableLayout;

/// Ids of the page elements the client drives. They must already exist in
/// the page markup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub form: String,
    pub table: String,
    pub spinner: String,
    pub modal: String,
    pub modal_content: String,
    pub close: String,
    pub download_link: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "notesForm".into(),
            table: "dataTable".into(),
            spinner: "loadingSpinner".into(),
            modal: "dataModal".into(),
            modal_content: "modalContent".into(),
            close: "closeModal".into(),
            download_link: "downloadLink".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub submit: String,
    pub download: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            submit: "/".into(),
            download: "/download".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub elements: ElementIds,
    pub endpoints: Endpoints,
    pub layout: TableLayout,
    pub download_label: String,
    pub report_prefix: String,
    pub spinner_display: String,
    pub modal_display: String,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            endpoints: Endpoints::default(),
            layout: TableLayout::default(),
            download_label: "Download PowerPoint Report".into(),
            report_prefix: "Status_Report".into(),
            spinner_display: "flex".into(),
            modal_display: "block".into(),
            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Parses a TOML page config. Every key is optional and falls back to the
    /// stock page markup.
    pub fn from_toml(config_text: &str) -> Result<Self> {
        Ok(toml::from_str(config_text)?)
    }
}

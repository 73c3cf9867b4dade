use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("network response was not ok: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("malformed report table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not render report: {0}")]
    Render(String),
    #[error("a submission is already in flight")]
    Busy,
    #[error("malformed page config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("missing page element '#{0}'")]
    MissingElement(String),
}

impl ReportError {
    /// Failures of an issued submission, as opposed to setup errors or a
    /// rejected re-entry.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            ReportError::Transport(_)
                | ReportError::Status { .. }
                | ReportError::Parse(_)
                | ReportError::Render(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` is not mounted")]
    Unmounted(&'static str),
    #[error("invalid site content: {0}")]
    Content(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;

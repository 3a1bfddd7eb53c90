use reqwest::StatusCode;

/// Why a lookup produced no definitions.
///
/// Every variant collapses to the same generic panel at the surface;
/// the distinction exists for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned HTTP {0}")]
    Status(StatusCode),

    #[error("no definitions found for {0:?}")]
    NotFound(String),

    #[error("unexpected response shape")]
    UnexpectedShape,
}

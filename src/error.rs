use thiserror::Error;

/// Everything that can abort a run. Nothing is retried or caught anywhere;
/// the first failure propagates out of main with no partial table printed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("missing configuration: environment variable {0} is not set")]
    Configuration(&'static str),
}

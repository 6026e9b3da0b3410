use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwsError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    Request(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response body from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Response from {url} contained no {what}")]
    MissingData { url: String, what: &'static str },
}

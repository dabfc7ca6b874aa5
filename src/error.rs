/// All errors that can occur while scanning fixtures and delivering reports.
#[derive(thiserror::Error, Debug)]
pub enum ScoutError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to decode the response body as JSON.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// The response envelope carried no fixture data.
    #[error("no fixture data in response from {url}")]
    MissingData { url: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// An environment variable is set to an unusable value.
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidEnv { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ScoutError>;

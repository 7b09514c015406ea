use placeleads_core::CoreError;
use thiserror::Error;

/// Errors returned by the places provider client and the record normalizer.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure. The request URL is stripped before wrapping
    /// because legacy endpoints carry the credential in the query string.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered with an error status in its response envelope.
    #[error("places API error {status}: {message}")]
    Api { status: String, message: String },

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("missing places API credential")]
    MissingCredential,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("cannot normalize place {place_id}: {reason}")]
    Normalization { place_id: String, reason: String },
}

/// Fatal outcomes of a search run.
///
/// Only configuration errors and provider failures on the first call are
/// fatal; everything else is absorbed into the report's warnings.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    Config(#[from] CoreError),

    #[error(transparent)]
    Provider(#[from] PlacesError),
}

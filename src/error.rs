use thiserror::Error;

/// Failures that abort a harvest run.
///
/// The not-found page is deliberately absent here: it is the designed
/// termination signal and travels as `FetchOutcome::NotFound` instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Connectivity-level failure talking to the catalogue
    #[error("request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status the design has no policy for
    #[error("unexpected status {status} fetching page {page}")]
    UnexpectedStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    /// An item card is missing a field the extractor requires
    #[error("item card is missing its {field}")]
    MissingField { field: &'static str },

    /// The price cell did not parse once the currency prefix was removed
    #[error("unparseable price text {raw:?}")]
    BadPrice { raw: String },

    /// A relative item href did not join into a well-formed URL
    #[error("could not resolve item link {href:?}: {source}")]
    BadLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured URL did not parse
    #[error("invalid catalogue URL {url:?}: {source}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrugaiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("You must be signed in to do that")]
    Unauthenticated,

    #[error("Monthly quota exceeded")]
    QuotaExceeded,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("A request is already in flight")]
    Busy,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DrugaiError>;

use crate::queries::cards::Identifier;

#[derive(Debug, thiserror::Error)]
pub enum ScryfallError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with HTTP status {status}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a {expected:?} object, got {found:?}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("unregistered object kind {0:?}")]
    UnknownKind(String),

    #[error("collection lookup could not resolve: {}", join_identifiers(.0))]
    UnresolvedIdentifiers(Vec<Identifier>),

    #[error("unknown mana symbol {0:?}")]
    UnknownSymbol(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

fn join_identifiers(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ScryfallError>;

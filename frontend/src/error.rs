use thiserror::Error;

/// Failures while reading the declarative parts of the site: ease names,
/// timeline offsets, colours, the consent cookie and `site.json`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown ease `{0}`")]
    UnknownEase(String),
    #[error("invalid parameters for ease `{0}`")]
    InvalidEaseParams(String),
    #[error("invalid timeline offset `{0}`")]
    InvalidOffset(String),
    #[error("invalid colour `{0}`")]
    InvalidColor(String),
    #[error("unknown consent value `{0}`")]
    UnknownConsent(String),
    #[error("failed to parse site config: {0}")]
    Config(#[from] serde_json::Error),
}

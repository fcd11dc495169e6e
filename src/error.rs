use thiserror::Error;

/// Top level failure classes surfaced to the user. Every variant is terminal
/// for the current run; `main` prints the message and exits with the mapped
/// status code.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no supported player found (tried mpv, vlc)")]
    DependencyMissing,
    #[error("no usable API key: {0}")]
    Config(String),
    #[error("request failed after retries: {0}")]
    Network(anyhow::Error),
    #[error("No results found")]
    NoResults,
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidSelection(_) => 2,
            _ => 1,
        }
    }
}

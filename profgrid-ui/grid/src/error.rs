use thiserror::Error;

/// Errors reported by a [`crate::WindowHost`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("window name must not be empty")]
    EmptyWindowName,

    #[error("window limit of {limit} reached")]
    WindowLimit { limit: usize },

    #[error("window host rejected request: {0}")]
    Rejected(String),
}

/// Errors originating from the grid view.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to create grid window `{name}`: {source}")]
    CreateWindow {
        name: String,
        #[source]
        source: HostError,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

//! Error types for toolbox-search

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] toolbox_registry::Error),

    #[error("Invalid search options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}

//! Error types for the host server.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::ConfigLoad(Box::new(err))
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

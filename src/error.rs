use crate::{model::ModelError, parsers::ParseError, translink::error::ProviderError};

#[derive(thiserror::Error, Debug)]
pub enum NextBusError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<NextBusError> for std::io::Error {
    fn from(e: NextBusError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, e)
    }
}

pub type NextBusResult<T> = Result<T, NextBusError>;

use super::{RouteNumber, StopNumber};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Route not found: {0}")]
    RouteNotFound(RouteNumber),

    #[error("Stop not found: {0}")]
    StopNotFound(StopNumber),
}

pub type ModelResult<T> = Result<T, ModelError>;

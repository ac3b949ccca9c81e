use crate::model::RouteNumber;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Route data missing: {0}")]
    RouteDataMissing(String),

    #[error("Arrivals data missing: {0}")]
    ArrivalsDataMissing(String),

    #[error("Stop data missing: {0}")]
    StopDataMissing(String),

    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteNumber),
}

pub type ParseResult<T> = Result<T, ParseError>;

//! Translators from each feed format into the model.
//!
//! A record is only applied once all of its required fields have decoded.
//! The route listing, stops and route map parsers keep going past a bad record
//! and report the first failure at the end; the arrivals parser stops at the
//! first one.

pub mod arrivals;
mod error;
pub mod route_map;
pub mod routes;
pub mod stops;

pub use error::{ParseError, ParseResult};

/// Holds on to the first failed record while parsing continues
#[derive(Debug, Default)]
struct FirstError(Option<ParseError>);

impl FirstError {
    fn record(&mut self, feed: &str, index: usize, error: ParseError) {
        log::warn!("Skipping {} record {}: {}", feed, index, error);
        self.0.get_or_insert(error);
    }

    fn into_result(self) -> ParseResult<()> {
        match self.0 {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

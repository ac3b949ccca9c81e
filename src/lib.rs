//! In-memory model of bus routes, stops, route patterns and live arrivals,
//! populated from TransLink style feeds.
//!
//! Feeds are parsed synchronously against registries owned by the caller:
//!
//! ```
//! use next_bus::{model::RouteRegistry, parsers::routes::parse_routes};
//!
//! let mut routes = RouteRegistry::new();
//! parse_routes(
//!     &mut routes,
//!     r#"[{"Name":"METROTOWN/UBC","RouteNo":"049","Patterns":[
//!         {"Destination":"UBC","Direction":"WEST","PatternNo":"W1"}]}]"#,
//! )
//! .unwrap();
//!
//! let route = routes.lookup(&"049".into()).unwrap();
//! assert_eq!(route.patterns().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod parsers;
pub mod translink;

#[cfg(test)]
mod test_utils;

pub use error::{NextBusError, NextBusResult};

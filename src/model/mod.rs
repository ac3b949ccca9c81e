mod arrival;
mod error;
mod link;
mod pattern;
mod registry;
mod route;
mod stop;

pub use arrival::Arrival;
pub use error::{ModelError, ModelResult};
pub use pattern::RoutePattern;
pub use registry::{RouteRegistry, StopRegistry};
pub use route::{Route, RouteNumber};
pub use stop::{Stop, StopNumber};

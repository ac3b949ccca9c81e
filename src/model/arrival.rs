use super::RouteNumber;

/// A predicted arrival of a bus at a stop.
///
/// Arrivals are listed by ascending countdown. The route is held by number and
/// resolved through the [`RouteRegistry`](super::RouteRegistry) when needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    countdown_minutes: i32,
    destination: String,
    route: RouteNumber,
    status: String,
}

impl Arrival {
    pub fn new(countdown_minutes: i32, destination: impl Into<String>, route: RouteNumber) -> Self {
        Arrival {
            countdown_minutes,
            destination: destination.into(),
            route,
            status: String::new(),
        }
    }

    pub fn countdown_minutes(&self) -> i32 {
        self.countdown_minutes
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn route(&self) -> &RouteNumber {
        &self.route
    }

    /// Schedule status as reported by the feed, e.g. "*" or "-"
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Builder style variant of [`Arrival::set_status`]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.set_status(status);
        self
    }
}

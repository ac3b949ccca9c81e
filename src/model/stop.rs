use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::link::{link, unlink};
use super::{Arrival, Route, RouteNumber};
use crate::geo::Coordinate;

pub type StopNumber = u32;

/// A bus stop with the routes serving it and its current arrival predictions.
///
/// Two stops are the same stop if their numbers are equal.
#[derive(Debug, Clone)]
pub struct Stop {
    number: StopNumber,
    name: String,
    location: Coordinate,
    pub(super) routes: HashSet<RouteNumber>,
    arrivals: Vec<Arrival>,
}

impl Stop {
    pub fn new(number: StopNumber, name: impl Into<String>, location: Coordinate) -> Self {
        Stop {
            number,
            name: name.into(),
            location,
            routes: HashSet::new(),
            arrivals: vec![],
        }
    }

    pub fn number(&self) -> StopNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn set_location(&mut self, location: Coordinate) {
        self.location = location;
    }

    pub fn routes(&self) -> &HashSet<RouteNumber> {
        &self.routes
    }

    pub fn on_route(&self, route: &Route) -> bool {
        self.routes.contains(route.number())
    }

    pub fn add_route(&mut self, route: &mut Route) {
        link(route, self);
    }

    pub fn remove_route(&mut self, route: &mut Route) {
        unlink(route, self);
    }

    /// Arrivals by ascending countdown
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    /// Inserts after any arrival with the same or a smaller countdown
    pub fn add_arrival(&mut self, arrival: Arrival) {
        let index = self
            .arrivals
            .partition_point(|a| a.countdown_minutes() <= arrival.countdown_minutes());
        self.arrivals.insert(index, arrival);
    }

    pub fn clear_arrivals(&mut self) {
        self.arrivals.clear();
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl<'a> IntoIterator for &'a Stop {
    type Item = &'a Arrival;
    type IntoIter = std::slice::Iter<'a, Arrival>;

    fn into_iter(self) -> Self::IntoIter {
        self.arrivals.iter()
    }
}

use std::collections::HashMap;

use itertools::Itertools;

use super::error::{ModelError, ModelResult};
use super::{Route, RouteNumber, Stop, StopNumber};
use crate::geo::Coordinate;

/// Get-or-create store of routes keyed by route number.
///
/// Parsers resolve every route through a registry so that a route number maps
/// to a single [`Route`].
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: HashMap<RouteNumber, Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the route with `number`, creating it if unseen.
    ///
    /// A non-empty `name` overwrites the stored name.
    pub fn get_or_create(&mut self, number: &RouteNumber, name: Option<&str>) -> &mut Route {
        let route = self.routes.entry(number.clone()).or_insert_with(|| {
            log::debug!("Creating route {}", number);
            Route::new(number.clone())
        });
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            route.set_name(name);
        }
        route
    }

    pub fn lookup(&self, number: &RouteNumber) -> ModelResult<&Route> {
        self.routes
            .get(number)
            .ok_or_else(|| ModelError::RouteNotFound(number.clone()))
    }

    pub fn lookup_mut(&mut self, number: &RouteNumber) -> ModelResult<&mut Route> {
        self.routes
            .get_mut(number)
            .ok_or_else(|| ModelError::RouteNotFound(number.clone()))
    }

    /// Routes ordered by number
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .values()
            .sorted_by(|a, b| a.number().cmp(b.number()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Get-or-create store of stops keyed by stop number
#[derive(Debug, Default)]
pub struct StopRegistry {
    stops: HashMap<StopNumber, Stop>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stop with `number`, creating it if unseen.
    ///
    /// An existing stop takes the given name and location.
    pub fn get_or_create(
        &mut self,
        number: StopNumber,
        name: &str,
        location: Coordinate,
    ) -> &mut Stop {
        let stop = self
            .stops
            .entry(number)
            .or_insert_with(|| Stop::new(number, name, location));
        stop.set_name(name);
        stop.set_location(location);
        stop
    }

    pub fn lookup(&self, number: StopNumber) -> ModelResult<&Stop> {
        self.stops
            .get(&number)
            .ok_or(ModelError::StopNotFound(number))
    }

    pub fn lookup_mut(&mut self, number: StopNumber) -> ModelResult<&mut Stop> {
        self.stops
            .get_mut(&number)
            .ok_or(ModelError::StopNotFound(number))
    }

    /// The closest stop no further than `radius_m` metres from `point`
    pub fn nearest_to(&self, point: &Coordinate, radius_m: f64) -> Option<&Stop> {
        self.stops
            .values()
            .map(|s| (s, s.location().distance_to(point)))
            .filter(|(_, distance)| *distance <= radius_m)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(s, _)| s)
    }

    /// Stops ordered by number
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values().sorted_by_key(|s| s.number())
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

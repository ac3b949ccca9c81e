use std::fmt;
use std::hash::{Hash, Hasher};

use super::link::{link, unlink};
use super::{RoutePattern, Stop, StopNumber};

/// Route number as published by the feed, e.g. "099".
///
/// Compared by exact string, with no normalisation of leading zeroes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteNumber(String);

impl RouteNumber {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RouteNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RouteNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A bus route with its stops, in the order they were added, and its patterns.
///
/// Two routes are the same route if their numbers are equal.
#[derive(Debug, Clone)]
pub struct Route {
    number: RouteNumber,
    name: String,
    pub(super) stops: Vec<StopNumber>,
    patterns: Vec<RoutePattern>,
}

impl Route {
    pub fn new(number: RouteNumber) -> Self {
        Route {
            number,
            name: String::new(),
            stops: vec![],
            patterns: vec![],
        }
    }

    pub fn number(&self) -> &RouteNumber {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Numbers of the stops on this route, in insertion order
    pub fn stops(&self) -> &[StopNumber] {
        &self.stops
    }

    pub fn has_stop(&self, stop: &Stop) -> bool {
        self.stops.contains(&stop.number())
    }

    /// Adds the stop and records this route on the stop. No-op if already present.
    pub fn add_stop(&mut self, stop: &mut Stop) {
        link(self, stop);
    }

    pub fn remove_stop(&mut self, stop: &mut Stop) {
        unlink(self, stop);
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    pub fn pattern(&self, name: &str) -> Option<&RoutePattern> {
        self.patterns.iter().find(|p| p.name() == name)
    }

    /// Returns the pattern with the given name, creating it if needed.
    ///
    /// An existing pattern has its destination and direction refreshed.
    pub fn get_or_create_pattern(
        &mut self,
        name: &str,
        destination: &str,
        direction: &str,
    ) -> &mut RoutePattern {
        let index = self.pattern_index_or_insert(name);
        let pattern = &mut self.patterns[index];
        pattern.set_destination(destination);
        pattern.set_direction(direction);
        pattern
    }

    /// Returns the pattern with the given name, creating it with an empty
    /// destination and direction if needed. An existing pattern is left as is.
    pub fn get_or_create_pattern_by_name(&mut self, name: &str) -> &mut RoutePattern {
        let index = self.pattern_index_or_insert(name);
        &mut self.patterns[index]
    }

    /// Appends a fully formed pattern unless one with the same name exists.
    /// Returns whether it was added.
    pub fn add_pattern(&mut self, pattern: RoutePattern) -> bool {
        if self.pattern(pattern.name()).is_some() {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    fn pattern_index_or_insert(&mut self, name: &str) -> usize {
        match self.patterns.iter().position(|p| p.name() == name) {
            Some(index) => index,
            None => {
                self.patterns
                    .push(RoutePattern::new(name, "", "", self.number.clone()));
                self.patterns.len() - 1
            }
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route {}", self.number)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a StopNumber;
    type IntoIter = std::slice::Iter<'a, StopNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

use geo::LineString;

use super::RouteNumber;
use crate::geo::Coordinate;

/// A named variant of a route: one direction and destination, with optional geometry.
///
/// A pattern is owned by its route and identified by name within it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePattern {
    name: String,
    destination: String,
    direction: String,
    path: Vec<Coordinate>,
    route: RouteNumber,
}

impl RoutePattern {
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        direction: impl Into<String>,
        route: RouteNumber,
    ) -> Self {
        RoutePattern {
            name: name.into(),
            destination: destination.into(),
            direction: direction.into(),
            path: vec![],
            route,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn set_direction(&mut self, direction: impl Into<String>) {
        self.direction = direction.into();
    }

    /// Number of the route owning this pattern
    pub fn route(&self) -> &RouteNumber {
        &self.route
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Replaces the whole path
    pub fn set_path(&mut self, path: Vec<Coordinate>) {
        self.path = path;
    }

    pub fn line_string(&self) -> LineString {
        self.path.iter().copied().map(geo::Coord::from).collect()
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_set_path_replaces() {
        let mut pattern = RoutePattern::new("E1", "LONSDALE QUAY", "EAST", "099".into());
        assert!(pattern.path().is_empty());

        pattern.set_path(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
        pattern.set_path(vec![Coordinate::new(5.0, 6.0)]);
        assert_eq!(pattern.path(), &[Coordinate::new(5.0, 6.0)]);
    }

    #[test]
    fn test_line_string() {
        let mut pattern = RoutePattern::new("W1", "UBC", "WEST", "099".into());
        pattern.set_path(vec![Coordinate::new(49.26, -123.24), Coordinate::new(49.27, -123.10)]);

        let line = pattern.line_string();
        let coords: Vec<_> = line.coords().collect();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].x, -123.24);
        assert_eq!(coords[0].y, 49.26);
    }
}

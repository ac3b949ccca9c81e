use geo::{HaversineDistance, Point};

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Great circle distance in metres
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        Point::from(*self).haversine_distance(&Point::from(*other))
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lon, c.lat)
    }
}

impl From<Point> for Coordinate {
    fn from(p: Point) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

impl From<Coordinate> for geo::Coord {
    fn from(c: Coordinate) -> Self {
        geo::coord! { x: c.lon, y: c.lat }
    }
}

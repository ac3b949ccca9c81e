//! The route/stop association is kept as two indices, the stop numbers on each
//! route and the route numbers at each stop. Both are only written here so
//! that one side is never updated without the other.

use super::{Route, Stop};

pub(super) fn link(route: &mut Route, stop: &mut Stop) {
    if !route.stops.contains(&stop.number()) {
        route.stops.push(stop.number());
    }
    stop.routes.insert(route.number().clone());
}

pub(super) fn unlink(route: &mut Route, stop: &mut Stop) {
    route.stops.retain(|number| *number != stop.number());
    stop.routes.remove(route.number());
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::geo::Coordinate;

    fn symmetric(route: &Route, stop: &Stop) -> bool {
        route.has_stop(stop) == stop.on_route(route)
    }

    #[test]
    fn test_symmetry_under_mixed_calls() {
        let mut r1 = Route::new("014".into());
        let mut r2 = Route::new("016".into());
        let mut s1 = Stop::new(51479, "HASTINGS ST @ MAIN ST", Coordinate::new(49.281, -123.099));
        let mut s2 = Stop::new(51480, "HASTINGS ST @ GORE AVE", Coordinate::new(49.281, -123.098));

        r1.add_stop(&mut s1);
        s2.add_route(&mut r1);
        s1.add_route(&mut r2);
        r2.add_stop(&mut s1);
        s1.remove_route(&mut r1);
        r2.remove_stop(&mut s2);
        s2.add_route(&mut r2);
        r1.remove_stop(&mut s2);

        for route in [&r1, &r2] {
            for stop in [&s1, &s2] {
                assert!(symmetric(route, stop), "{} / {}", route, stop.number());
            }
        }
        assert!(r1.stops().is_empty());
        assert_eq!(r2.stops(), &[51479, 51480]);
        assert_eq!(s1.routes().len(), 1);
    }
}

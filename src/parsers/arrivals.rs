use serde_json::Value;

use super::{ParseError, ParseResult};
use crate::model::{Arrival, RouteNumber, RouteRegistry, Stop};
use crate::translink::entities::StopArrivalsRecord;

fn missing(detail: impl ToString) -> ParseError {
    ParseError::ArrivalsDataMissing(detail.to_string())
}

/// Parses the arrivals feed for `stop`, linking each route to the stop and
/// adding its arrivals.
///
/// Arrivals are only appended, so callers refreshing a stop should
/// [`clear_arrivals`](Stop::clear_arrivals) first. Fails on the first bad
/// record, and also when the stop is left without any arrivals.
pub fn parse_arrivals(routes: &mut RouteRegistry, stop: &mut Stop, json: &str) -> ParseResult<()> {
    let records: Vec<Value> = serde_json::from_str(json).map_err(missing)?;

    for record in records {
        let record: StopArrivalsRecord = serde_json::from_value(record).map_err(missing)?;
        if record.route_name.is_empty() || record.route_no.is_empty() {
            return Err(missing("empty RouteName or RouteNo"));
        }

        let number = RouteNumber::from(record.route_no);
        let route = routes.get_or_create(&number, Some(record.route_name.as_str()));
        stop.add_route(route);
        log::debug!(
            "{} arrivals for route {} at stop {}",
            record.schedules.len(),
            route.number(),
            stop.number()
        );

        for schedule in record.schedules {
            let arrival = Arrival::new(
                schedule.expected_countdown,
                schedule.destination,
                route.number().clone(),
            )
            .with_status(schedule.schedule_status);
            stop.add_arrival(arrival);
        }
    }

    if stop.arrivals().is_empty() {
        return Err(missing(format!("no arrivals for stop {}", stop.number())));
    }
    Ok(())
}

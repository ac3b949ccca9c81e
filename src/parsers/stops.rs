use serde_json::Value;

use super::{FirstError, ParseError, ParseResult};
use crate::geo::Coordinate;
use crate::model::{RouteNumber, RouteRegistry, StopRegistry};
use crate::translink::entities::StopRecord;

fn missing(detail: impl ToString) -> ParseError {
    ParseError::StopDataMissing(detail.to_string())
}

/// Parses a stop listing, adding each stop to `stops` and linking it with
/// every route named in its `Routes` field.
pub fn parse_stops(
    routes: &mut RouteRegistry,
    stops: &mut StopRegistry,
    json: &str,
) -> ParseResult<()> {
    let records: Vec<Value> = serde_json::from_str(json).map_err(missing)?;
    let count = records.len();

    let mut errors = FirstError::default();
    for (index, record) in records.into_iter().enumerate() {
        let record = match serde_json::from_value::<StopRecord>(record) {
            Ok(record) => record,
            Err(e) => {
                errors.record("stop", index, missing(e));
                continue;
            }
        };

        let location = Coordinate::new(record.latitude, record.longitude);
        let stop = stops.get_or_create(record.stop_no, &record.name, location);
        for number in record.routes.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            routes
                .get_or_create(&RouteNumber::from(number), None)
                .add_stop(stop);
        }
    }

    log::info!("Parsed {} stop records", count);
    errors.into_result()
}

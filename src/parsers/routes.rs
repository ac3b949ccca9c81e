use serde_json::Value;

use super::{FirstError, ParseError, ParseResult};
use crate::model::{RouteNumber, RouteRegistry};
use crate::translink::entities::{PatternRecord, RouteRecord};

fn missing(detail: impl ToString) -> ParseError {
    ParseError::RouteDataMissing(detail.to_string())
}

/// Parses a route listing, adding every route and pattern found to `routes`.
///
/// Patterns already known for a route are refreshed with the new destination
/// and direction. Routes and patterns decoded before a failure stay applied.
pub fn parse_routes(routes: &mut RouteRegistry, json: &str) -> ParseResult<()> {
    let records: Vec<Value> = serde_json::from_str(json).map_err(missing)?;
    let count = records.len();

    let mut errors = FirstError::default();
    for (index, record) in records.into_iter().enumerate() {
        if let Err(e) = parse_route(routes, record) {
            errors.record("route", index, e);
        }
    }

    log::info!("Parsed {} route records", count);
    errors.into_result()
}

fn parse_route(routes: &mut RouteRegistry, record: Value) -> ParseResult<()> {
    let record: RouteRecord = serde_json::from_value(record).map_err(missing)?;
    if record.route_no.is_empty() {
        return Err(missing("empty RouteNo"));
    }

    let number = RouteNumber::from(record.route_no);
    let route = routes.get_or_create(&number, Some(record.name.as_str()));
    log::debug!("Route {} with {} patterns", number, record.patterns.len());

    let mut errors = FirstError::default();
    for (index, pattern) in record.patterns.into_iter().enumerate() {
        let pattern = serde_json::from_value::<PatternRecord>(pattern)
            .map_err(missing)
            .and_then(|p| {
                if p.pattern_no.is_empty() {
                    Err(missing("empty PatternNo"))
                } else {
                    Ok(p)
                }
            });
        match pattern {
            Ok(p) => {
                route.get_or_create_pattern(&p.pattern_no, &p.destination, &p.direction);
            }
            Err(e) => errors.record("pattern", index, e),
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::test_utils::{init, ROUTES_JSON};

    #[test]
    fn test_parse_routes() {
        init();
        let mut routes = RouteRegistry::new();
        parse_routes(&mut routes, ROUTES_JSON).unwrap();

        assert_eq!(routes.len(), 2);
        let route = routes.lookup(&"099".into()).unwrap();
        assert_eq!(route.name(), "COMMERCIAL-BROADWAY/UBC (B-LINE)");
        let names: Vec<_> = route.patterns().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["EB1", "WB1"]);
        assert_eq!(route.pattern("WB1").unwrap().destination(), "UBC");
        assert_eq!(route.pattern("WB1").unwrap().route(), route.number());
    }

    #[test]
    fn test_reparse_merges_patterns() {
        let mut routes = RouteRegistry::new();
        parse_routes(&mut routes, ROUTES_JSON).unwrap();
        parse_routes(
            &mut routes,
            r#"[{"Name":"99 B-Line","RouteNo":"099","Patterns":[
                {"Destination":"BOUNDARY","Direction":"EAST","PatternNo":"EB1"}]}]"#,
        )
        .unwrap();

        let route = routes.lookup(&"099".into()).unwrap();
        assert_eq!(route.name(), "99 B-Line");
        assert_eq!(route.patterns().len(), 2);
        let pattern = route.pattern("EB1").unwrap();
        assert_eq!(pattern.destination(), "BOUNDARY");
        assert_eq!(pattern.direction(), "EAST");
    }

    #[test]
    fn test_not_an_array() {
        let mut routes = RouteRegistry::new();
        let result = parse_routes(&mut routes, r#"{"Name":"x"}"#);

        assert!(matches!(result, Err(ParseError::RouteDataMissing(_))));
        assert!(routes.is_empty());
    }

    #[test]
    fn test_bad_record_does_not_stop_parse() {
        let mut routes = RouteRegistry::new();
        let result = parse_routes(
            &mut routes,
            r#"[
                {"Name":"NO NUMBER","Patterns":[]},
                {"Name":"KNIGHT/MARPOLE","RouteNo":"010","Patterns":[]}
            ]"#,
        );

        assert!(matches!(result, Err(ParseError::RouteDataMissing(_))));
        assert_eq!(routes.len(), 1);
        assert!(routes.lookup(&"010".into()).is_ok());
    }

    #[test]
    fn test_bad_pattern_keeps_route() {
        let mut routes = RouteRegistry::new();
        let result = parse_routes(
            &mut routes,
            r#"[{"Name":"KNIGHT/MARPOLE","RouteNo":"010","Patterns":[
                {"Destination":"DOWNTOWN","PatternNo":"NB1"},
                {"Destination":"MARPOLE","Direction":"SOUTH","PatternNo":"SB1"}
            ]}]"#,
        );

        assert!(matches!(result, Err(ParseError::RouteDataMissing(_))));
        let route = routes.lookup(&"010".into()).unwrap();
        assert_eq!(route.patterns().len(), 1);
        assert_eq!(route.patterns()[0].name(), "SB1");
    }
}

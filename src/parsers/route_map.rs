use regex::Regex;

use super::{FirstError, ParseError, ParseResult};
use crate::geo::Coordinate;
use crate::model::{RouteNumber, RouteRegistry};

/// Route number after the first `N`, pattern name, then the `;` separated coordinates
const LINE_PATTERN: &str = r"^[^N]*N([^-;]*)-([^;]*)(?:;(.*))?";

/// One decoded route map line
#[derive(Debug, Clone, PartialEq)]
struct PatternPath {
    route: RouteNumber,
    pattern: String,
    path: Vec<Coordinate>,
}

/// Parser for the compact route map text, one pattern per line:
/// `<prefix>N<route>-<pattern>;<lat>;<lon>;<lat>;<lon>...`
///
/// Lines with no `N` marker, route number, pattern name or coordinates are
/// skipped. A marker with no `-` before the first `;` is malformed.
/// A line with malformed coordinates fails on its own; the remaining lines are
/// still applied and the first failure is returned.
pub struct RouteMapParser {
    re_line: Regex,
    create_missing: bool,
}

impl Default for RouteMapParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteMapParser {
    /// Creates routes not seen before
    pub fn new() -> Self {
        Self {
            re_line: Regex::new(LINE_PATTERN).expect("route map line pattern is valid"),
            create_missing: true,
        }
    }

    /// Reports lines naming an unknown route as [`ParseError::RouteNotFound`]
    pub fn require_known_routes(mut self) -> Self {
        self.create_missing = false;
        self
    }

    pub fn parse(&self, routes: &mut RouteRegistry, text: &str) -> ParseResult<()> {
        let mut errors = FirstError::default();
        let mut stored = 0;

        for (index, line) in text.split('\n').enumerate() {
            let result = self
                .parse_line(line)
                .and_then(|decoded| match decoded {
                    Some(decoded) => self.store(routes, decoded).map(|_| true),
                    None => Ok(false),
                });
            match result {
                Ok(true) => stored += 1,
                Ok(false) => log::trace!("Skipping route map line {}", index),
                Err(e) => errors.record("route map", index, e),
            }
        }

        log::info!("Stored {} pattern paths", stored);
        errors.into_result()
    }

    fn parse_line(&self, line: &str) -> ParseResult<Option<PatternPath>> {
        let line = line.trim();
        let Some(captures) = self.re_line.captures(line) else {
            if line.contains('N') {
                return Err(ParseError::MalformedGeometry(format!(
                    "no route and pattern in {:?}",
                    line
                )));
            }
            return Ok(None);
        };
        let route = captures.get(1).map_or("", |m| m.as_str());
        let pattern = captures.get(2).map_or("", |m| m.as_str());
        let remainder = captures
            .get(3)
            .map_or("", |m| m.as_str())
            .trim_end_matches(';');

        if route.is_empty() || pattern.is_empty() || remainder.is_empty() {
            return Ok(None);
        }

        let values = remainder
            .split(';')
            .map(|v| {
                v.trim().parse::<f64>().map_err(|e| {
                    ParseError::MalformedGeometry(format!("{} {}-{}: {:?}", e, route, pattern, v))
                })
            })
            .collect::<ParseResult<Vec<_>>>()?;

        if values.len() % 2 != 0 {
            return Err(ParseError::MalformedGeometry(format!(
                "odd number of coordinate values ({}) for {}-{}",
                values.len(),
                route,
                pattern
            )));
        }

        let path = values
            .chunks_exact(2)
            .map(|pair| Coordinate::new(pair[0], pair[1]))
            .collect();

        Ok(Some(PatternPath {
            route: route.into(),
            pattern: pattern.to_string(),
            path,
        }))
    }

    fn store(&self, routes: &mut RouteRegistry, decoded: PatternPath) -> ParseResult<()> {
        let route = if self.create_missing {
            routes.get_or_create(&decoded.route, None)
        } else {
            routes
                .lookup_mut(&decoded.route)
                .map_err(|_| ParseError::RouteNotFound(decoded.route.clone()))?
        };

        log::debug!(
            "Path of {} points for {}-{}",
            decoded.path.len(),
            decoded.route,
            decoded.pattern
        );
        route
            .get_or_create_pattern_by_name(&decoded.pattern)
            .set_path(decoded.path);
        Ok(())
    }
}

/// Parses route map text with a default [`RouteMapParser`]
pub fn parse_route_map(routes: &mut RouteRegistry, text: &str) -> ParseResult<()> {
    RouteMapParser::new().parse(routes, text)
}

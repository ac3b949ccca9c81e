use std::env;
use std::path::Path;

use next_bus::{
    config::FeedConfig,
    geo::Coordinate,
    model::{RouteRegistry, StopRegistry},
    parsers::{
        arrivals::parse_arrivals, route_map::RouteMapParser, routes::parse_routes,
        stops::parse_stops,
    },
    translink::provider::{DataProvider, FileDataProvider},
    NextBusError, NextBusResult,
};

fn fetch(path: &Path) -> NextBusResult<String> {
    Ok(FileDataProvider::new(path).fetch_text()?)
}

fn main() -> std::io::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::try_init().ok();

    let config = FeedConfig::from_env()?;
    log::debug!("Config: {:?}", config);

    let mut routes = RouteRegistry::new();
    let mut stops = StopRegistry::new();

    log::info!("Loading routes from {}", config.routes_feed.display());
    let text = fetch(&config.routes_feed)?;
    if let Err(e) = parse_routes(&mut routes, &text) {
        log::error!("Route listing partially loaded: {}", e);
    }

    if let Some(path) = &config.stops_feed {
        log::info!("Loading stops from {}", path.display());
        let text = fetch(path)?;
        if let Err(e) = parse_stops(&mut routes, &mut stops, &text) {
            log::error!("Stop listing partially loaded: {}", e);
        }
    }

    if let Some(path) = &config.route_map_feed {
        log::info!("Loading route map from {}", path.display());
        let text = fetch(path)?;
        if let Err(e) = RouteMapParser::new().parse(&mut routes, &text) {
            log::error!("Route map partially loaded: {}", e);
        }
    }

    if let Some(arrivals) = &config.arrivals {
        log::info!("Loading arrivals for stop {}", arrivals.stop);
        let text = fetch(&arrivals.path)?;
        if stops.lookup(arrivals.stop).is_err() {
            stops.get_or_create(arrivals.stop, "", Coordinate::new(0.0, 0.0));
        }
        let stop = stops.lookup_mut(arrivals.stop).map_err(NextBusError::from)?;
        stop.clear_arrivals();
        match parse_arrivals(&mut routes, stop, &text) {
            Ok(()) => {
                for arrival in stop.arrivals() {
                    log::info!(
                        "{:>4} min  {:<6} {} {}",
                        arrival.countdown_minutes(),
                        arrival.route(),
                        arrival.destination(),
                        arrival.status()
                    );
                }
            }
            Err(e) => log::error!("No arrivals for stop {}: {}", arrivals.stop, e),
        }
    }

    let patterns: usize = routes.iter().map(|r| r.patterns().len()).sum();
    let mapped: usize = routes
        .iter()
        .flat_map(|r| r.patterns())
        .filter(|p| !p.path().is_empty())
        .count();
    log::info!(
        "Loaded {} routes, {} patterns ({} with paths), {} stops",
        routes.len(),
        patterns,
        mapped,
        stops.len()
    );

    Ok(())
}

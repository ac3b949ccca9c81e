use std::env;
use std::path::PathBuf;

use crate::error::{NextBusError, NextBusResult};
use crate::model::StopNumber;

/// Locations of the feeds to load, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub routes_feed: PathBuf,
    pub route_map_feed: Option<PathBuf>,
    pub stops_feed: Option<PathBuf>,
    pub arrivals: Option<ArrivalsFeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalsFeed {
    pub path: PathBuf,
    pub stop: StopNumber,
}

impl FeedConfig {
    /// Reads `.env` if present, then the process environment
    pub fn from_env() -> NextBusResult<FeedConfig> {
        dotenvy::from_filename(".env").ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> NextBusResult<FeedConfig> {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let routes_feed = path("ROUTES_FEED")
            .ok_or_else(|| NextBusError::Config("ROUTES_FEED is not set".to_string()))?;

        let stop = lookup("ARRIVALS_STOP").filter(|v| !v.trim().is_empty());
        let arrivals = match (path("ARRIVALS_FEED"), stop) {
            (Some(path), Some(stop)) => {
                let stop = stop.trim().parse::<StopNumber>().map_err(|e| {
                    NextBusError::Config(format!("ARRIVALS_STOP {:?}: {}", stop, e))
                })?;
                Some(ArrivalsFeed { path, stop })
            }
            (Some(_), None) => {
                return Err(NextBusError::Config(
                    "ARRIVALS_FEED requires ARRIVALS_STOP".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(NextBusError::Config(
                    "ARRIVALS_STOP requires ARRIVALS_FEED".to_string(),
                ))
            }
            (None, None) => None,
        };

        Ok(FeedConfig {
            routes_feed,
            route_map_feed: path("ROUTE_MAP_FEED"),
            stops_feed: path("STOPS_FEED"),
            arrivals,
        })
    }
}

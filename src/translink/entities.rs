//! Records as they appear in the TransLink JSON feeds.
//!
//! Every field is required; a record missing one fails to deserialize.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct RouteRecord {
    pub name: String,
    pub route_no: String,
    /// Kept raw so that each pattern can fail on its own
    pub patterns: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PatternRecord {
    pub destination: String,
    pub direction: String,
    pub pattern_no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct StopArrivalsRecord {
    pub route_name: String,
    pub route_no: String,
    pub schedules: Vec<ScheduleRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleRecord {
    pub expected_countdown: i32,
    pub destination: String,
    pub schedule_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct StopRecord {
    pub stop_no: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Comma separated route numbers, e.g. "014, 016"
    pub routes: String,
}

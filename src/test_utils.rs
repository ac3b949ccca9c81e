pub fn init() {
    env_logger::try_init().ok();
}

pub const ROUTES_JSON: &str = r#"[
    {
        "Name": "COMMERCIAL-BROADWAY/UBC (B-LINE)",
        "OperatingCompany": "CMBC",
        "RouteNo": "099",
        "Patterns": [
            {"Destination": "COMM'L-BDWAY STN", "Direction": "EAST", "PatternNo": "EB1", "RouteMap": {"Href": ""}},
            {"Destination": "UBC", "Direction": "WEST", "PatternNo": "WB1", "RouteMap": {"Href": ""}}
        ]
    },
    {
        "Name": "BROADWAY",
        "OperatingCompany": "CMBC",
        "RouteNo": "009",
        "Patterns": [
            {"Destination": "BOUNDARY", "Direction": "EAST", "PatternNo": "EB2"}
        ]
    }
]"#;

pub const ARRIVALS_JSON: &str = r#"[
    {
        "RouteNo": "099",
        "RouteName": "COMMERCIAL-BROADWAY/UBC (B-LINE)",
        "Direction": "WEST",
        "Schedules": [
            {"Pattern": "WB1", "Destination": "UBC", "ExpectedLeaveTime": "9:01pm", "ExpectedCountdown": 9, "ScheduleStatus": " "},
            {"Pattern": "WB1", "Destination": "UBC", "ExpectedLeaveTime": "8:54pm", "ExpectedCountdown": 2, "ScheduleStatus": "*"}
        ]
    },
    {
        "RouteNo": "009",
        "RouteName": "BROADWAY",
        "Direction": "WEST",
        "Schedules": [
            {"Pattern": "WB2", "Destination": "ALMA", "ExpectedLeaveTime": "8:57pm", "ExpectedCountdown": 5, "ScheduleStatus": "-"},
            {"Pattern": "WB2", "Destination": "ALMA", "ExpectedLeaveTime": "9:06pm", "ExpectedCountdown": 14, "ScheduleStatus": " "}
        ]
    }
]"#;

pub const STOPS_JSON: &str = r#"[
    {"StopNo": 50001, "Name": "SB HOWE ST @ DUNSMUIR ST", "Latitude": 49.28292, "Longitude": -123.11734, "Routes": "004, 007"},
    {"StopNo": 50002, "Name": "SB HOWE ST @ W GEORGIA ST", "Latitude": 49.28158, "Longitude": -123.11958, "Routes": "007"}
]"#;

pub const ROUTE_MAP_TXT: &str = "N099-EB1;49.2627;-123.2453;49.2640;-123.1853;49.2625;-123.0692
N099-WB1;49.2625;-123.0692;49.2627;-123.2453

R2N009-EB2;49.2631;-123.1854;49.2596;-123.0232";

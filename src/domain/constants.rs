//! Fixed parameters of the demonstration run.
//!
//! The no-argument invocation exercises every provisioning operation with
//! these values, in a fixed order. They are deliberately not configurable.

pub const REGIONS: [&str; 7] = [
    "North America",
    "South America",
    "Europe",
    "Asia",
    "Africa",
    "Oceania",
    "Middle East",
];

pub const DEMO_RANGE_START: i64 = 2020;
pub const DEMO_RANGE_END: i64 = 2025;

pub const DEMO_LIST_NAMES: [&str; 3] = ["data-csv", "data-excel", "data-json"];

pub const DEMO_PREFIX_NAMES: [&str; 3] = ["csv", "excel", "json"];
pub const DEMO_PREFIX: &str = "output-";

pub const DEMO_PERIODIC_DELAY_SECS: f64 = 5.0;

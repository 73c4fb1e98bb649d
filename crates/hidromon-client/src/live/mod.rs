pub mod gauges;
pub mod parameters;

pub use gauges::{AlertFlags, Gauge, GaugeKind, GaugeReading};
pub use parameters::LiveParameters;

/// Store path holding the latest sensor readings.
pub const PARAMETERS_PATH: &str = "/parameters";

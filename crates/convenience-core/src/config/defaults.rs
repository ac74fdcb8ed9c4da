use crate::constants;

pub const DEFAULT_EPSILON: f64 = constants::EPSILON;
pub const DEFAULT_W_FINANCIAL: f64 = constants::DEFAULT_W_FINANCIAL;
pub const DEFAULT_RUNS: usize = constants::DEFAULT_SIMULATION_RUNS;
pub const DEFAULT_DELTA: f64 = constants::DEFAULT_SENSITIVITY_DELTA;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

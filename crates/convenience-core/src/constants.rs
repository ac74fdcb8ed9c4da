/// Floor applied to divisors (work hours, base cost) so results stay finite.
pub const EPSILON: f64 = 1e-9;

/// Default weight on the financial axis of the score.
pub const DEFAULT_W_FINANCIAL: f64 = 1.0;

/// Default half-width of the symmetric finite-difference stencil.
pub const DEFAULT_SENSITIVITY_DELTA: f64 = 1e-4;

/// Default Monte Carlo run count.
pub const DEFAULT_SIMULATION_RUNS: usize = 1000;

/// z-value of the two-sided 95% normal confidence interval.
pub const Z_95: f64 = 1.96;

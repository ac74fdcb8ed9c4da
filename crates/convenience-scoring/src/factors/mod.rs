//! The five monetary-equivalent benefit terms. Each is independent of the
//! others and of the option's costs.

pub mod comfort;
pub mod opportunity;
pub mod reliability;
pub mod stress;
pub mod time;

//! CLI command implementations.

pub mod chart;
pub mod journal;
pub mod live;
pub mod validate;

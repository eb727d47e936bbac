//! Strategy implementations for the kumo console.
//!
//! This crate provides:
//! - The opening-bias strategy (mean of the earliest closes vs the
//!   first open)
//! - [`evaluate`], the entry point that runs a strategy and journals
//!   its decision

mod evaluate;
mod opening_bias;

pub use evaluate::evaluate;
pub use opening_bias::OpeningBias;

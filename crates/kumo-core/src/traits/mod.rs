//! Core traits for the kumo console.

mod gateway;
mod indicator;
mod strategy;

pub use gateway::QuoteGateway;
pub use indicator::SeriesIndicator;
pub use strategy::Strategy;

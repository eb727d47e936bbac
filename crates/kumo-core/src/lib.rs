//! Core types and traits for the kumo trading console.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Quote, QuoteSeries)
//! - Trade decision and journal entry types
//! - Core traits for indicators, strategies, and quote gateways
//! - The shared error taxonomy

pub mod types;
pub mod traits;
pub mod error;

pub use error::{KumoError, KumoResult};
pub use types::*;
pub use traits::*;

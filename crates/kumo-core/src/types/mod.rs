//! Core data types for the kumo trading console.

mod decision;
mod quote;

pub use decision::{JournalEntry, TradeAction, TradeDecision};
pub use quote::{Quote, QuoteSeries};

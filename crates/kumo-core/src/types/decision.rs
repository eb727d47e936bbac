//! Trade decision and journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Action recommended by a strategy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    /// Average close above the first open
    BuyCall,
    /// Average close below the first open
    BuyPut,
    /// Average close exactly equal to the first open
    Hold,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeAction::BuyCall => "buy_call",
            TradeAction::BuyPut => "buy_put",
            TradeAction::Hold => "hold",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TradeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy_call" => Ok(TradeAction::BuyCall),
            "buy_put" => Ok(TradeAction::BuyPut),
            "hold" => Ok(TradeAction::Hold),
            _ => Err(format!("Invalid trade action: {}", s)),
        }
    }
}

/// Outcome of one strategy evaluation.
///
/// `price` is always the caller-supplied target price, hold included:
/// the journal records the price that was offered, never a computed fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    /// Symbol the decision applies to
    pub symbol: String,
    /// Recommended action
    pub action: TradeAction,
    /// Caller-supplied target price
    pub price: f64,
}

impl TradeDecision {
    /// Create a new decision.
    pub fn new(symbol: impl Into<String>, action: TradeAction, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            action,
            price,
        }
    }
}

/// One durable trade log record.
///
/// Field order matches the journal layout: timestamp, symbol, action, price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Time the decision was journaled (UTC)
    pub timestamp: DateTime<Utc>,
    /// Symbol the decision applies to
    pub symbol: String,
    /// Recommended action
    pub action: TradeAction,
    /// Target price carried on the decision
    pub price: f64,
}

impl JournalEntry {
    /// Stamp a decision with the current time.
    pub fn record(decision: &TradeDecision) -> Self {
        Self {
            timestamp: Utc::now(),
            symbol: decision.symbol.clone(),
            action: decision.action,
            price: decision.price,
        }
    }
}

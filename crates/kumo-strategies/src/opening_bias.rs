//! Opening-bias strategy.
//!
//! Compares the mean of the earliest closes against the very first
//! open of the series. A mean above the open leans bullish (buy a
//! call), below leans bearish (buy a put), exactly equal holds.

use kumo_core::error::StrategyError;
use kumo_core::traits::Strategy;
use kumo_core::types::{QuoteSeries, TradeAction, TradeDecision};
use serde::{Deserialize, Serialize};

/// Opening-bias strategy over the first N closes.
///
/// Only the earliest `window` closes and the first open take part in
/// the decision; anything later in the series is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningBias {
    window: usize,
}

impl OpeningBias {
    /// Create the strategy with the standard 5-close window.
    pub fn new() -> Self {
        Self::with_window(5)
    }

    /// Create the strategy with a custom window.
    pub fn with_window(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl Default for OpeningBias {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for OpeningBias {
    fn name(&self) -> &str {
        "Opening Bias"
    }

    fn min_len(&self) -> usize {
        self.window
    }

    fn decide(
        &self,
        series: &QuoteSeries,
        target_price: f64,
    ) -> Result<TradeDecision, StrategyError> {
        self.validate(series)?;

        let first = series
            .first()
            .ok_or_else(|| StrategyError::InsufficientData {
                required: self.min_len(),
                available: 0,
            })?;

        let closes = series.closes();
        let mean = closes[..self.window].iter().sum::<f64>() / self.window as f64;

        // NaN compares false on both sides and falls through to Hold
        let action = if mean > first.open {
            TradeAction::BuyCall
        } else if mean < first.open {
            TradeAction::BuyPut
        } else {
            TradeAction::Hold
        };

        Ok(TradeDecision::new(first.symbol.clone(), action, target_price))
    }

    fn description(&self) -> &str {
        "Compares the mean of the earliest closes against the first open"
    }
}

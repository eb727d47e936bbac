//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{QuoteSeries, TradeDecision};

/// Core strategy trait.
///
/// Strategies inspect a quote series and produce one decision per
/// evaluation. The caller supplies the target price; the strategy only
/// chooses the action and carries the price through unchanged.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Get the minimum records required before the strategy can decide.
    fn min_len(&self) -> usize;

    /// Evaluate the series and produce a decision.
    ///
    /// # Arguments
    /// * `series` - Quote series ordered oldest first
    /// * `target_price` - Price to carry on the decision
    fn decide(
        &self,
        series: &QuoteSeries,
        target_price: f64,
    ) -> Result<TradeDecision, StrategyError>;

    /// Validate that the series is long enough.
    fn validate(&self, series: &QuoteSeries) -> Result<(), StrategyError> {
        if series.len() < self.min_len() {
            return Err(StrategyError::InsufficientData {
                required: self.min_len(),
                available: series.len(),
            });
        }
        Ok(())
    }

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Quote, TradeAction};

    struct TestStrategy {
        min_len: usize,
    }

    impl Strategy for TestStrategy {
        fn name(&self) -> &str {
            "test"
        }

        fn min_len(&self) -> usize {
            self.min_len
        }

        fn decide(
            &self,
            series: &QuoteSeries,
            target_price: f64,
        ) -> Result<TradeDecision, StrategyError> {
            self.validate(series)?;
            Ok(TradeDecision::new(
                series.symbol().unwrap_or_default(),
                TradeAction::Hold,
                target_price,
            ))
        }
    }

    fn series_of(len: usize) -> QuoteSeries {
        (0..len)
            .map(|i| Quote::new("TEST", 100.0 + i as f64, 101.0, 99.0, 100.5))
            .collect()
    }

    #[test]
    fn test_strategy_validation() {
        let strategy = TestStrategy { min_len: 5 };

        assert!(strategy.decide(&series_of(4), 10.0).is_err());
        assert!(strategy.decide(&series_of(5), 10.0).is_ok());
    }

    #[test]
    fn test_strategy_carries_target_price() {
        let strategy = TestStrategy { min_len: 1 };
        let decision = strategy.decide(&series_of(3), 123.45).unwrap();

        assert_eq!(decision.symbol, "TEST");
        assert_eq!(decision.price, 123.45);
    }
}

//! Strategy evaluation entry point.

use kumo_core::error::KumoError;
use kumo_core::traits::Strategy;
use kumo_core::types::{QuoteSeries, TradeDecision};
use kumo_journal::TradeJournal;
use tracing::info;

/// Run a strategy over the series and journal its decision.
///
/// Exactly one journal row is appended per successful evaluation,
/// hold included. A failed evaluation appends nothing. The decision
/// carries the caller's target price unchanged.
pub fn evaluate<S: Strategy + ?Sized>(
    strategy: &S,
    series: &QuoteSeries,
    target_price: f64,
    journal: &TradeJournal,
) -> Result<TradeDecision, KumoError> {
    let decision = strategy.decide(series, target_price)?;
    journal.append(&decision)?;

    info!(
        "{}: {} {} @ {}",
        strategy.name(),
        decision.action,
        decision.symbol,
        decision.price
    );

    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpeningBias;
    use kumo_core::types::{Quote, TradeAction};
    use tempfile::tempdir;

    fn series(open: f64, closes: &[f64]) -> QuoteSeries {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let open = if i == 0 { open } else { close };
                Quote::new("SPY", open, close + 1.0, close - 1.0, close)
            })
            .collect()
    }

    #[test]
    fn test_each_evaluation_appends_one_row() {
        let dir = tempdir().unwrap();
        let journal = TradeJournal::new(dir.path().join("trade_log.csv"));
        let strategy = OpeningBias::new();
        let series = series(100.0, &[101.0, 102.0, 103.0, 104.0, 105.0]);

        evaluate(&strategy, &series, 106.0, &journal).unwrap();
        assert_eq!(journal.read_all().unwrap().len(), 1);

        evaluate(&strategy, &series, 107.0, &journal).unwrap();
        let entries = journal.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].price, 107.0);
    }

    #[test]
    fn test_failed_evaluation_appends_nothing() {
        let dir = tempdir().unwrap();
        let journal = TradeJournal::new(dir.path().join("trade_log.csv"));
        let strategy = OpeningBias::new();
        let series = series(100.0, &[101.0, 102.0]);

        let err = evaluate(&strategy, &series, 106.0, &journal).unwrap_err();
        assert!(matches!(err, KumoError::Strategy(_)));
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_hold_rows_record_target_price() {
        let dir = tempdir().unwrap();
        let journal = TradeJournal::new(dir.path().join("trade_log.csv"));
        let strategy = OpeningBias::new();
        let series = series(100.0, &[100.0, 100.0, 100.0, 100.0, 100.0]);

        // A hold row still carries the caller's target price, not a
        // market price; the log records what was asked for.
        let decision = evaluate(&strategy, &series, 250.0, &journal).unwrap();
        assert_eq!(decision.action, TradeAction::Hold);

        let entries = journal.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, TradeAction::Hold);
        assert_eq!(entries[0].price, 250.0);
    }

    #[test]
    fn test_failed_append_surfaces_as_journal_error() {
        let dir = tempdir().unwrap();
        let journal = TradeJournal::new(dir.path().join("no").join("dir.csv"));
        let strategy = OpeningBias::new();
        let series = series(100.0, &[101.0, 102.0, 103.0, 104.0, 105.0]);

        let err = evaluate(&strategy, &series, 106.0, &journal).unwrap_err();
        assert!(matches!(err, KumoError::Journal(_)));
    }
}

//! Offline quote sources for the kumo console.
//!
//! The live gateway yields a single snapshot per fetch; historical
//! depth comes from files instead. This crate loads quote series from
//! CSV so the indicator and strategy paths can run over real windows.

mod csv_source;

pub use csv_source::CsvQuoteSource;

use kumo_core::error::DataError;
use kumo_core::types::QuoteSeries;

/// Convenience helper that loads a whole series from a CSV file.
pub async fn load_csv(path: &str, symbol: &str) -> Result<QuoteSeries, DataError> {
    CsvQuoteSource::new(path)?.load_all(symbol).await
}

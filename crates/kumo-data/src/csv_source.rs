//! CSV quote source.

use csv::ReaderBuilder;
use kumo_core::error::DataError;
use kumo_core::types::{Quote, QuoteSeries};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Symbol", alias = "symbol", default)]
    symbol: Option<String>,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(
        alias = "Close",
        alias = "close",
        alias = "Adj Close",
        alias = "lastTrade"
    )]
    close: f64,
}

/// CSV quote source for historical series.
///
/// Rows are taken in file order and the file is expected oldest first;
/// nothing here re-sorts the data.
#[derive(Debug)]
pub struct CsvQuoteSource {
    path: String,
}

impl CsvQuoteSource {
    /// Create a new CSV quote source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load the full series from the CSV file.
    ///
    /// # Arguments
    /// * `symbol` - Symbol stamped on rows that carry no symbol column
    pub async fn load_all(&self, symbol: &str) -> Result<QuoteSeries, DataError> {
        self.load_from_path(&self.path, symbol)
    }

    /// Load quotes from a specific path.
    fn load_from_path(&self, path: &str, symbol: &str) -> Result<QuoteSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut series = QuoteSeries::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            series.push(Quote::new(
                record.symbol.unwrap_or_else(|| symbol.to_string()),
                record.open,
                record.high,
                record.low,
                record.close,
            ));
        }

        if series.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        debug!("Loaded {} records from {}", series.len(), path);
        Ok(series)
    }
}

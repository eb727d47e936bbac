//! Quote snapshot and quote series types.

use serde::{Deserialize, Serialize};

/// One point-in-time market snapshot for a symbol.
///
/// The upstream feed reports the closing price as `lastTrade`; it is
/// carried here as `close`. A quote is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol identifier
    pub symbol: String,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Last traded price
    #[serde(alias = "lastTrade")]
    pub close: f64,
}

impl Quote {
    /// Create a new quote.
    pub fn new(symbol: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            open,
            high,
            low,
            close,
        }
    }

    /// The quote's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Check if the quote is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the quote is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Ordered, index-aligned sequence of quotes for one symbol.
///
/// Records stay in insertion order; every index-based computation in the
/// workspace (rolling windows, shifts, the opening-bias mean) is defined
/// against this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSeries {
    quotes: Vec<Quote>,
}

impl QuoteSeries {
    /// Create a new empty series.
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Create a series from existing quotes, preserving their order.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Append a quote at the end.
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Append multiple quotes.
    pub fn extend(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(quotes);
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Get a record by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// The first record.
    pub fn first(&self) -> Option<&Quote> {
        self.quotes.first()
    }

    /// The last record.
    pub fn last(&self) -> Option<&Quote> {
        self.quotes.last()
    }

    /// Symbol of the series, taken from the first record.
    pub fn symbol(&self) -> Option<&str> {
        self.quotes.first().map(|q| q.symbol.as_str())
    }

    /// Extract open prices.
    pub fn opens(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.open).collect()
    }

    /// Extract high prices.
    pub fn highs(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.high).collect()
    }

    /// Extract low prices.
    pub fn lows(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.low).collect()
    }

    /// Extract close prices.
    pub fn closes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.close).collect()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}

impl FromIterator<Quote> for QuoteSeries {
    fn from_iter<T: IntoIterator<Item = Quote>>(iter: T) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

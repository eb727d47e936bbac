//! Indicator trait definitions.

use crate::error::IndicatorError;
use crate::types::QuoteSeries;

/// Trait for indicators computed over a whole quote series.
///
/// Series indicators consume the series in one pass and produce output
/// aligned with it, one slot per input record. Slots where a value is
/// not defined stay empty rather than shortening the output.
pub trait SeriesIndicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Compute the indicator over the series.
    ///
    /// # Arguments
    /// * `series` - Quote series ordered oldest first
    ///
    /// # Returns
    /// The full output, or an error if the series is too short
    fn compute(&self, series: &QuoteSeries) -> Result<Self::Output, IndicatorError>;

    /// Get the minimum records required.
    fn min_len(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that the series is long enough.
    fn validate(&self, series: &QuoteSeries) -> Result<(), IndicatorError> {
        if series.len() < self.min_len() {
            return Err(IndicatorError::InsufficientData {
                required: self.min_len(),
                available: series.len(),
            });
        }
        Ok(())
    }
}

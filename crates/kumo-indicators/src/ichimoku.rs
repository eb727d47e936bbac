//! Ichimoku Cloud indicator.

use crate::rolling::{rolling_max, rolling_min, shift_backward, shift_forward};
use kumo_core::error::IndicatorError;
use kumo_core::traits::SeriesIndicator;
use kumo_core::types::QuoteSeries;
use serde::{Deserialize, Serialize};

/// The five Ichimoku series, each aligned with the input.
///
/// Every vector has exactly one slot per input record; a slot is `None`
/// where the underlying window has not filled or a shift runs past the
/// edge of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IchimokuCloud {
    /// Conversion line: 9-period midline
    pub tenkan_sen: Vec<Option<f64>>,
    /// Base line: 26-period midline
    pub kijun_sen: Vec<Option<f64>>,
    /// Leading span A: (tenkan + kijun) / 2, displaced 26 ahead
    pub senkou_span_a: Vec<Option<f64>>,
    /// Leading span B: 52-period midline, displaced 26 ahead
    pub senkou_span_b: Vec<Option<f64>>,
    /// Lagging span: close displaced 26 behind
    pub chikou_span: Vec<Option<f64>>,
}

impl IchimokuCloud {
    /// Number of slots in each series.
    pub fn len(&self) -> usize {
        self.tenkan_sen.len()
    }

    /// Whether the cloud holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.tenkan_sen.is_empty()
    }
}

/// Ichimoku Cloud with the standard 9/26/52 windows.
#[derive(Debug, Clone)]
pub struct Ichimoku {
    tenkan_window: usize,
    kijun_window: usize,
    senkou_b_window: usize,
    shift: usize,
}

impl Ichimoku {
    /// Create an Ichimoku indicator with the standard windows.
    pub fn new() -> Self {
        Self::with_windows(9, 26, 52, 26)
    }

    /// Create an Ichimoku indicator with custom windows.
    pub fn with_windows(tenkan: usize, kijun: usize, senkou_b: usize, shift: usize) -> Self {
        assert!(tenkan > 0, "Tenkan window must be greater than 0");
        assert!(kijun > 0, "Kijun window must be greater than 0");
        assert!(senkou_b > 0, "Senkou B window must be greater than 0");
        Self {
            tenkan_window: tenkan,
            kijun_window: kijun,
            senkou_b_window: senkou_b,
            shift,
        }
    }
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self::new()
    }
}

/// Midline: (rolling max of highs + rolling min of lows) / 2.
fn midline(highs: &[f64], lows: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_max(highs, window)
        .into_iter()
        .zip(rolling_min(lows, window))
        .map(|(hi, lo)| match (hi, lo) {
            (Some(hi), Some(lo)) => Some((hi + lo) / 2.0),
            _ => None,
        })
        .collect()
}

impl SeriesIndicator for Ichimoku {
    type Output = IchimokuCloud;

    fn compute(&self, series: &QuoteSeries) -> Result<IchimokuCloud, IndicatorError> {
        self.validate(series)?;

        let highs = series.highs();
        let lows = series.lows();
        let closes = series.closes();

        let tenkan_sen = midline(&highs, &lows, self.tenkan_window);
        let kijun_sen = midline(&highs, &lows, self.kijun_window);

        let senkou_mid: Vec<Option<f64>> = tenkan_sen
            .iter()
            .zip(&kijun_sen)
            .map(|(t, k)| match (t, k) {
                (Some(t), Some(k)) => Some((t + k) / 2.0),
                _ => None,
            })
            .collect();

        let senkou_span_a = shift_forward(&senkou_mid, self.shift);
        let senkou_span_b = shift_forward(
            &midline(&highs, &lows, self.senkou_b_window),
            self.shift,
        );
        let chikou_span = shift_backward(&closes, self.shift);

        Ok(IchimokuCloud {
            tenkan_sen,
            kijun_sen,
            senkou_span_a,
            senkou_span_b,
            chikou_span,
        })
    }

    fn min_len(&self) -> usize {
        self.tenkan_window
            .max(self.kijun_window)
            .max(self.senkou_b_window)
    }

    fn name(&self) -> &str {
        "Ichimoku"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumo_core::types::Quote;

    /// Series with high = i + 10, low = i, close = i + 7.
    ///
    /// Monotone data gives every midline a closed form: the window
    /// maximum is the newest high and the minimum the oldest low.
    fn ramp_series(len: usize) -> QuoteSeries {
        (0..len)
            .map(|i| {
                let i = i as f64;
                Quote::new("TEST", i + 5.0, i + 10.0, i, i + 7.0)
            })
            .collect()
    }

    fn flat_series(len: usize) -> QuoteSeries {
        (0..len)
            .map(|_| Quote::new("TEST", 100.0, 100.0, 100.0, 100.0))
            .collect()
    }

    #[test]
    fn test_rejects_short_series() {
        let err = Ichimoku::new().compute(&ramp_series(51)).unwrap_err();

        assert!(matches!(
            err,
            IndicatorError::InsufficientData {
                required: 52,
                available: 51
            }
        ));
    }

    #[test]
    fn test_output_aligned_with_input() {
        let cloud = Ichimoku::new().compute(&ramp_series(60)).unwrap();

        assert_eq!(cloud.len(), 60);
        assert_eq!(cloud.tenkan_sen.len(), 60);
        assert_eq!(cloud.kijun_sen.len(), 60);
        assert_eq!(cloud.senkou_span_a.len(), 60);
        assert_eq!(cloud.senkou_span_b.len(), 60);
        assert_eq!(cloud.chikou_span.len(), 60);
    }

    #[test]
    fn test_tenkan_sen() {
        let cloud = Ichimoku::new().compute(&ramp_series(60)).unwrap();

        assert!(cloud.tenkan_sen[7].is_none());
        // (max high + min low) / 2 = ((i + 10) + (i - 8)) / 2 = i + 1
        assert!((cloud.tenkan_sen[8].unwrap() - 9.0).abs() < 1e-10);
        assert!((cloud.tenkan_sen[30].unwrap() - 31.0).abs() < 1e-10);
    }

    #[test]
    fn test_kijun_sen() {
        let cloud = Ichimoku::new().compute(&ramp_series(60)).unwrap();

        assert!(cloud.kijun_sen[24].is_none());
        // ((i + 10) + (i - 25)) / 2 = i - 7.5
        assert!((cloud.kijun_sen[25].unwrap() - 17.5).abs() < 1e-10);
        assert!((cloud.kijun_sen[40].unwrap() - 32.5).abs() < 1e-10);
    }

    #[test]
    fn test_senkou_span_a_displacement() {
        let cloud = Ichimoku::new().compute(&ramp_series(100)).unwrap();

        // Defined once the slot 26 back has both tenkan and kijun
        assert!(cloud.senkou_span_a[50].is_none());
        // mid[i - 26] = (i - 26) - 3.25
        assert!((cloud.senkou_span_a[51].unwrap() - 21.75).abs() < 1e-10);
        assert!((cloud.senkou_span_a[80].unwrap() - 50.75).abs() < 1e-10);
    }

    #[test]
    fn test_senkou_span_b_displacement() {
        let cloud = Ichimoku::new().compute(&ramp_series(100)).unwrap();

        // 52-window midline starts at 51, displaced 26 ahead
        assert!(cloud.senkou_span_b[76].is_none());
        // ((i - 26) + 10 + (i - 26) - 51) / 2 = i - 46.5
        assert!((cloud.senkou_span_b[77].unwrap() - 30.5).abs() < 1e-10);
        assert!((cloud.senkou_span_b[99].unwrap() - 52.5).abs() < 1e-10);
    }

    #[test]
    fn test_chikou_span_displacement() {
        let cloud = Ichimoku::new().compute(&ramp_series(60)).unwrap();

        // close[i + 26] = i + 33
        assert!((cloud.chikou_span[0].unwrap() - 33.0).abs() < 1e-10);
        assert!((cloud.chikou_span[33].unwrap() - 66.0).abs() < 1e-10);
        for i in 34..60 {
            assert!(cloud.chikou_span[i].is_none());
        }
    }

    #[test]
    fn test_flat_series_collapses_cloud() {
        let cloud = Ichimoku::new().compute(&flat_series(100)).unwrap();

        // Constant prices pin every defined slot to the price itself,
        // so the two leading spans coincide and the cloud has no body.
        for i in 0..100 {
            for series in [
                &cloud.tenkan_sen,
                &cloud.kijun_sen,
                &cloud.senkou_span_a,
                &cloud.senkou_span_b,
                &cloud.chikou_span,
            ] {
                if let Some(v) = series[i] {
                    assert!((v - 100.0).abs() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_recomputation_is_identical() {
        let series = ramp_series(80);
        let indicator = Ichimoku::new();

        let first = indicator.compute(&series).unwrap();
        let second = indicator.compute(&series).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_windows() {
        let indicator = Ichimoku::with_windows(3, 5, 8, 4);

        assert_eq!(indicator.min_len(), 8);
        let cloud = indicator.compute(&ramp_series(20)).unwrap();
        assert!(cloud.tenkan_sen[1].is_none());
        assert!(cloud.tenkan_sen[2].is_some());
        assert!(cloud.kijun_sen[3].is_none());
        assert!(cloud.kijun_sen[4].is_some());
        // 8-window midline starts at 7, displaced 4 ahead
        assert!(cloud.senkou_span_b[10].is_none());
        assert!(cloud.senkou_span_b[11].is_some());
    }
}

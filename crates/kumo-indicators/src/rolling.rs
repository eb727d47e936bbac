//! Rolling-window primitives.

use std::collections::VecDeque;

/// Rolling maximum over a fixed window.
///
/// Output is aligned with the input: `out[i]` is the maximum of
/// `values[i + 1 - window..=i]`, or `None` while the window is still
/// filling. Uses a monotonic deque of indices, so the whole pass is
/// O(n) regardless of window size.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "Window must be greater than 0");

    let mut result = Vec::with_capacity(values.len());
    // Indices of candidate maxima, values decreasing front to back
    let mut deque: VecDeque<usize> = VecDeque::new();

    for (i, &value) in values.iter().enumerate() {
        while let Some(&back) = deque.back() {
            if values[back] <= value {
                deque.pop_back();
            } else {
                break;
            }
        }
        deque.push_back(i);

        if let Some(&front) = deque.front() {
            if front + window <= i {
                deque.pop_front();
            }
        }

        if i + 1 >= window {
            result.push(deque.front().map(|&idx| values[idx]));
        } else {
            result.push(None);
        }
    }

    result
}

/// Rolling minimum over a fixed window.
///
/// Mirror of [`rolling_max`] with the comparison flipped.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "Window must be greater than 0");

    let mut result = Vec::with_capacity(values.len());
    // Indices of candidate minima, values increasing front to back
    let mut deque: VecDeque<usize> = VecDeque::new();

    for (i, &value) in values.iter().enumerate() {
        while let Some(&back) = deque.back() {
            if values[back] >= value {
                deque.pop_back();
            } else {
                break;
            }
        }
        deque.push_back(i);

        if let Some(&front) = deque.front() {
            if front + window <= i {
                deque.pop_front();
            }
        }

        if i + 1 >= window {
            result.push(deque.front().map(|&idx| values[idx]));
        } else {
            result.push(None);
        }
    }

    result
}

/// Displace a series toward later indices.
///
/// `out[i]` takes the value that sat at `i - offset`; the first
/// `offset` slots become `None`. Length is preserved.
pub fn shift_forward(values: &[Option<f64>], offset: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if i >= offset {
                values[i - offset]
            } else {
                None
            }
        })
        .collect()
}

/// Displace a series toward earlier indices.
///
/// `out[i]` takes the value that sits at `i + offset`; the last
/// `offset` slots become `None`. Length is preserved.
pub fn shift_backward(values: &[f64], offset: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| values.get(i + offset).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_max() {
        let values = vec![1.0, 3.0, 2.0, 5.0, 4.0];
        let result = rolling_max(&values, 3);

        assert_eq!(
            result,
            vec![None, None, Some(3.0), Some(5.0), Some(5.0)]
        );
    }

    #[test]
    fn test_rolling_min() {
        let values = vec![5.0, 2.0, 4.0, 1.0, 3.0];
        let result = rolling_min(&values, 2);

        assert_eq!(
            result,
            vec![None, Some(2.0), Some(2.0), Some(1.0), Some(1.0)]
        );
    }

    #[test]
    fn test_rolling_window_one_is_identity() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];

        let max = rolling_max(&values, 1);
        let min = rolling_min(&values, 1);

        for (i, &v) in values.iter().enumerate() {
            assert_eq!(max[i], Some(v));
            assert_eq!(min[i], Some(v));
        }
    }

    #[test]
    fn test_rolling_handles_duplicates() {
        let values = vec![2.0, 2.0, 2.0, 1.0, 2.0];

        assert_eq!(
            rolling_max(&values, 2),
            vec![None, Some(2.0), Some(2.0), Some(2.0), Some(2.0)]
        );
        assert_eq!(
            rolling_min(&values, 3),
            vec![None, None, Some(2.0), Some(1.0), Some(1.0)]
        );
    }

    #[test]
    fn test_rolling_window_longer_than_input() {
        let values = vec![1.0, 2.0, 3.0];
        let result = rolling_max(&values, 5);

        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_rolling_empty_input() {
        assert!(rolling_max(&[], 3).is_empty());
        assert!(rolling_min(&[], 3).is_empty());
    }

    #[test]
    fn test_rolling_matches_naive_scan() {
        let values: Vec<f64> = (0..200)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 10.0)
            .collect();
        let window = 9;

        let fast = rolling_max(&values, window);
        for i in 0..values.len() {
            let expected = if i + 1 >= window {
                values[i + 1 - window..=i]
                    .iter()
                    .cloned()
                    .fold(f64::NEG_INFINITY, f64::max)
            } else {
                continue;
            };
            assert!((fast[i].unwrap() - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_shift_forward() {
        let values = vec![Some(1.0), Some(2.0), None, Some(4.0)];

        assert_eq!(
            shift_forward(&values, 2),
            vec![None, None, Some(1.0), Some(2.0)]
        );
        assert_eq!(shift_forward(&values, 0), values);
        assert_eq!(shift_forward(&values, 10), vec![None, None, None, None]);
    }

    #[test]
    fn test_shift_backward() {
        let values = vec![1.0, 2.0, 3.0, 4.0];

        assert_eq!(
            shift_backward(&values, 2),
            vec![Some(3.0), Some(4.0), None, None]
        );
        assert_eq!(
            shift_backward(&values, 0),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
        );
        assert_eq!(shift_backward(&values, 10), vec![None, None, None, None]);
    }
}

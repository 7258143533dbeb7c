// File: crates/chart-core/src/rolling.rs
// Summary: Trailing simple moving average over optional samples (no partial windows).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollingError {
    #[error("rolling window must hold at least one sample")]
    ZeroWindow,
}

/// Streaming trailing mean over the last `window` samples.
///
/// Contract: `push` yields `Some(mean)` only once `window` samples have been
/// seen and none of the samples currently in the window is missing.
#[derive(Clone, Debug)]
pub struct RollingMean {
    buffer: Vec<Option<f64>>,
    index: usize,
    filled: usize,
    sum: f64,
    missing: usize,
    since_resum: usize,
}

impl RollingMean {
    pub fn new(window: usize) -> Result<Self, RollingError> {
        if window == 0 {
            return Err(RollingError::ZeroWindow);
        }
        Ok(Self {
            buffer: vec![None; window],
            index: 0,
            filled: 0,
            sum: 0.0,
            missing: 0,
            since_resum: 0,
        })
    }

    pub fn window(&self) -> usize {
        self.buffer.len()
    }

    /// NaN and infinite samples count as missing.
    pub fn push(&mut self, value: Option<f64>) -> Option<f64> {
        let value = value.filter(|v| v.is_finite());
        let window = self.buffer.len();
        if self.filled == window {
            match self.buffer[self.index] {
                Some(old) => self.sum -= old,
                None => self.missing -= 1,
            }
        } else {
            self.filled += 1;
        }

        match value {
            Some(v) => self.sum += v,
            None => self.missing += 1,
        }
        self.buffer[self.index] = value;
        self.index = (self.index + 1) % window;

        // Subtracting evicted samples accumulates rounding error on long runs.
        self.since_resum += 1;
        if self.since_resum >= window {
            self.since_resum = 0;
            self.sum = self.buffer.iter().flatten().sum();
        }

        if self.filled == window && self.missing == 0 {
            Some(self.sum / window as f64)
        } else {
            None
        }
    }
}

/// Trailing mean aligned by row: entry `i` averages rows `i+1-window ..= i`.
/// Rows before the first full window, and windows touching a missing sample, are `None`.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>, RollingError> {
    let mut acc = RollingMean::new(window)?;
    Ok(values.iter().map(|&v| acc.push(v)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn zero_window_is_rejected() {
        assert_eq!(rolling_mean(&[Some(1.0)], 0), Err(RollingError::ZeroWindow));
    }

    #[test]
    fn small_window_matches_manual_means() {
        let v = [1.0, 2.0, 3.0, 4.0, 10.0].map(Some);
        let out = rolling_mean(&v, 3).unwrap();
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], Some(2.0));
        assert_eq!(out[3], Some(3.0));
        assert!(approx(out[4].unwrap(), 17.0 / 3.0));
    }

    #[test]
    fn window_of_one_is_identity() {
        let v = [Some(3.5), Some(-1.0), Some(0.0)];
        assert_eq!(rolling_mean(&v, 1).unwrap(), v.to_vec());
    }

    #[test]
    fn window_longer_than_input_is_all_missing() {
        let v = [Some(1.0); 4];
        assert!(rolling_mean(&v, 5).unwrap().iter().all(Option::is_none));
    }

    #[test]
    fn missing_sample_blanks_every_window_containing_it() {
        let v = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0), Some(6.0)];
        let out = rolling_mean(&v, 2).unwrap();
        assert_eq!(out, vec![None, Some(1.5), None, None, Some(4.5), Some(5.5)]);
    }

    #[test]
    fn nan_sample_is_missing_and_does_not_poison_later_windows() {
        let mut v = vec![Some(1.0); 8];
        v[1] = Some(f64::NAN);
        let out = rolling_mean(&v, 3).unwrap();
        assert_eq!(out, vec![None, None, None, None, Some(1.0), Some(1.0), Some(1.0), Some(1.0)]);
    }

    #[test]
    fn infinite_sample_is_missing() {
        let v = [Some(2.0), Some(f64::INFINITY), Some(2.0), Some(2.0), Some(f64::NEG_INFINITY), Some(2.0), Some(2.0)];
        let out = rolling_mean(&v, 2).unwrap();
        assert_eq!(out, vec![None, None, None, Some(2.0), None, None, Some(2.0)]);
    }

    #[test]
    fn first_full_window_of_2000_over_5000_rows() {
        let v = (1..=5000).map(|i| Some((i as f64 * 0.37).sin() * 50.0 + i as f64)).collect::<Vec<_>>();
        let out = rolling_mean(&v, 2000).unwrap();
        assert_eq!(out.len(), 5000);
        assert!(out[..1999].iter().all(Option::is_none));

        let want = v[..2000].iter().flatten().sum::<f64>() / 2000.0;
        assert!(approx(out[1999].unwrap(), want));

        let want_last = v[3000..].iter().flatten().sum::<f64>() / 2000.0;
        assert!(approx(out[4999].unwrap(), want_last));
    }

    #[test]
    fn streaming_accumulator_reports_window() {
        let mut acc = RollingMean::new(4).unwrap();
        assert_eq!(acc.window(), 4);
        assert_eq!(acc.push(Some(1.0)), None);
    }
}

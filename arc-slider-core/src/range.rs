//! Mapping between progress along the arc and user-facing values.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::clamp_progress;

/// Most decimals a value is rounded to, whatever the step.
const MAX_DECIMALS: usize = 6;

/// Bounds and granularity of a slider's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl ValueRange {
    /// Create a range; requires `min < max` and a positive step.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Half the width of the range.
    pub fn middle_range(&self) -> f64 {
        self.span() / 2.0
    }

    /// Value in the middle of the range.
    pub fn midpoint(&self) -> f64 {
        self.round_to_precision(self.min + self.middle_range())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Value at a progress fraction, snapped to the step grid.
    ///
    /// The ends of the arc always map to the exact bounds.
    pub fn value_at(&self, progress: f64) -> f64 {
        let progress = clamp_progress(progress);
        if progress <= 0.0 {
            return self.min;
        }
        if progress >= 1.0 {
            return self.max;
        }
        let steps = (progress * self.span() / self.step).round();
        let value = self.min + steps * self.step;
        self.round_to_precision(value).clamp(self.min, self.max)
    }

    /// Progress fraction of a value, clamped to `[0, 1]`.
    pub fn progress_of(&self, value: f64) -> f64 {
        clamp_progress((value - self.min) / self.span())
    }

    /// Number of decimals implied by the step and bounds (`0.25` gives 2).
    ///
    /// `max` counts because the end of the arc maps to it even off the step grid.
    pub fn decimals(&self) -> usize {
        [self.step, self.min, self.max]
            .iter()
            .map(|n| decimals_of(*n))
            .max()
            .unwrap_or(0)
    }

    /// Display text for a value, using the range's precision.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    fn round_to_precision(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals() as i32);
        (value * factor).round() / factor
    }
}

fn decimals_of(n: f64) -> usize {
    let text = format!("{}", n);
    text.split_once('.')
        .map(|(_, fraction)| fraction.len().min(MAX_DECIMALS))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(ValueRange::new(0.0, 100.0, 1.0).is_ok());
        assert!(matches!(
            ValueRange::new(10.0, 10.0, 1.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            ValueRange::new(10.0, 0.0, 1.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            ValueRange::new(0.0, 10.0, 0.0),
            Err(Error::InvalidStep(_))
        ));
        assert!(ValueRange::new(f64::NAN, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_middle_range() {
        let range = ValueRange::new(20.0, 120.0, 1.0).unwrap();
        assert_eq!(range.middle_range(), 50.0);
        assert_eq!(range.midpoint(), 70.0);
    }

    #[test]
    fn test_value_at_boundaries() {
        let range = ValueRange::new(-50.0, 50.0, 1.0).unwrap();
        assert_eq!(range.value_at(0.0), -50.0);
        assert_eq!(range.value_at(1.0), 50.0);
        assert_eq!(range.value_at(0.5), 0.0);
        assert_eq!(range.value_at(0.333), -17.0);
        assert_eq!(range.value_at(-3.0), -50.0);
        assert_eq!(range.value_at(3.0), 50.0);
    }

    #[test]
    fn test_value_at_snaps_to_step() {
        let range = ValueRange::new(0.0, 10.0, 2.5).unwrap();
        assert_eq!(range.value_at(0.1), 0.0);
        assert_eq!(range.value_at(0.2), 2.5);
        assert_eq!(range.value_at(0.74), 7.5);

        // Steps that do not divide the span still reach max at the end
        let uneven = ValueRange::new(0.0, 10.0, 3.0).unwrap();
        assert_eq!(uneven.value_at(1.0), 10.0);
        assert_eq!(uneven.value_at(0.99), 9.0);
    }

    #[test]
    fn test_progress_round_trip() {
        let range = ValueRange::new(0.0, 1.0, 0.1).unwrap();
        for tenth in 0..=10 {
            let value = tenth as f64 / 10.0;
            assert_eq!(range.value_at(range.progress_of(value)), value);
        }
    }

    #[test]
    fn test_format() {
        let whole = ValueRange::default();
        assert_eq!(whole.format(42.0), "42");

        let fine = ValueRange::new(0.0, 1.0, 0.05).unwrap();
        assert_eq!(fine.decimals(), 2);
        assert_eq!(fine.format(0.3), "0.30");
    }

    #[test]
    fn test_off_grid_max_keeps_its_decimals() {
        let range = ValueRange::new(0.0, 10.5, 1.0).unwrap();

        assert_eq!(range.decimals(), 1);
        assert_eq!(range.value_at(1.0), 10.5);
        assert_eq!(range.format(range.value_at(1.0)), "10.5");
        assert_eq!(range.midpoint().to_string(), range.format(range.midpoint()));
    }
}

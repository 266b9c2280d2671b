//! Motion curves that shape blend progress.
//!
//! A curve maps normalized progress in [0, 1] to eased progress in [0, 1].
//! Curves are owned by configuration and never change while a blend runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackcamError;

/// Easing curve variants for orient blends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionCurve {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
    /// Piecewise-linear curve through `(time, value)` keyframes.
    ///
    /// `(0, 0)` and `(1, 1)` are implied when the first or last key does
    /// not sit on that boundary.
    Keyframes {
        /// Keys sorted by strictly increasing time.
        points: Vec<[f32; 2]>,
    },
}

impl MotionCurve {
    /// Build a keyframe curve, rejecting keys that are out of range or not
    /// monotonic.
    pub fn keyframes(points: Vec<[f32; 2]>) -> Result<Self, TrackcamError> {
        let curve = Self::Keyframes { points };
        curve.validate()?;
        Ok(curve)
    }

    /// Check that the curve is a monotonic mapping of [0, 1] onto [0, 1].
    ///
    /// Hermite control values must lie in [0, 1]; that keeps the cubic
    /// inside the unit square and non-decreasing.
    pub fn validate(&self) -> Result<(), TrackcamError> {
        let points = match self {
            Self::CubicHermite { c1, c2 } => {
                return validate_control_values(*c1, *c2);
            }
            Self::Keyframes { points } => points,
            _ => return Ok(()),
        };

        let mut prev = [0.0_f32, 0.0_f32];
        for (i, &[time, value]) in points.iter().enumerate() {
            if !(0.0..=1.0).contains(&time) || !(0.0..=1.0).contains(&value) {
                return Err(TrackcamError::InvalidCurve(format!(
                    "key {i} ({time}, {value}) lies outside the unit square"
                )));
            }
            if i > 0 && time <= prev[0] {
                return Err(TrackcamError::InvalidCurve(format!(
                    "key {i} time {time} does not increase"
                )));
            }
            if value < prev[1] {
                return Err(TrackcamError::InvalidCurve(format!(
                    "key {i} value {value} decreases"
                )));
            }
            prev = [time, value];
        }
        Ok(())
    }

    /// Evaluate the curve at progress `t`.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SqrtOut => t.sqrt(),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
            Self::Keyframes { points } => sample_keyframes(points, t),
        }
    }
}

impl Default for MotionCurve {
    #[inline]
    fn default() -> Self {
        Self::Linear
    }
}

fn validate_control_values(c1: f32, c2: f32) -> Result<(), TrackcamError> {
    for (name, value) in [("c1", c1), ("c2", c2)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(TrackcamError::InvalidCurve(format!(
                "cubic hermite {name} = {value} lies outside [0, 1]"
            )));
        }
    }
    Ok(())
}

fn sample_keyframes(points: &[[f32; 2]], t: f32) -> f32 {
    let mut prev = [0.0_f32, 0.0_f32];
    for &key in points {
        if t <= key[0] {
            let span = key[0] - prev[0];
            if span <= f32::EPSILON {
                return key[1];
            }
            let local = (t - prev[0]) / span;
            return prev[1] + (key[1] - prev[1]) * local;
        }
        prev = key;
    }

    // Past the last key: run to the implied (1, 1) end point.
    let span = 1.0 - prev[0];
    if span <= f32::EPSILON {
        return prev[1];
    }
    prev[1] + (1.0 - prev[1]) * ((t - prev[0]) / span)
}

//! Interpolation curves used by timed sequences.
//!
//! A [`Curve`] maps a normalised progress fraction onto an interpolation
//! weight. The named curves cover the common tweening shapes; [`Curve::Keyframes`]
//! stands in for designer-authored curves and interpolates linearly between
//! sorted keys.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single key on a [`Curve::Keyframes`] curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position of the key along the curve, normally in `[0, 1]`.
    pub time: f32,
    /// Weight returned at `time`.
    pub value: f32,
}

impl Keyframe {
    /// Creates a key at `time` with weight `value`.
    #[must_use]
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Easing curve evaluated over a fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// Identity mapping.
    Linear,
    /// Quadratic ease-in: slow start.
    EaseIn,
    /// Quadratic ease-out: slow finish.
    EaseOut,
    /// Smoothstep: slow start and finish.
    #[default]
    EaseInOut,
    /// Piecewise-linear curve through the given keys.
    Keyframes {
        /// Keys sorted by ascending time.
        points: Vec<Keyframe>,
    },
}

/// Reasons a [`Curve`] is rejected during validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A keyframe curve needs at least one key.
    #[error("keyframe curve has no keys")]
    Empty,
    /// Keys must be finite and sorted by ascending time.
    #[error("keyframe {index} is out of order or not finite")]
    Unsorted {
        /// Index of the first offending key.
        index: usize,
    },
}

impl Curve {
    /// Evaluates the curve at `fraction`, clamped to `[0, 1]`.
    ///
    /// Non-finite input evaluates as `0`.
    ///
    /// # Examples
    /// ```
    /// use summoner::easing::Curve;
    /// assert!((Curve::EaseInOut.evaluate(0.5) - 0.5).abs() < 1e-6);
    /// assert!((Curve::Linear.evaluate(2.0) - 1.0).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    pub fn evaluate(&self, fraction: f32) -> f32 {
        let t = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::Keyframes { points } => sample_keyframes(points, t),
        }
    }

    /// Checks that a keyframe curve is non-empty, finite and sorted.
    ///
    /// Named curves are always valid.
    ///
    /// # Errors
    /// Returns [`CurveError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), CurveError> {
        let Self::Keyframes { points } = self else {
            return Ok(());
        };
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        let mut previous = f32::NEG_INFINITY;
        for (index, key) in points.iter().enumerate() {
            if !key.time.is_finite() || !key.value.is_finite() || key.time < previous {
                return Err(CurveError::Unsorted { index });
            }
            previous = key.time;
        }
        Ok(())
    }
}

fn sample_keyframes(points: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }
    for pair in points.windows(2) {
        let [start, end] = pair else {
            continue;
        };
        if t <= end.time {
            let span = end.time - start.time;
            if span <= f32::EPSILON {
                return end.value;
            }
            let local = (t - start.time) / span;
            return start.value + (end.value - start.value) * local;
        }
    }
    last.value
}

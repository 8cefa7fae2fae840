//! Single-axis scalar trajectory of one joint across a sequence.
//!
//! Frames where the joint is missing map to NaN, which every downstream
//! extremum search skips. Values are never substituted with zero.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::skeleton::{Point, SkeletonFrame};

/// Which coordinate axis to sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalAxis {
    Horizontal,
    #[default]
    Vertical,
}

impl SignalAxis {
    fn component(self, point: Point) -> f64 {
        match self {
            SignalAxis::Horizontal => point.x,
            SignalAxis::Vertical => point.y,
        }
    }
}

/// Extract one scalar per frame from the named joint along `axis`.
///
/// With `invert` set the sign is flipped, so in image coordinates (y growing
/// downward) upward motion produces positive-going peaks.
pub fn extract_trajectory(
    frames: &[SkeletonFrame],
    joint: &str,
    axis: SignalAxis,
    invert: bool,
) -> Array1<f64> {
    let sign = if invert { -1.0 } else { 1.0 };
    frames
        .iter()
        .map(|frame| match frame.joint(joint) {
            Some(point) => sign * axis.component(point),
            None => f64::NAN,
        })
        .collect()
}

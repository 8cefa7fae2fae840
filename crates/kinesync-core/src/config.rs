use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEAD_JOINT, DEFAULT_MAX_OFFSET, DEFAULT_MIN_PEAK_SEPARATION, DEFAULT_NUM_PEAKS,
    DEFAULT_PEAK_WINDOW_END,
};
use crate::signal::SignalAxis;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlignmentConfig {
    #[serde(default)]
    pub peaks: PeakConfig,
    #[serde(default)]
    pub angles: AngleConfig,
}

/// Parameters for peak-landmark alignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeakConfig {
    /// Joint whose trajectory is searched for peaks.
    pub joint: String,
    /// Number of top peaks kept per trajectory.
    pub num_peaks: usize,
    /// Start of the half-open peak-search frame window.
    pub window_start: usize,
    /// End of the half-open peak-search frame window.
    pub window_end: usize,
    /// Minimum index separation between kept peaks.
    pub min_separation: usize,
    /// Axis the trajectory is sampled from.
    pub axis: SignalAxis,
    /// Flip the axis sign so upward motion peaks positive in image coordinates.
    pub invert_axis: bool,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            joint: DEFAULT_HEAD_JOINT.to_string(),
            num_peaks: DEFAULT_NUM_PEAKS,
            window_start: 0,
            window_end: DEFAULT_PEAK_WINDOW_END,
            min_separation: DEFAULT_MIN_PEAK_SEPARATION,
            axis: SignalAxis::Vertical,
            invert_axis: true,
        }
    }
}

/// Parameters for angle-correlation alignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AngleConfig {
    /// Exclusive upper bound on scanned candidate offsets.
    pub max_offset: usize,
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

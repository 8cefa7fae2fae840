//! Peak-landmark alignment.
//!
//! Finds the most prominent peaks of a single-joint trajectory in each
//! sequence, pairs them positionally, and averages the per-pair frame
//! differences into one integer offset. Works well for movements with a few
//! clear repetitions (squats, jumps) where both devices saw the same events.

use ndarray::{ArrayView1, s};
use tracing::debug;

use crate::config::PeakConfig;
use crate::error::{KinesyncError, Result};
use crate::signal::extract_trajectory;
use crate::skeleton::SkeletonFrame;

/// A local maximum of a trajectory, used as a temporal landmark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub value: f64,
    pub frame: usize,
}

/// Result of peak-landmark alignment.
#[derive(Clone, Debug)]
pub struct PeakAlignment {
    /// Frames the target sequence leads the reference by (may be negative).
    pub offset: i64,
    /// Kept peaks of the reference trajectory, in frame order.
    pub reference_peaks: Vec<Peak>,
    /// Kept peaks of the target trajectory, in frame order.
    pub target_peaks: Vec<Peak>,
}

/// Find strict local maxima of the finite samples, at least `min_separation`
/// frames apart.
///
/// Candidates are thinned highest value first: a candidate within
/// `min_separation` of an already-kept peak is discarded, so one physical
/// event never yields two adjacent peaks. NaN samples are never peaks, and a
/// sample next to a NaN is not considered one either.
pub fn find_local_maxima(trajectory: ArrayView1<'_, f64>, min_separation: usize) -> Vec<Peak> {
    let mut candidates: Vec<Peak> = Vec::new();
    for i in 1..trajectory.len().saturating_sub(1) {
        let value = trajectory[i];
        if value.is_finite() && value > trajectory[i - 1] && value > trajectory[i + 1] {
            candidates.push(Peak { value, frame: i });
        }
    }

    candidates.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut kept: Vec<Peak> = Vec::new();
    for candidate in candidates {
        let crowded = kept
            .iter()
            .any(|peak| candidate.frame.abs_diff(peak.frame) < min_separation);
        if !crowded {
            kept.push(candidate);
        }
    }
    kept
}

/// The `num_peaks` largest maxima inside the half-open window
/// `[window_start, window_end)`, re-sorted into frame order.
///
/// Magnitude-based selection followed by a chronological re-sort picks the
/// most prominent events first, then studies their sequence. Frame indices in
/// the result are absolute, not window-relative. `window_end` past the
/// trajectory is clamped; an empty window or one starting past the trajectory
/// is a caller error.
pub fn ordered_top_peaks(
    trajectory: ArrayView1<'_, f64>,
    num_peaks: usize,
    window_start: usize,
    window_end: usize,
    min_separation: usize,
) -> Result<Vec<Peak>> {
    if num_peaks == 0 {
        return Err(KinesyncError::NonPositiveParameter { name: "num_peaks" });
    }
    if min_separation == 0 {
        return Err(KinesyncError::NonPositiveParameter {
            name: "min_separation",
        });
    }
    let len = trajectory.len();
    let end = window_end.min(len);
    if window_start >= end {
        return Err(KinesyncError::WindowOutOfRange {
            start: window_start,
            end: window_end,
            len,
        });
    }

    let windowed = trajectory.slice(s![window_start..end]);
    let mut peaks = find_local_maxima(windowed, min_separation);
    peaks.truncate(num_peaks);
    for peak in &mut peaks {
        peak.frame += window_start;
    }
    peaks.sort_by_key(|peak| peak.frame);
    Ok(peaks)
}

/// Align two sequences by pairing their top trajectory peaks.
///
/// The i-th reference peak is paired with the i-th target peak; when the
/// lists differ in length only the common prefix is paired and the excess
/// peaks are dropped. Pairing is positional: nothing verifies that the i-th
/// peaks of both sequences belong to the same physical repetition, so a
/// spurious extra peak in the middle of one list shifts every later pair.
pub fn align_by_peaks(
    reference: &[SkeletonFrame],
    target: &[SkeletonFrame],
    config: &PeakConfig,
) -> Result<PeakAlignment> {
    if reference.is_empty() || target.is_empty() {
        return Err(KinesyncError::EmptySequence);
    }

    let reference_peaks = peaks_of(reference, config, "reference")?;
    let target_peaks = peaks_of(target, config, "target")?;
    debug!(
        reference = reference_peaks.len(),
        target = target_peaks.len(),
        joint = %config.joint,
        "peak detection complete"
    );

    let offsets: Vec<i64> = reference_peaks
        .iter()
        .zip(&target_peaks)
        .map(|(r, t)| t.frame as i64 - r.frame as i64)
        .collect();
    // Both lists are non-empty here, so the pair list cannot be empty.
    let offset = (offsets.iter().sum::<i64>() as f64 / offsets.len() as f64).round() as i64;

    Ok(PeakAlignment {
        offset,
        reference_peaks,
        target_peaks,
    })
}

fn peaks_of(
    frames: &[SkeletonFrame],
    config: &PeakConfig,
    sequence: &'static str,
) -> Result<Vec<Peak>> {
    let trajectory = extract_trajectory(frames, &config.joint, config.axis, config.invert_axis);
    let peaks = ordered_top_peaks(
        trajectory.view(),
        config.num_peaks,
        config.window_start,
        config.window_end,
        config.min_separation,
    )?;
    if peaks.is_empty() {
        return Err(KinesyncError::NoPeaks {
            joint: config.joint.clone(),
            sequence,
        });
    }
    Ok(peaks)
}

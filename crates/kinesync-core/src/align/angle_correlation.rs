//! Angle-correlation alignment.
//!
//! Brute-force scan over candidate frame offsets. Each candidate is scored by
//! the mean absolute joint-angle difference across every angle component
//! defined in both overlapping frames, pooled over the whole overlap; the
//! minimizer wins. The scan is independent per offset, so large searches run
//! on Rayon.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::config::AngleConfig;
use crate::consts::PARALLEL_OFFSET_THRESHOLD;
use crate::error::{KinesyncError, Result};
use crate::signal::{extract_angle_track, JointAngles};
use crate::skeleton::SkeletonFrame;

/// Score of one candidate offset.
///
/// Kept as a tagged value rather than an `f64::INFINITY` sentinel so an
/// unscorable candidate can never leak into further arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OffsetScore {
    /// Mean absolute joint-angle difference over the overlap, in degrees.
    Finite(f64),
    /// No overlapping frames, or no angle component defined in both.
    Undetermined,
}

impl OffsetScore {
    pub fn is_finite(self) -> bool {
        matches!(self, OffsetScore::Finite(_))
    }

    /// Numeric rendering for display and curve export; `Undetermined` maps
    /// to infinity.
    pub fn value(self) -> f64 {
        match self {
            OffsetScore::Finite(score) => score,
            OffsetScore::Undetermined => f64::INFINITY,
        }
    }
}

/// Result of angle-correlation alignment.
#[derive(Clone, Debug)]
pub struct AngleAlignment {
    /// Candidate with the minimum score; ties go to the smallest offset.
    pub best_offset: usize,
    /// Score at `best_offset`, always finite.
    pub best_score: f64,
    /// Score of every candidate, indexed by offset.
    pub scores: Vec<OffsetScore>,
}

/// Align two sequences by scanning candidate offsets of the target.
pub fn align_by_angles(
    reference: &[SkeletonFrame],
    target: &[SkeletonFrame],
    config: &AngleConfig,
) -> Result<AngleAlignment> {
    align_by_angles_with_progress(reference, target, config, |_| {})
}

/// Like [`align_by_angles`], reporting the number of scored candidates after
/// each one completes.
pub fn align_by_angles_with_progress<F>(
    reference: &[SkeletonFrame],
    target: &[SkeletonFrame],
    config: &AngleConfig,
    on_offset_done: F,
) -> Result<AngleAlignment>
where
    F: Fn(usize) + Send + Sync,
{
    if config.max_offset == 0 {
        return Err(KinesyncError::NonPositiveParameter { name: "max_offset" });
    }
    if reference.is_empty() || target.is_empty() {
        return Err(KinesyncError::EmptySequence);
    }

    // Each frame's angle vector is fixed across candidates; extract once.
    let reference_angles = extract_angle_track(reference);
    let target_angles = extract_angle_track(target);

    let counter = AtomicUsize::new(0);
    let score_one = |offset: usize| {
        let score = score_offset(&reference_angles, &target_angles, offset);
        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        on_offset_done(done);
        score
    };

    let scores: Vec<OffsetScore> = if config.max_offset >= PARALLEL_OFFSET_THRESHOLD {
        (0..config.max_offset).into_par_iter().map(score_one).collect()
    } else {
        (0..config.max_offset).map(score_one).collect()
    };

    // Ascending scan with a strict minimum resolves ties to the smallest offset.
    let mut best: Option<(usize, f64)> = None;
    for (offset, score) in scores.iter().enumerate() {
        if let OffsetScore::Finite(value) = score {
            if best.map_or(true, |(_, best_value)| *value < best_value) {
                best = Some((offset, *value));
            }
        }
    }

    let (best_offset, best_score) = best.ok_or(KinesyncError::NoValidComparisons)?;
    debug!(best_offset, best_score, "angle scan complete");

    Ok(AngleAlignment {
        best_offset,
        best_score,
        scores,
    })
}

/// Mean absolute angle difference between `reference[i]` and
/// `target[i + offset]` over their overlap.
fn score_offset(
    reference: &[JointAngles],
    target: &[JointAngles],
    offset: usize,
) -> OffsetScore {
    if offset >= target.len() {
        return OffsetScore::Undetermined;
    }
    let overlap = reference.len().min(target.len() - offset);

    let mut total = 0.0;
    let mut count = 0usize;
    for i in 0..overlap {
        let pairs = reference[i]
            .components()
            .into_iter()
            .zip(target[i + offset].components());
        for pair in pairs {
            if let (Some(a), Some(b)) = pair {
                total += (a - b).abs();
                count += 1;
            }
        }
    }

    if count == 0 {
        OffsetScore::Undetermined
    } else {
        OffsetScore::Finite(total / count as f64)
    }
}

use tracing::{info, warn};

use crate::align::angle_correlation::{align_by_angles, AngleAlignment};
use crate::align::peaks::{align_by_peaks, PeakAlignment};
use crate::config::AlignmentConfig;
use crate::error::Result;
use crate::skeleton::SkeletonFrame;

/// Outcome of running both aligners over one pair of sequences.
///
/// The two offsets are deliberately not reconciled; when they disagree the
/// caller decides which to trust (or reports both).
#[derive(Debug)]
pub struct AlignmentReport {
    pub peak: Result<PeakAlignment>,
    pub angle: Result<AngleAlignment>,
}

/// Run peak-landmark and angle-correlation alignment over the same pair.
///
/// A data-dependent failure of one aligner (no peaks, no valid angle
/// comparisons) does not discard the other's result.
pub fn align_skeletons(
    reference: &[SkeletonFrame],
    target: &[SkeletonFrame],
    config: &AlignmentConfig,
) -> AlignmentReport {
    let peak = align_by_peaks(reference, target, &config.peaks);
    match &peak {
        Ok(alignment) => info!(offset = alignment.offset, "peak alignment"),
        Err(err) => warn!(%err, "peak alignment failed"),
    }

    let angle = align_by_angles(reference, target, &config.angles);
    match &angle {
        Ok(alignment) => info!(
            offset = alignment.best_offset,
            score = alignment.best_score,
            "angle alignment"
        ),
        Err(err) => warn!(%err, "angle alignment failed"),
    }

    AlignmentReport { peak, angle }
}

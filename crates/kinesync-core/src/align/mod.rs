pub mod angle_correlation;
mod dispatcher;
pub mod peaks;

pub use angle_correlation::{
    align_by_angles, align_by_angles_with_progress, AngleAlignment, OffsetScore,
};
pub use dispatcher::{align_skeletons, AlignmentReport};
pub use peaks::{align_by_peaks, find_local_maxima, ordered_top_peaks, Peak, PeakAlignment};

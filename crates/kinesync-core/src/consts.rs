/// Magnitude of the missing-joint sentinel coordinate. A joint whose x and y
/// components both have this absolute value was not observed in that frame.
pub const MISSING_MARKER_MAGNITUDE: f64 = 100.0;

/// Joint used for the default head-height trajectory.
pub const DEFAULT_HEAD_JOINT: &str = "top_of_the_head";

/// Default number of top peaks kept per trajectory.
pub const DEFAULT_NUM_PEAKS: usize = 6;

/// Default minimum index separation between detected peaks. Suppresses one
/// physical event (e.g. the top of a rep) registering as two adjacent peaks.
pub const DEFAULT_MIN_PEAK_SEPARATION: usize = 20;

/// Default end of the half-open peak-search frame window. Clamped to the
/// trajectory length for shorter recordings.
pub const DEFAULT_PEAK_WINDOW_END: usize = 1500;

/// Default exclusive upper bound on candidate offsets for the angle scan.
pub const DEFAULT_MAX_OFFSET: usize = 100;

/// Minimum candidate-offset count to use Rayon parallelism in the angle scan.
pub const PARALLEL_OFFSET_THRESHOLD: usize = 32;

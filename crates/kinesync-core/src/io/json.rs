use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::skeleton::SkeletonFrame;

/// Load a skeleton recording: a JSON array of frames, each a map from joint
/// name to an `[x, y]` coordinate (or the missing-joint sentinel).
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Vec<SkeletonFrame>> {
    let file = File::open(path.as_ref())?;
    let frames = serde_json::from_reader(BufReader::new(file))?;
    Ok(frames)
}

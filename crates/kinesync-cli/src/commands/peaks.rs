use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use kinesync_core::align::ordered_top_peaks;
use kinesync_core::consts::{
    DEFAULT_HEAD_JOINT, DEFAULT_MIN_PEAK_SEPARATION, DEFAULT_NUM_PEAKS, DEFAULT_PEAK_WINDOW_END,
};
use kinesync_core::io::load_sequence;
use kinesync_core::signal::{extract_trajectory, SignalAxis};

#[derive(Args)]
pub struct PeaksArgs {
    /// Skeleton recording (JSON)
    pub file: PathBuf,

    /// Joint whose trajectory is searched
    #[arg(long, default_value = DEFAULT_HEAD_JOINT)]
    pub joint: String,

    /// Number of top peaks to keep
    #[arg(long, default_value_t = DEFAULT_NUM_PEAKS)]
    pub num_peaks: usize,

    /// Start of the search window (frames)
    #[arg(long, default_value = "0")]
    pub window_start: usize,

    /// End of the search window (frames, exclusive)
    #[arg(long, default_value_t = DEFAULT_PEAK_WINDOW_END)]
    pub window_end: usize,

    /// Minimum frame separation between peaks
    #[arg(long, default_value_t = DEFAULT_MIN_PEAK_SEPARATION)]
    pub min_separation: usize,

    /// Keep the raw vertical sign instead of flipping it upward-positive
    #[arg(long)]
    pub no_invert: bool,
}

pub fn run(args: &PeaksArgs) -> Result<()> {
    let frames = load_sequence(&args.file)?;
    let trajectory =
        extract_trajectory(&frames, &args.joint, SignalAxis::Vertical, !args.no_invert);
    let peaks = ordered_top_peaks(
        trajectory.view(),
        args.num_peaks,
        args.window_start,
        args.window_end,
        args.min_separation,
    )?;

    println!(
        "Top {} peaks of '{}' over {} frames:",
        peaks.len(),
        args.joint,
        frames.len()
    );
    for peak in &peaks {
        println!("  frame {:>6}  value {:>10.3}", peak.frame, peak.value);
    }

    Ok(())
}

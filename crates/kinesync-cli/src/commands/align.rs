use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::Style;
use kinesync_core::align::{align_skeletons, Peak};
use tracing::debug;
use kinesync_core::config::{AlignmentConfig, AngleConfig, PeakConfig};
use kinesync_core::consts::{
    DEFAULT_HEAD_JOINT, DEFAULT_MAX_OFFSET, DEFAULT_MIN_PEAK_SEPARATION, DEFAULT_NUM_PEAKS,
    DEFAULT_PEAK_WINDOW_END,
};
use kinesync_core::io::load_sequence;
use kinesync_core::signal::SignalAxis;

#[derive(Args)]
pub struct AlignArgs {
    /// Reference recording (JSON)
    pub reference: PathBuf,

    /// Target recording (JSON)
    pub target: PathBuf,

    /// TOML alignment config; command-line parameters are ignored when set
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Joint whose trajectory is searched for peaks
    #[arg(long, default_value = DEFAULT_HEAD_JOINT)]
    pub joint: String,

    /// Number of top peaks kept per trajectory
    #[arg(long, default_value_t = DEFAULT_NUM_PEAKS)]
    pub num_peaks: usize,

    /// Start of the peak-search window (frames)
    #[arg(long, default_value = "0")]
    pub window_start: usize,

    /// End of the peak-search window (frames, exclusive)
    #[arg(long, default_value_t = DEFAULT_PEAK_WINDOW_END)]
    pub window_end: usize,

    /// Minimum frame separation between peaks
    #[arg(long, default_value_t = DEFAULT_MIN_PEAK_SEPARATION)]
    pub min_separation: usize,

    /// Exclusive upper bound on angle-scan candidate offsets
    #[arg(long, default_value_t = DEFAULT_MAX_OFFSET)]
    pub max_offset: usize,
}

impl AlignArgs {
    fn alignment_config(&self) -> Result<AlignmentConfig> {
        if let Some(ref path) = self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            return toml::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()));
        }
        Ok(AlignmentConfig {
            peaks: PeakConfig {
                joint: self.joint.clone(),
                num_peaks: self.num_peaks,
                window_start: self.window_start,
                window_end: self.window_end,
                min_separation: self.min_separation,
                axis: SignalAxis::Vertical,
                invert_axis: true,
            },
            angles: AngleConfig {
                max_offset: self.max_offset,
            },
        })
    }
}

pub fn run(args: &AlignArgs) -> Result<()> {
    let header = Style::new().cyan().bold();
    let value = Style::new().green().bold();
    let failure = Style::new().red();

    let reference = load_sequence(&args.reference)?;
    let target = load_sequence(&args.target)?;
    println!(
        "Aligning {} ({} frames) against {} ({} frames)",
        args.target.display(),
        target.len(),
        args.reference.display(),
        reference.len()
    );

    let config = args.alignment_config()?;
    debug!(?config, "alignment parameters");
    let report = align_skeletons(&reference, &target, &config);

    println!("\n{}", header.apply_to("Peak alignment"));
    match &report.peak {
        Ok(alignment) => {
            print_peaks("reference", &alignment.reference_peaks);
            print_peaks("target", &alignment.target_peaks);
            println!("Offset: {}", value.apply_to(alignment.offset));
        }
        Err(err) => println!("{}", failure.apply_to(format!("Failed: {err}"))),
    }

    println!("\n{}", header.apply_to("Angle alignment"));
    match &report.angle {
        Ok(alignment) => {
            println!(
                "Offset: {} (mean angle difference {:.4} deg)",
                value.apply_to(alignment.best_offset),
                alignment.best_score
            );
        }
        Err(err) => println!("{}", failure.apply_to(format!("Failed: {err}"))),
    }

    if report.peak.is_err() && report.angle.is_err() {
        bail!("both alignment methods failed");
    }
    Ok(())
}

fn print_peaks(label: &str, peaks: &[Peak]) {
    let frames: Vec<String> = peaks.iter().map(|p| p.frame.to_string()).collect();
    println!("{:<10} peaks at frames [{}]", label, frames.join(", "));
}

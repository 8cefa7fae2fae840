use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use kinesync_core::align::align_by_angles_with_progress;
use kinesync_core::config::AngleConfig;
use kinesync_core::consts::DEFAULT_MAX_OFFSET;
use kinesync_core::io::load_sequence;

#[derive(Args)]
pub struct AnglesArgs {
    /// Reference recording (JSON)
    pub reference: PathBuf,

    /// Target recording (JSON)
    pub target: PathBuf,

    /// Exclusive upper bound on candidate offsets
    #[arg(long, default_value_t = DEFAULT_MAX_OFFSET)]
    pub max_offset: usize,
}

pub fn run(args: &AnglesArgs) -> Result<()> {
    let reference = load_sequence(&args.reference)?;
    let target = load_sequence(&args.target)?;

    let pb = ProgressBar::new(args.max_offset as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scanning offsets");

    let config = AngleConfig {
        max_offset: args.max_offset,
    };
    let alignment = align_by_angles_with_progress(&reference, &target, &config, |done| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("Scan complete");

    println!("offset  mean abs angle diff (deg)");
    for (offset, score) in alignment.scores.iter().enumerate() {
        println!("{:>6}  {}", offset, format_score(score.value()));
    }
    println!(
        "\nBest offset: {} (score {:.4})",
        alignment.best_offset, alignment.best_score
    );

    Ok(())
}

fn format_score(value: f64) -> String {
    if value.is_infinite() {
        "undetermined".to_string()
    } else {
        format!("{:.4}", value)
    }
}

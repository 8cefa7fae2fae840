use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use kinesync_core::io::load_sequence;

#[derive(Args)]
pub struct InfoArgs {
    /// Skeleton recording (JSON)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frames = load_sequence(&args.file)?;

    println!("File:    {}", args.file.display());
    println!("Frames:  {}", frames.len());

    // joint name -> frames in which it was actually observed
    let mut observed: BTreeMap<&str, usize> = BTreeMap::new();
    for frame in &frames {
        for name in frame.joint_names() {
            let seen = observed.entry(name).or_default();
            if frame.joint(name).is_some() {
                *seen += 1;
            }
        }
    }
    println!("Joints:  {}", observed.len());

    for (name, seen) in &observed {
        println!(
            "  {:<20} observed {:>5}/{:<5} missing {}",
            name,
            seen,
            frames.len(),
            frames.len() - seen
        );
    }

    Ok(())
}

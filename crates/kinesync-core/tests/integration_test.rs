mod common;

use std::io::Write;

use approx::assert_abs_diff_eq;
use common::{delayed_by, squat_frame, squat_sequence};
use kinesync_core::align::align_skeletons;
use kinesync_core::config::AlignmentConfig;
use kinesync_core::error::KinesyncError;
use kinesync_core::io::load_sequence;

#[test]
fn test_both_aligners_agree_on_synthetic_squat() {
    // Two "devices" record the same 200-frame squat session; the target
    // device started 12 frames late.
    let reference = squat_sequence(200);
    let target = delayed_by(&reference, 12, &squat_frame(0.0));

    let report = align_skeletons(&reference, &target, &AlignmentConfig::default());

    let peak = report.peak.unwrap();
    assert_eq!(peak.offset, 12);
    // One peak per 50-frame cycle, interior frames only.
    let reference_frames: Vec<usize> = peak.reference_peaks.iter().map(|p| p.frame).collect();
    assert_eq!(reference_frames, vec![50, 100, 150]);

    let angle = report.angle.unwrap();
    assert_eq!(angle.best_offset, 12);
    assert_abs_diff_eq!(angle.best_score, 0.0);
}

#[test]
fn test_one_aligner_failing_keeps_the_other_result() {
    // Head joint absent everywhere: no trajectory peaks, but leg joints
    // still carry angle information.
    let strip_head = |frames: &[kinesync_core::skeleton::SkeletonFrame]| {
        frames
            .iter()
            .map(|f| {
                f.joint_names()
                    .filter(|n| *n != "top_of_the_head")
                    .map(|n| {
                        let p = f.joint(n).unwrap();
                        (n.to_string(), [p.x, p.y])
                    })
                    .collect()
            })
            .collect::<Vec<_>>()
    };

    let reference = strip_head(&squat_sequence(200));
    let target = delayed_by(&reference, 7, &reference[0].clone());

    let report = align_skeletons(&reference, &target, &AlignmentConfig::default());
    assert!(matches!(
        report.peak,
        Err(KinesyncError::NoPeaks {
            sequence: "reference",
            ..
        })
    ));
    assert_eq!(report.angle.unwrap().best_offset, 7);
}

#[test]
fn test_load_sequence_reads_recording_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"top_of_the_head": [251.0, 118.5], "left_knee": [240.0, 466.0]}},
            {{"top_of_the_head": [-100, -100]}}
        ]"#
    )
    .unwrap();
    file.flush().unwrap();

    let frames = load_sequence(file.path()).unwrap();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].joint("top_of_the_head").is_some());
    assert!(frames[1].joint("top_of_the_head").is_none());
}

#[test]
fn test_load_sequence_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not a recording").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        load_sequence(file.path()),
        Err(KinesyncError::InvalidJson(_))
    ));
}

#[test]
fn test_missing_file_reports_io_error() {
    assert!(matches!(
        load_sequence("/nonexistent/recording.json"),
        Err(KinesyncError::Io(_))
    ));
}

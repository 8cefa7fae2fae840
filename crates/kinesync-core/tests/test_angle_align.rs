mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_abs_diff_eq;
use common::{delayed_by, knee_frame};
use kinesync_core::align::{align_by_angles, align_by_angles_with_progress, OffsetScore};
use kinesync_core::config::AngleConfig;
use kinesync_core::error::KinesyncError;
use kinesync_core::skeleton::SkeletonFrame;

/// Recording whose knee angle increases linearly, so every frame's angle
/// vector is unique.
fn ramp_sequence(len: usize) -> Vec<SkeletonFrame> {
    (0..len).map(|i| knee_frame(30.0 + 2.0 * i as f64)).collect()
}

fn max_offset(max_offset: usize) -> AngleConfig {
    AngleConfig { max_offset }
}

#[test]
fn test_known_delay_is_recovered_with_zero_score() {
    let reference = ramp_sequence(50);
    let target = delayed_by(&reference, 5, &SkeletonFrame::new());

    let alignment = align_by_angles(&reference, &target, &max_offset(20)).unwrap();
    assert_eq!(alignment.best_offset, 5);
    assert_abs_diff_eq!(alignment.best_score, 0.0);
    assert_eq!(alignment.scores.len(), 20);
    assert_eq!(alignment.scores[5], OffsetScore::Finite(0.0));
}

#[test]
fn test_score_grows_away_from_true_delay() {
    let reference = ramp_sequence(50);
    let target = delayed_by(&reference, 5, &SkeletonFrame::new());

    let alignment = align_by_angles(&reference, &target, &max_offset(12)).unwrap();
    for (offset, score) in alignment.scores.iter().enumerate() {
        let OffsetScore::Finite(value) = *score else {
            panic!("offset {offset} should overlap");
        };
        // The ramp makes the mean difference exactly 2° per frame of error.
        assert_abs_diff_eq!(value, 2.0 * offset.abs_diff(5) as f64, epsilon = 1e-9);
    }
}

#[test]
fn test_no_overlap_offsets_are_recorded_as_undetermined() {
    let reference = ramp_sequence(10);
    let target = ramp_sequence(4);

    let alignment = align_by_angles(&reference, &target, &max_offset(8)).unwrap();
    assert_eq!(alignment.best_offset, 0);
    for offset in 4..8 {
        assert_eq!(alignment.scores[offset], OffsetScore::Undetermined);
        // Infinity for display, never NaN and never zero.
        assert!(alignment.scores[offset].value().is_infinite());
    }
}

#[test]
fn test_no_valid_comparisons_scores_undetermined_not_nan() {
    // Frames exist and overlap, but no angle component is defined in both.
    let reference = vec![SkeletonFrame::new(); 6];
    let target = ramp_sequence(6);

    let err = align_by_angles(&reference, &target, &max_offset(4)).unwrap_err();
    assert!(matches!(err, KinesyncError::NoValidComparisons));
}

#[test]
fn test_ties_resolve_to_smallest_offset() {
    // Constant angle: every candidate scores exactly zero.
    let reference = vec![knee_frame(90.0); 30];
    let target = vec![knee_frame(90.0); 30];

    let alignment = align_by_angles(&reference, &target, &max_offset(10)).unwrap();
    assert_eq!(alignment.best_offset, 0);
    assert_abs_diff_eq!(alignment.best_score, 0.0);
}

#[test]
fn test_parameter_misuse_is_rejected() {
    let frames = ramp_sequence(10);
    assert!(matches!(
        align_by_angles(&frames, &frames, &max_offset(0)),
        Err(KinesyncError::NonPositiveParameter { name: "max_offset" })
    ));
    assert!(matches!(
        align_by_angles(&[], &frames, &max_offset(10)),
        Err(KinesyncError::EmptySequence)
    ));
}

#[test]
fn test_progress_reports_every_candidate() {
    let reference = ramp_sequence(40);
    let target = delayed_by(&reference, 3, &SkeletonFrame::new());

    let seen = AtomicUsize::new(0);
    let alignment = align_by_angles_with_progress(&reference, &target, &max_offset(35), |done| {
        seen.fetch_max(done, Ordering::Relaxed);
    })
    .unwrap();

    assert_eq!(alignment.best_offset, 3);
    assert_eq!(seen.load(Ordering::Relaxed), 35);
}

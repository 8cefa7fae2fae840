#![allow(dead_code)]

use std::f64::consts::TAU;

use kinesync_core::consts::MISSING_MARKER_MAGNITUDE;
use kinesync_core::skeleton::SkeletonFrame;

/// The missing-joint sentinel coordinate.
pub fn missing() -> [f64; 2] {
    [-MISSING_MARKER_MAGNITUDE, -MISSING_MARKER_MAGNITUDE]
}

/// Build a frame from (joint, coordinate) pairs.
pub fn frame(joints: &[(&str, [f64; 2])]) -> SkeletonFrame {
    joints
        .iter()
        .map(|&(name, coord)| (name.to_string(), coord))
        .collect()
}

/// Frame containing only the head joint at height `y`.
pub fn head_frame(y: f64) -> SkeletonFrame {
    frame(&[("top_of_the_head", [250.0, y])])
}

/// Frame whose left-knee triple forms exactly `angle_deg` at the knee.
///
/// The hip sits straight above the knee; the ankle is placed on a circle
/// around it so the hip-knee-ankle angle equals `angle_deg`. All other
/// joints are absent, so only the knee component of the angle vector is
/// defined.
pub fn knee_frame(angle_deg: f64) -> SkeletonFrame {
    let knee = [250.0, 400.0];
    let reach = 50.0;
    let rad = angle_deg.to_radians();
    frame(&[
        ("left_hip", [knee[0], knee[1] - reach]),
        ("left_knee", knee),
        ("left_ankle", [knee[0] + reach * rad.sin(), knee[1] - reach * rad.cos()]),
    ])
}

/// One frame of a synthetic squat at the given cycle phase (radians).
///
/// The body bobs vertically with `cos(phase)`: phase 0 is the standing top
/// (minimum image y for the head), phase pi the bottom. Leg and arm joints
/// move enough to make all four angle components phase-dependent.
pub fn squat_frame(phase: f64) -> SkeletonFrame {
    let bob = phase.cos();
    frame(&[
        ("top_of_the_head", [250.0, 320.0 - 60.0 * bob]),
        ("left_shoulder", [230.0, 340.0 - 55.0 * bob]),
        ("right_shoulder", [270.0, 340.0 - 55.0 * bob]),
        ("left_elbow", [210.0, 380.0 - 20.0 * bob]),
        ("left_wrist", [205.0 + 10.0 * bob, 420.0]),
        ("left_hip", [230.0, 400.0 - 40.0 * bob]),
        ("right_hip", [270.0, 400.0 - 40.0 * bob]),
        ("left_knee", [230.0, 470.0]),
        ("left_ankle", [225.0 + 20.0 * bob, 540.0]),
    ])
}

/// A squat recording of `len` frames with a 50-frame cycle: the head peaks
/// at frames 50, 100, 150, ...
pub fn squat_sequence(len: usize) -> Vec<SkeletonFrame> {
    (0..len).map(|i| squat_frame(TAU * i as f64 / 50.0)).collect()
}

/// Delay a recording by `lead` frames, padding the front with copies of
/// `pad`. `target[lead + i]` equals `frames[i]` exactly.
pub fn delayed_by(frames: &[SkeletonFrame], lead: usize, pad: &SkeletonFrame) -> Vec<SkeletonFrame> {
    let mut target = vec![pad.clone(); lead];
    target.extend_from_slice(frames);
    target
}

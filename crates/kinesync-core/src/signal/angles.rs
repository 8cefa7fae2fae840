//! Per-frame joint-angle vectors for whole-pose comparison.
//!
//! Four vertex angles (knee, elbow, hip, shoulder), each derived from a fixed
//! (A, B, C) joint triple. A component is undefined whenever one of its
//! defining joints is missing or a ray degenerates to zero length.

use crate::skeleton::{Point, SkeletonFrame};

/// The four derived vertex angles of one frame, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointAngles {
    pub knee: Option<f64>,
    pub elbow: Option<f64>,
    pub hip: Option<f64>,
    pub shoulder: Option<f64>,
}

impl JointAngles {
    /// Fixed-order view of the four components.
    pub fn components(&self) -> [Option<f64>; 4] {
        [self.knee, self.elbow, self.hip, self.shoulder]
    }

    /// Count of defined components.
    pub fn defined(&self) -> usize {
        self.components().iter().filter(|c| c.is_some()).count()
    }
}

/// Angle at vertex `b` formed by the rays `b -> a` and `b -> c`, in degrees.
///
/// Returns `None` when either ray has zero length. The cosine is clamped to
/// [-1, 1] before `acos`, so the result is always within [0, 180].
pub fn vertex_angle(a: Point, b: Point, c: Point) -> Option<f64> {
    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);

    let norm_ba = (bax * bax + bay * bay).sqrt();
    let norm_bc = (bcx * bcx + bcy * bcy).sqrt();
    if norm_ba == 0.0 || norm_bc == 0.0 {
        return None;
    }

    let cosine = ((bax * bcx + bay * bcy) / (norm_ba * norm_bc)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

/// Angle for one (A, B, C) joint triple, `None` if any joint is missing.
fn triple_angle(frame: &SkeletonFrame, a: &str, b: &str, c: &str) -> Option<f64> {
    vertex_angle(frame.joint(a)?, frame.joint(b)?, frame.joint(c)?)
}

/// Compute the four joint angles of a single frame.
pub fn extract_joint_angles(frame: &SkeletonFrame) -> JointAngles {
    JointAngles {
        knee: triple_angle(frame, "left_hip", "left_knee", "left_ankle"),
        elbow: triple_angle(frame, "left_shoulder", "left_elbow", "left_wrist"),
        hip: triple_angle(frame, "right_shoulder", "left_hip", "right_hip"),
        shoulder: triple_angle(frame, "left_elbow", "left_shoulder", "right_shoulder"),
    }
}

/// Compute the angle vector of every frame in a sequence.
pub fn extract_angle_track(frames: &[SkeletonFrame]) -> Vec<JointAngles> {
    frames.iter().map(extract_joint_angles).collect()
}

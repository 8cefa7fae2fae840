use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::MISSING_MARKER_MAGNITUDE;

/// A 2-D joint position in source-image coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// One time-sample's full set of joint positions.
///
/// Stores the raw loader coordinates, including the missing-joint sentinel.
/// [`SkeletonFrame::joint`] is the single place the sentinel is decoded;
/// everything downstream sees `Option<Point>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkeletonFrame {
    joints: HashMap<String, [f64; 2]>,
}

/// True when a raw coordinate is the missing-joint sentinel.
fn is_missing(coord: [f64; 2]) -> bool {
    coord[0].abs() == MISSING_MARKER_MAGNITUDE && coord[1].abs() == MISSING_MARKER_MAGNITUDE
}

impl SkeletonFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, coord: [f64; 2]) {
        self.joints.insert(name.into(), coord);
    }

    /// Position of the named joint, or `None` when the joint is absent from
    /// the frame or carries the missing-joint sentinel.
    pub fn joint(&self, name: &str) -> Option<Point> {
        let coord = *self.joints.get(name)?;
        if is_missing(coord) {
            return None;
        }
        Some(Point::new(coord[0], coord[1]))
    }

    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(String::as_str)
    }

    /// Number of joints recorded in the frame, missing markers included.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// New frame with every observed joint translated by `(dx, dy)`.
    /// Missing markers are carried over untranslated; `self` is not mutated.
    pub fn shifted(&self, dx: f64, dy: f64) -> SkeletonFrame {
        let joints = self
            .joints
            .iter()
            .map(|(name, &coord)| {
                let moved = if is_missing(coord) {
                    coord
                } else {
                    [coord[0] + dx, coord[1] + dy]
                };
                (name.clone(), moved)
            })
            .collect();
        SkeletonFrame { joints }
    }

    /// Anchor point between the hips: the midpoint when both are observed,
    /// a single hip when only one is, `None` when neither is.
    pub fn mid_hip(&self) -> Option<Point> {
        match (self.joint("left_hip"), self.joint("right_hip")) {
            (Some(left), Some(right)) => Some(left.midpoint(right)),
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (None, None) => None,
        }
    }
}

impl FromIterator<(String, [f64; 2])> for SkeletonFrame {
    fn from_iter<I: IntoIterator<Item = (String, [f64; 2])>>(iter: I) -> Self {
        SkeletonFrame {
            joints: iter.into_iter().collect(),
        }
    }
}

pub mod angles;
pub mod trajectory;

pub use angles::{extract_angle_track, extract_joint_angles, vertex_angle, JointAngles};
pub use trajectory::{extract_trajectory, SignalAxis};

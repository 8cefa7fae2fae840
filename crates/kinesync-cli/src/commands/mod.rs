pub mod align;
pub mod angles;
pub mod info;
pub mod peaks;

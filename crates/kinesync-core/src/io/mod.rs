pub mod json;

pub use json::load_sequence;

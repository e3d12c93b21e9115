//! Weighted categorical draw

pub mod sampler;

pub use sampler::{draw_from_partition, draw_index};

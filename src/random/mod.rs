//! Pseudo-random input generation.

pub mod uniform;

pub use uniform::{prepare_vector, UniformVector};

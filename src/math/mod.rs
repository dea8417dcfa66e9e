//! Numeric kernels.

pub mod dot_product;

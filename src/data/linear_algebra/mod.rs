//! # Linear algebra
//!
//! The tableau is small and dense, so a row major `Vec<Vec<F>>` is all that is needed.
pub mod matrix;

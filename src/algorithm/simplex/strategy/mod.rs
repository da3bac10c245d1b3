//! # Strategies
//!
//! Decisions the simplex method leaves open.
pub mod pivot_rule;

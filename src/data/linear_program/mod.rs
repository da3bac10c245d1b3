//! # Representing linear programs
//!
//! The elements a linear program is described with, and what is derived from a solved program.
pub mod elements;
pub mod solution;
pub mod verification;

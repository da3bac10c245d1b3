//! # A step-by-step tableau simplex solver
//!
//! Linear programs in standard maximization form (`max c^T x` subject to `A x <= b`, `x >= 0`) are
//! solved with the tableau form of the Simplex Method. Every pivot is recorded, together with the
//! arithmetic that produced each updated cell, such that the solve can be replayed one step at a
//! time.
//!
//! The typical path through the crate:
//!
//! * text is parsed into a `LinearExpression` by `io::expression`,
//! * `algorithm::simplex::solve` builds the initial tableau and pivots until optimal,
//! * the returned `SolveResult` holds the `Trace` of all snapshots and the extracted `Solution`,
//! * `io::render` turns that result into text for a terminal.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;

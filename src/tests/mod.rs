//! # Tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_LITERAL_STRING`
//! * `fn problem_text()`
//! * `fn program()`
//! * `fn initial_matrix()`
//! * `fn matrix_after_first_pivot()`
pub mod problem_1;
pub mod problem_2;

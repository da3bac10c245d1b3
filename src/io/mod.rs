//! # Reading and writing of linear programs
//!
//! This module provides read functionality for problem text, and write functionality for the
//! trace of a solve.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::io::error::ImportError;
use crate::io::problem::ProblemText;

pub mod error;
pub mod expression;
pub mod format;
pub mod problem;
pub mod render;

/// Import a problem from a file.
///
/// Currently only supports the plain text format described in the `problem` module.
///
/// The `import` function takes a file path and returns, if successful, a struct which can be
/// converted to an objective function and constraints.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or when the text can't be
/// split in an objective and constraint rows.
pub fn import(file_path: &Path) -> Result<ProblemText, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("lp" | "txt") => Ok(problem::parse(&program)?),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

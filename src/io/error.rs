//! # Error reporting for reading of linear program descriptions
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a linear program.
    Parse(ParseError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => f.write_str(message),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more `ParseError`s to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// Describes the cause of a `ParseError`.
///
/// It can be either a line number and line contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(usize, String),
    Nested(Box<ParseError>),
}

/// A `FileLocation` references a line by its (one based) line number, and the line itself.
pub type FileLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// What went wrong, without the causes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Descriptions of all errors in the chain, starting with this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(ParseErrorSource::Nested(error)) => {
                descriptions.extend(error.chain_description());
            },
            None => {},
        }

        descriptions
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::{ImportError, ParseError};

    #[test]
    fn chain() {
        let inner = ParseError::with_file_location("Unknown relation", (3, "2x + y < 4"));
        let outer = ParseError::with_cause("Could not read constraint", inner);

        let text = outer.to_string();
        assert!(text.starts_with("ParseError: Could not read constraint"));
        assert!(text.contains("Unknown relation"));
        assert!(text.contains("Caused at line\t3:\t2x + y < 4"));
        assert!(outer.source().is_some());
        assert_eq!(outer.description(), "Could not read constraint");
    }

    #[test]
    fn import_wraps_parse() {
        let error: ImportError = ParseError::new("No objective").into();
        assert!(matches!(error, ImportError::Parse(_)));
        assert_eq!(error.to_string(), "ParseError: No objective");
    }
}

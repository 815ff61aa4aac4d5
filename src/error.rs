use thiserror::Error;

/// An error enum for return from package methods that may fail
#[derive(Error, Debug)]
pub enum PackageError {
    /// Cannot convert a name to/from unicode
    #[error("String conversion Error")]
    StringConversion,
    /// Requesting an entry or source file that doesn't exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// More than one entry matches the requested name
    #[error("Name {0:?} matches more than one entry")]
    AmbiguousName(String),
    /// An empty or otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An entry name whose encoding does not fit the fixed name field
    #[error("Name {0:?} does not fit the name field")]
    NameTooLong(String),
    /// An entry count the count header cannot represent
    #[error("Entry count {0} out of range")]
    CountOutOfRange(usize),
    /// A header or table inconsistent with the file contents
    #[error("Malformed package: {0}")]
    Malformed(String),
}

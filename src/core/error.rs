//! Error types for loading translation catalogs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsError {
    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML.
    #[error("XML syntax error at line {line}: {message}")]
    Xml { line: usize, message: String },

    /// Well-formed XML whose root is not `<TS>`.
    #[error("Not a Qt translation file (root element is <{found}>)")]
    NotATranslationFile { found: String },

    #[error("Unexpected <{element}> inside <{parent}> at line {line}")]
    UnexpectedElement {
        element: String,
        parent: String,
        line: usize,
    },

    #[error("<{parent}> at line {line} has no <{element}>")]
    MissingElement {
        element: &'static str,
        parent: &'static str,
        line: usize,
    },

    #[error("Invalid value \"{value}\" for attribute '{attribute}' at line {line}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
        line: usize,
    },

    #[error("Document ended before </{element}>")]
    UnexpectedEof { element: String },
}

pub type TsResult<T> = Result<T, TsError>;

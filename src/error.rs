//! Crate-level error types.

use std::fmt;

/// Errors produced by the trackcam crate.
#[derive(Debug)]
pub enum TrackcamError {
    /// An action name was queried that has no entry in the binding table.
    UnknownAction(String),
    /// A transform the orienter needs was not supplied or does not exist.
    MissingTransform(&'static str),
    /// A physical input string could not be parsed.
    InvalidBinding(String),
    /// A motion curve's keyframes are out of range or not monotonic.
    InvalidCurve(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TrackcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction(name) => {
                write!(f, "no bindings registered for action {name:?}")
            }
            Self::MissingTransform(role) => {
                write!(f, "the {role} transform is not initialized")
            }
            Self::InvalidBinding(msg) => {
                write!(f, "invalid input binding: {msg}")
            }
            Self::InvalidCurve(msg) => write!(f, "invalid motion curve: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TrackcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

//! Error types for initializer expansion.

use autoinit_syntax::{DeclKind, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for expansion operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// The attribute was attached to something other than a struct or class.
    #[error("AutoInit can only be applied to structs and classes")]
    UnsupportedDeclarationKind {
        /// Kind of the rejected declaration.
        kind: DeclKind,
        /// Location of the attribute.
        location: SourceLocation,
    },
}

impl ExpansionError {
    /// Creates an unsupported declaration kind error.
    #[must_use]
    pub const fn unsupported(kind: DeclKind, location: SourceLocation) -> Self {
        Self::UnsupportedDeclarationKind { kind, location }
    }

    /// Returns the location the host should attach the diagnostic to.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::UnsupportedDeclarationKind { location, .. } => *location,
        }
    }

    /// Converts the error into a host-renderable diagnostic.
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.location())
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Halts the expansion.
    Error,
    /// Reported, expansion continues.
    Warning,
    /// Additional context.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
            Self::Note => f.write_str("note"),
        }
    }
}

/// A diagnostic handed back to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Message text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// Attachment point.
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = ExpansionError::unsupported(DeclKind::Enum, SourceLocation::new(1, 1));
        assert_eq!(
            err.to_string(),
            "AutoInit can only be applied to structs and classes"
        );
    }

    #[test]
    fn test_diagnostic_from_error() {
        let err = ExpansionError::unsupported(DeclKind::Protocol, SourceLocation::new(3, 5));
        let diagnostic = err.diagnostic();

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.location, SourceLocation::new(3, 5));
        assert_eq!(
            diagnostic.to_string(),
            "3:5: error: AutoInit can only be applied to structs and classes"
        );
    }
}

//! Error types for command execution.
//!
//! Every user-input problem maps to one fixed diagnostic. These never stop
//! the interpreter. The only fatal category is [`Error::Storage`], raised
//! when the document cannot be written.

/// Command execution errors.
///
/// | Category | Variants |
/// |----------|----------|
/// | Validation ladder | `ClassNameMissing` .. `ValueMissing` |
/// | Grammar | `UnknownSyntax` |
/// | System | `Storage` |
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No type name was given
    #[error("class name missing")]
    ClassNameMissing,

    /// The type name is not registered
    #[error("class doesn't exist")]
    ClassDoesNotExist,

    /// No instance id was given
    #[error("instance id missing")]
    InstanceIdMissing,

    /// No entity exists at `<Type>.<id>`
    #[error("no instance found")]
    NoInstanceFound,

    /// Update without an attribute name
    #[error("attribute name missing")]
    AttributeNameMissing,

    /// Update without a value
    #[error("value missing")]
    ValueMissing,

    /// The line is not a recognized command
    #[error("unknown syntax: {line}")]
    UnknownSyntax {
        /// The line as the user typed it
        line: String,
    },

    /// The store could not persist
    #[error(transparent)]
    Storage(#[from] roost_core::Error),
}

impl Error {
    /// Whether the interpreter must stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_text() {
        assert_eq!(Error::ClassNameMissing.to_string(), "class name missing");
        assert_eq!(Error::ClassDoesNotExist.to_string(), "class doesn't exist");
        assert_eq!(Error::InstanceIdMissing.to_string(), "instance id missing");
        assert_eq!(Error::NoInstanceFound.to_string(), "no instance found");
        assert_eq!(Error::AttributeNameMissing.to_string(), "attribute name missing");
        assert_eq!(Error::ValueMissing.to_string(), "value missing");
        assert_eq!(
            Error::UnknownSyntax { line: "fly User".into() }.to_string(),
            "unknown syntax: fly User"
        );
    }

    #[test]
    fn test_only_storage_is_fatal() {
        assert!(!Error::NoInstanceFound.is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(Error::Storage(roost_core::Error::Io(io)).is_fatal());
    }
}

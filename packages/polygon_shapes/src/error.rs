use thiserror::Error;

/// Errors that can occur when reading coordinates or shapes from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided text that did not match the expected format.
    #[error("invalid syntax: '{invalid_value}' is invalid: {problem}")]
    InvalidSyntax {
        /// The specific value that was invalid. This may either be the entire input
        /// or a single token of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// Shape text did not contain exactly one numeric token per coordinate component.
    #[error("expected {expected} numeric tokens but found {actual}")]
    TokenCount {
        /// Twice the vertex count of the shape being read.
        expected: usize,

        /// The number of tokens actually available.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn invalid_syntax(
        invalid_value: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self::InvalidSyntax {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
        }
    }
}

/// A specialized `Result` type for shape operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

//! Error types for argument dispatch.

/// Errors that can occur while dispatching arguments.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// An option that requires a value was the last argument.
    #[error("Option `{0}` requires an argument, but none is given.")]
    ArgumentRequired(String),

    /// A registered handler returned an error.
    ///
    /// The handler's error is carried as-is: its message and source chain
    /// are unchanged, and it can be recovered with `downcast_ref`.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl ParseError {
    /// Create a [`ParseError::ArgumentRequired`] error for `option`.
    pub fn argument_required(option: impl Into<String>) -> Self {
        Self::ArgumentRequired(option.into())
    }

    /// The option token that was missing its value, if this is an
    /// [`ParseError::ArgumentRequired`] error.
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::ArgumentRequired(option) => Some(option),
            Self::Handler(_) => None,
        }
    }

    /// Returns true if the error came from a registered handler.
    pub fn is_handler_error(&self) -> bool {
        matches!(self, Self::Handler(_))
    }
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, ParseError>;

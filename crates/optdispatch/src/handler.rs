//! Argument handler types.
//!
//! A handler is any `FnMut(&str)` closure. It receives the value resolved for
//! an option or positional slot; options without a value receive `""`.
//!
//! Closures may return either:
//! - `()` for handlers that cannot fail
//! - `Result<(), E>` where `E: Into<anyhow::Error>`, for handlers that parse
//!   or validate their value
//!
//! Both are normalized through [`IntoHandlerResult`] into a [`HandlerResult`],
//! so a failing handler aborts [`Parser::run`](crate::Parser::run) with
//! [`ParseError::Handler`](crate::ParseError::Handler).

/// The result type produced by every stored handler.
pub type HandlerResult = anyhow::Result<()>;

/// A boxed handler, as stored by the parser.
///
/// The lifetime lets handlers borrow state owned by the caller, such as a
/// `&RefCell<Config>` that outlives the parser.
pub type BoxedHandler<'a> = Box<dyn FnMut(&str) -> HandlerResult + 'a>;

/// Trait for types that can be converted into a [`HandlerResult`].
///
/// # Example
///
/// ```rust
/// use optdispatch::{HandlerResult, IntoHandlerResult};
///
/// let infallible: HandlerResult = ().into_handler_result();
/// assert!(infallible.is_ok());
///
/// let parsed: Result<(), std::num::ParseIntError> = "x".parse::<u32>().map(|_| ());
/// assert!(parsed.into_handler_result().is_err());
/// ```
pub trait IntoHandlerResult {
    /// Convert this type into a [`HandlerResult`].
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}

/// Boxes a closure into a [`BoxedHandler`].
pub(crate) fn boxed<'a, F, R>(mut f: F) -> BoxedHandler<'a>
where
    F: FnMut(&str) -> R + 'a,
    R: IntoHandlerResult,
{
    Box::new(move |value: &str| f(value).into_handler_result())
}

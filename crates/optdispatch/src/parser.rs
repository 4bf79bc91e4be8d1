//! The argument parser and its dispatch pass.
//!
//! # Dispatch Rules
//!
//! [`Parser::run`] walks the arguments once, left to right:
//!
//! ```text
//! token is a registered option?
//! ├── NoArgument        → handler("")                    advance 1
//! ├── RequiredArgument  → handler(next)                  advance 2
//! │                       (no next → ArgumentRequired, stop)
//! ├── OptionalArgument  → handler(next) or handler("")   advance 2 or 1
//! └── not registered    → next positional handler(token) advance 1
//!                         (none left → token dropped)
//! ```
//!
//! The value following a `RequiredArgument` or `OptionalArgument` option is
//! always taken as its value, even when it is itself a registered option.
//! For `-t -v` with `-t` taking a value, `-t` receives `"-v"`.

use crate::error::{ParseError, Result};
use crate::handler::{boxed, BoxedHandler, IntoHandlerResult};
use crate::registry::{ArgKind, OptionRegistry};

/// Callback-driven command-line argument parser.
///
/// Options are registered with one or more tokens and an [`ArgKind`];
/// positional handlers are registered in the order they should receive
/// non-option arguments. Nothing is validated until [`run`](Self::run).
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use optdispatch::{ArgKind, Parser};
///
/// let threads = Cell::new(1);
/// let verbose = Cell::new(false);
/// let input = std::cell::RefCell::new(String::new());
///
/// let mut parser = Parser::new(["prog", "-t", "4", "-v", "data.txt"])
///     .register_option(["-t", "--threads"], ArgKind::RequiredArgument, |v| {
///         threads.set(v.parse::<usize>()?);
///         Ok::<_, std::num::ParseIntError>(())
///     })
///     .register_option(["-v"], ArgKind::NoArgument, |_| verbose.set(true))
///     .register_positional(|v| *input.borrow_mut() = v.to_string());
///
/// parser.run()?;
///
/// assert_eq!(threads.get(), 4);
/// assert!(verbose.get());
/// assert_eq!(*input.borrow(), "data.txt");
/// # Ok::<(), optdispatch::ParseError>(())
/// ```
pub struct Parser<'a> {
    args: Vec<String>,
    options: OptionRegistry<'a>,
    positionals: Vec<BoxedHandler<'a>>,
}

/// Scan state for one dispatch pass.
#[derive(Debug, Default)]
struct Cursor {
    arg: usize,
    positional: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser from a full argument vector.
    ///
    /// The first element is the program name and is skipped.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_args(argv.into_iter().skip(1))
    }

    /// Creates a parser from arguments that already exclude the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            options: OptionRegistry::new(),
            positionals: Vec::new(),
        }
    }

    /// Creates a parser from the arguments of the current process.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Registers an option under every token in `tokens`.
    ///
    /// All tokens share `handler` and `kind`. Any string is accepted as a
    /// token. Registering a token again replaces its previous binding.
    pub fn register_option<I, S, F, R>(mut self, tokens: I, kind: ArgKind, handler: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut(&str) -> R + 'a,
        R: IntoHandlerResult,
    {
        self.options.bind(tokens, kind, boxed(handler));
        self
    }

    /// Appends a positional handler.
    ///
    /// Positional handlers receive non-option arguments in registration
    /// order, one argument each.
    pub fn register_positional<F, R>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) -> R + 'a,
        R: IntoHandlerResult,
    {
        self.positionals.push(boxed(handler));
        self
    }

    /// The arguments this parser dispatches, without the program name.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns true if `token` is a registered option.
    pub fn is_option(&self, token: &str) -> bool {
        self.options.contains(token)
    }

    /// The [`ArgKind`] `token` is registered with, if any.
    pub fn option_kind(&self, token: &str) -> Option<ArgKind> {
        self.options.lookup(token).map(|binding| binding.kind)
    }

    /// Number of registered option tokens.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Number of registered positional handlers.
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Dispatches every argument to its handler.
    ///
    /// Each call is an independent pass starting from the first argument and
    /// the first positional handler.
    ///
    /// # Errors
    ///
    /// - [`ParseError::ArgumentRequired`] if a [`ArgKind::RequiredArgument`]
    ///   option is the last argument.
    /// - [`ParseError::Handler`] if a handler fails.
    ///
    /// The pass stops at the first error. Handlers that already ran are not
    /// rolled back.
    pub fn run(&mut self) -> Result<()> {
        let mut cursor = Cursor::default();

        tracing::debug!(
            args = self.args.len(),
            options = self.options.len(),
            positionals = self.positionals.len(),
            "dispatching arguments"
        );

        while let Some(token) = self.args.get(cursor.arg) {
            let next = self.args.get(cursor.arg + 1);

            let Some(binding) = self.options.lookup(token) else {
                match self.positionals.get_mut(cursor.positional) {
                    Some(handler) => {
                        tracing::trace!(token = %token, slot = cursor.positional, "positional");
                        handler(token.as_str())?;
                        cursor.positional += 1;
                    }
                    None => {
                        tracing::debug!(token = %token, "no positional handler left, dropping");
                    }
                }
                cursor.arg += 1;
                continue;
            };

            tracing::trace!(token = %token, kind = %binding.kind, "option");

            // The following argument is taken unconditionally, option or not.
            match next.filter(|_| binding.kind.takes_value()) {
                Some(value) => {
                    self.options.invoke(binding.handler, value)?;
                    cursor.arg += 2;
                }
                None if binding.kind == ArgKind::RequiredArgument => {
                    return Err(ParseError::argument_required(token.as_str()));
                }
                None => {
                    self.options.invoke(binding.handler, "")?;
                    cursor.arg += 1;
                }
            }
        }

        tracing::debug!(positionals_used = cursor.positional, "dispatch complete");
        Ok(())
    }
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("args", &self.args)
            .field("options", &self.options)
            .field("positionals", &self.positionals.len())
            .finish()
    }
}

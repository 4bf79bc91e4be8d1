//! Callback-driven command-line argument dispatch.
//!
//! `optdispatch` scans the process arguments once and hands each one to a
//! caller-supplied handler: registered option tokens go to their option
//! handler, everything else goes to the next positional handler.
//!
//! # Quick Start
//!
//! ```rust
//! use optdispatch::{ArgKind, Parser};
//!
//! let mut parser = Parser::new(["prog", "-t", "8", "input.txt"])
//!     .register_option(["-t", "--threads"], ArgKind::RequiredArgument, |v| {
//!         println!("t = {v}");
//!     })
//!     .register_option(["-v"], ArgKind::NoArgument, |_| println!("-v"))
//!     .register_positional(|v| println!("POS 1 = {v}"));
//!
//! parser.run()?;
//! # Ok::<(), optdispatch::ParseError>(())
//! ```
//!
//! # Option Kinds
//!
//! | Kind | Followed by a value | Last argument |
//! |------|---------------------|---------------|
//! | [`ArgKind::NoArgument`] | value is not consumed, handler gets `""` | handler gets `""` |
//! | [`ArgKind::RequiredArgument`] | handler gets the value | [`ParseError::ArgumentRequired`] |
//! | [`ArgKind::OptionalArgument`] | handler gets the value | handler gets `""` |
//!
//! # What It Does Not Do
//!
//! There is no help output, no `-abc` clustering, no `--opt=value` syntax and
//! no unknown-option detection: an unregistered token is positional text.
//! Tokens left over once every positional handler has run are dropped.
//!
//! # Logging
//!
//! Dispatch emits [`tracing`] events at `debug` and `trace` level. Install a
//! subscriber in the embedding program to see them.

mod error;
mod handler;
mod parser;
mod registry;

pub use error::{ParseError, Result};
pub use handler::{BoxedHandler, HandlerResult, IntoHandlerResult};
pub use parser::Parser;
pub use registry::ArgKind;

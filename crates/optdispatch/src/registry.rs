//! Option registry.
//!
//! Maps option tokens to the handler and [`ArgKind`] they were registered
//! with. A handler registered under several tokens (`-t`, `--threads`) is
//! stored once and shared by all of them.

use std::collections::HashMap;
use std::fmt;

use crate::handler::{BoxedHandler, HandlerResult};

/// How many values an option consumes from the arguments that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// The option takes no value. Its handler receives `""`.
    NoArgument,
    /// The option always consumes the next argument as its value.
    /// It is an error for the option to be the last argument.
    RequiredArgument,
    /// The option consumes the next argument if there is one, otherwise its
    /// handler receives `""`.
    OptionalArgument,
}

impl ArgKind {
    /// Returns true if the option may consume the following argument.
    pub fn takes_value(self) -> bool {
        !matches!(self, ArgKind::NoArgument)
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::NoArgument => write!(f, "no argument"),
            ArgKind::RequiredArgument => write!(f, "required argument"),
            ArgKind::OptionalArgument => write!(f, "optional argument"),
        }
    }
}

/// Index of a handler inside an [`OptionRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HandlerId(usize);

/// What a single option token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Binding {
    pub kind: ArgKind,
    pub handler: HandlerId,
}

/// Token to handler mapping.
///
/// Re-binding a token replaces its previous binding; the last registration
/// wins. Handlers that lose all their tokens stay stored but are never
/// invoked.
pub(crate) struct OptionRegistry<'a> {
    bindings: HashMap<String, Binding>,
    handlers: Vec<BoxedHandler<'a>>,
}

impl<'a> OptionRegistry<'a> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            handlers: Vec::new(),
        }
    }

    /// Binds every token to `handler` with the given kind.
    pub fn bind<I, S>(&mut self, tokens: I, kind: ArgKind, handler: BoxedHandler<'a>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = HandlerId(self.handlers.len());
        self.handlers.push(handler);

        for token in tokens {
            let token = token.into();
            let binding = Binding { kind, handler: id };
            if let Some(previous) = self.bindings.insert(token.clone(), binding) {
                tracing::debug!(
                    token = %token,
                    previous_kind = %previous.kind,
                    kind = %kind,
                    "option re-registered, replacing previous binding"
                );
            }
        }
    }

    pub fn lookup(&self, token: &str) -> Option<Binding> {
        self.bindings.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.bindings.contains_key(token)
    }

    /// Number of distinct option tokens.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn invoke(&mut self, id: HandlerId, value: &str) -> HandlerResult {
        (self.handlers[id.0])(value)
    }
}

impl fmt::Debug for OptionRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("bindings", &self.bindings)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

//! User-invokable commands and the registry binding their identifiers.

use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// The explicit Tab-like indent trigger.
    FibonacciIndent,
}

impl Command {
    /// Stable identifier the host binds keystrokes to.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FibonacciIndent => "fibindent.indent",
        }
    }
}

/// Identifier -> command bindings. Registered on activation, deregistered on
/// shutdown.
#[derive(Default)]
pub struct CommandRegistry {
    bindings: FxHashMap<&'static str, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        debug!(command = command.name(), "command registered");
        self.bindings.insert(command.name(), command);
    }

    pub fn deregister(&mut self, command: Command) -> bool {
        let removed = self.bindings.remove(command.name()).is_some();
        if removed {
            debug!(command = command.name(), "command deregistered");
        }
        removed
    }

    pub fn resolve(&self, name: &str) -> Option<Command> {
        self.bindings.get(name).copied()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

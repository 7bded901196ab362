//! # Command Stack
//!
//! The ordered list of serialized EPL2 commands that make up one label.
//! Insertion order is output order. Commands are plain strings: once pushed
//! they no longer depend on the cursor that produced them.

use tracing::trace;

/// Append-only list of command lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandStack {
    commands: Vec<String>,
}

impl CommandStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append one command line.
    pub fn push(&mut self, command: impl Into<String>) {
        let command = command.into();
        trace!(%command, "append");
        self.commands.push(command);
    }

    /// Drop every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Most recently appended command.
    pub fn last(&self) -> Option<&str> {
        self.commands.last().map(String::as_str)
    }

    /// Iterate over commands in output order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }
}

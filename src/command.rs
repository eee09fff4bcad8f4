use std::io::Write;

use anyhow::Result;

use crate::desk::Desk;
use crate::input::LineReader;

/// One line of the numbered menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    /// The number the operator types to select the action.
    pub choice: u8,
    /// Human-readable label shown on the menu line.
    pub label: &'static str,
}

/// Object-safe trait for any action the console can run against the desk.
///
/// Implemented for all menu actions via a blanket impl in the actions
/// module; failures are rendered as status lines there, so an executed
/// action only returns an error when its output stream does.
pub trait ExecutableAction {
    /// Executes the action, writing status lines to `output`.
    fn execute(self: Box<Self>, output: &mut dyn Write, desk: &mut Desk) -> Result<()>;
}

/// Factory that tries to create an action for a chosen menu number.
///
/// Returns `None` when the factory doesn't own `choice`. Creation prompts
/// the operator for whatever fields the action needs, which is why it can
/// fail — a failed prompt (or closed input) aborts the action before it
/// touches the desk.
pub trait ActionFactory {
    /// The menu line this factory answers to.
    fn entry(&self) -> MenuEntry;

    /// Attempt to create an action for `choice`, prompting for its fields.
    fn try_create(
        &self,
        choice: u8,
        input: &mut dyn LineReader,
    ) -> Option<Result<Box<dyn ExecutableAction>>>;
}

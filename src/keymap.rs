//! Keyboard input and its mapping onto calculator actions.

use crate::calculator::{Action, Operation};
use crate::config::{BackspaceBehavior, KeysConfig};

/// Terminal-agnostic keyboard input.
///
/// Keeps the application free of crossterm types so it can be driven from
/// tests and the headless replay mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    Enter,
    Backspace,
    Delete,
    Esc,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Feed an action to the calculator.
    Calculator(Action),
    /// Copy the current operand to the clipboard.
    Copy,
    /// Leave the application.
    Quit,
}

/// Maps keys to commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMap {
    backspace: BackspaceBehavior,
}

impl KeyMap {
    pub fn new(config: &KeysConfig) -> Self {
        Self {
            backspace: config.backspace,
        }
    }

    /// Resolve a key. Returns `None` for keys with no binding.
    pub fn resolve(&self, key: KeyInput) -> Option<KeyCommand> {
        match key {
            KeyInput::Char(c) => Self::resolve_char(c),
            KeyInput::Enter => Some(KeyCommand::Calculator(Action::Evaluate)),
            KeyInput::Backspace => Some(KeyCommand::Calculator(match self.backspace {
                BackspaceBehavior::Delete => Action::DeleteDigit,
                BackspaceBehavior::Clear => Action::Clear,
            })),
            KeyInput::Delete => Some(KeyCommand::Calculator(Action::Clear)),
            KeyInput::Esc => Some(KeyCommand::Quit),
        }
    }

    /// Resolve a key to a calculator action, ignoring shell commands.
    pub fn action(&self, key: KeyInput) -> Option<Action> {
        match self.resolve(key)? {
            KeyCommand::Calculator(action) => Some(action),
            KeyCommand::Copy | KeyCommand::Quit => None,
        }
    }

    fn resolve_char(c: char) -> Option<KeyCommand> {
        let action = match c {
            '0'..='9' | '.' => Action::AddDigit(c),
            '=' => Action::Evaluate,
            'y' => return Some(KeyCommand::Copy),
            'q' => return Some(KeyCommand::Quit),
            _ => Action::ChooseOperation(Operation::from_symbol(c)?),
        };
        Some(KeyCommand::Calculator(action))
    }
}

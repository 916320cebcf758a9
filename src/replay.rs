//! Headless key replay.
//!
//! Runs a string of key characters through the key map and the calculator
//! without a terminal, for scripting and quick checks from the shell.

use crate::calculator::CalculatorState;
use crate::keymap::{KeyInput, KeyMap};

/// Replay `keys` from the empty state.
///
/// Characters with no calculator binding are skipped. Control characters
/// stand in for the non-printing keys: newline is Enter, backspace (`\x08`)
/// and DEL (`\x7f`) are Backspace, cancel (`\x18`) is Delete.
pub fn replay(keys: &str, keymap: &KeyMap) -> CalculatorState {
    keys.chars()
        .map(|c| match c {
            '\n' | '\r' => KeyInput::Enter,
            '\x08' | '\x7f' => KeyInput::Backspace,
            '\x18' => KeyInput::Delete,
            c => KeyInput::Char(c),
        })
        .fold(CalculatorState::default(), |state, key| {
            match keymap.action(key) {
                Some(action) => state.apply(action),
                None => {
                    tracing::debug!(?key, "skipping unbound key");
                    state
                }
            }
        })
}

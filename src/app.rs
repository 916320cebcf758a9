//! Application state machine.
//!
//! [`App`] owns the calculator state and everything the shell needs around
//! it, but performs no I/O. Key presses and button clicks go in, and
//! [`AppAction`]s come out for the driver to execute.

use crate::calculator::{Action, CalculatorState, format_operand_with};
use crate::config::Config;
use crate::keymap::{KeyCommand, KeyInput, KeyMap};
use crate::keypad::Button;

/// Side effects requested by the [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the UI.
    Render,
    /// Quit the application.
    Quit,
    /// Put text on the system clipboard.
    CopyToClipboard(String),
}

/// The two formatted display lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Display {
    /// Previous operand followed by the pending operator.
    pub previous: String,
    /// Operand being typed, or the last result.
    pub current: String,
}

impl Display {
    /// Render a state with the given thousands separator.
    pub fn of(state: &CalculatorState, separator: char) -> Self {
        let previous = format_operand_with(state.previous_operand.as_deref(), separator);
        let operator = state.operation.map(|op| op.symbol());

        let previous = match (previous, operator) {
            (Some(prev), Some(op)) if !prev.is_empty() => format!("{} {}", prev, op),
            // A blank left operand (failed evaluation) shows just the operator.
            (_, Some(op)) => op.to_string(),
            (Some(prev), None) => prev,
            (None, None) => String::new(),
        };

        Self {
            previous,
            current: format_operand_with(state.current_operand.as_deref(), separator)
                .unwrap_or_default(),
        }
    }
}

/// Application state machine.
#[derive(Debug, Clone)]
pub struct App {
    state: CalculatorState,
    keymap: KeyMap,
    separator: char,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: CalculatorState::default(),
            keymap: KeyMap::new(&config.keys),
            separator: config.display.thousands_separator,
            status_message: None,
        }
    }

    /// Apply a calculator action.
    pub fn dispatch(&mut self, action: Action) -> Vec<AppAction> {
        let next = self.state.clone().apply(action);
        if next == self.state {
            tracing::trace!(?action, "ignored");
        } else {
            tracing::debug!(?action, state = ?next, "transition");
        }
        self.state = next;
        self.status_message = None;
        vec![AppAction::Render]
    }

    /// Process a key press.
    pub fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.keymap.resolve(key) {
            Some(KeyCommand::Calculator(action)) => self.dispatch(action),
            Some(KeyCommand::Copy) => self.copy(),
            Some(KeyCommand::Quit) => vec![AppAction::Quit],
            None => vec![],
        }
    }

    /// Process a keypad click.
    pub fn press(&mut self, button: &Button) -> Vec<AppAction> {
        tracing::trace!(label = button.label, "button pressed");
        self.dispatch(button.action)
    }

    /// Ask for the raw current operand to be copied.
    pub fn copy(&mut self) -> Vec<AppAction> {
        match self.state.current_operand.as_deref() {
            Some(text) if !text.is_empty() => {
                vec![AppAction::CopyToClipboard(text.to_string()), AppAction::Render]
            }
            _ => {
                self.status_message = Some("Nothing to copy".to_string());
                vec![AppAction::Render]
            }
        }
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> Display {
        Display::of(&self.state, self.separator)
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use crate::config::BackspaceBehavior;
    use crate::keypad::BUTTONS;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyInput::Char(c));
        }
    }

    #[test]
    fn test_display_running_computation() {
        let mut app = app();
        type_keys(&mut app, "1234+56");
        assert_eq!(
            app.display(),
            Display {
                previous: "1,234 +".into(),
                current: "56".into(),
            }
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(app().display(), Display::default());
    }

    #[test]
    fn test_display_custom_separator() {
        let mut config = Config::default();
        config.display.thousands_separator = '.';
        let mut app = App::new(&config);
        type_keys(&mut app, "1000000");
        assert_eq!(app.display().current, "1.000.000");
    }

    #[test]
    fn test_evaluate_with_enter() {
        let mut app = app();
        type_keys(&mut app, "999*2");
        assert_eq!(app.handle_key(KeyInput::Enter), vec![AppAction::Render]);
        assert_eq!(app.display().current, "1,998");
        assert_eq!(app.display().previous, "");
        assert!(app.state().overwrite);
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut app = app();
        type_keys(&mut app, "12");
        let before = app.state().clone();
        assert!(app.handle_key(KeyInput::Char('z')).is_empty());
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_backspace_legacy_clear() {
        let mut config = Config::default();
        config.keys.backspace = BackspaceBehavior::Clear;
        let mut app = App::new(&config);
        type_keys(&mut app, "12+3");
        app.handle_key(KeyInput::Backspace);
        assert!(app.state().is_empty());
    }

    #[test]
    fn test_press_buttons() {
        let mut app = app();
        let find = |label: &str| BUTTONS.iter().find(|b| b.label == label).unwrap();
        for label in ["7", "×", "6", "="] {
            app.press(find(label));
        }
        assert_eq!(app.state().current_operand.as_deref(), Some("42"));
        app.press(find("AC"));
        assert!(app.state().is_empty());
    }

    #[test]
    fn test_copy_raw_operand() {
        let mut app = app();
        type_keys(&mut app, "12345");
        assert_eq!(
            app.handle_key(KeyInput::Char('y')),
            vec![AppAction::CopyToClipboard("12345".into()), AppAction::Render]
        );
    }

    #[test]
    fn test_copy_nothing() {
        let mut app = app();
        assert_eq!(app.copy(), vec![AppAction::Render]);
        assert_eq!(app.status_message(), Some("Nothing to copy"));

        app.dispatch(Action::AddDigit('1'));
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().handle_key(KeyInput::Esc), vec![AppAction::Quit]);
    }

    #[test]
    fn test_blank_operand_has_no_leading_space() {
        let mut app = app();
        type_keys(&mut app, ".+5=+");
        assert_eq!(app.state().previous_operand.as_deref(), Some(""));
        assert_eq!(app.display().previous, "+");
    }

    #[test]
    fn test_operator_only_display() {
        let state = CalculatorState {
            operation: Some(Operation::Add),
            ..Default::default()
        };
        assert_eq!(Display::of(&state, ',').previous, "+");
    }
}

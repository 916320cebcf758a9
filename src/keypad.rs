//! The on-screen keypad.
//!
//! A fixed four-column grid. Wide buttons span two columns.

use crate::calculator::{Action, Operation};

/// Number of columns in the keypad grid.
pub const COLUMNS: u16 = 4;

/// A clickable keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    /// Text drawn on the button.
    pub label: &'static str,
    /// Action dispatched when pressed.
    pub action: Action,
    /// Grid row.
    pub row: u16,
    /// First grid column.
    pub column: u16,
    /// Number of columns covered.
    pub span: u16,
}

impl Button {
    const fn new(label: &'static str, action: Action, row: u16, column: u16, span: u16) -> Self {
        Self {
            label,
            action,
            row,
            column,
            span,
        }
    }

    const fn digit(digit: char, label: &'static str, row: u16, column: u16) -> Self {
        Self::new(label, Action::AddDigit(digit), row, column, 1)
    }

    const fn op(op: Operation, label: &'static str, row: u16) -> Self {
        Self::new(label, Action::ChooseOperation(op), row, COLUMNS - 1, 1)
    }
}

/// Every keypad button, row by row.
pub const BUTTONS: &[Button] = &[
    Button::new("AC", Action::Clear, 0, 0, 2),
    Button::new("DEL", Action::DeleteDigit, 0, 2, 1),
    Button::op(Operation::Divide, "÷", 0),
    Button::digit('7', "7", 1, 0),
    Button::digit('8', "8", 1, 1),
    Button::digit('9', "9", 1, 2),
    Button::op(Operation::Multiply, "×", 1),
    Button::digit('4', "4", 2, 0),
    Button::digit('5', "5", 2, 1),
    Button::digit('6', "6", 2, 2),
    Button::op(Operation::Add, "+", 2),
    Button::digit('1', "1", 3, 0),
    Button::digit('2', "2", 3, 1),
    Button::digit('3', "3", 3, 2),
    Button::op(Operation::Subtract, "-", 3),
    Button::digit('0', "0", 4, 0),
    Button::digit('.', ".", 4, 1),
    Button::new("=", Action::Evaluate, 4, 2, 2),
];

/// Number of rows in the keypad grid.
pub fn rows() -> u16 {
    BUTTONS.iter().map(|b| b.row + 1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_covered_once() {
        for row in 0..rows() {
            for column in 0..COLUMNS {
                let count = BUTTONS
                    .iter()
                    .filter(|b| b.row == row && (b.column..b.column + b.span).contains(&column))
                    .count();
                assert_eq!(count, 1, "cell ({row}, {column})");
            }
        }
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(rows(), 5);
        assert!(BUTTONS.iter().all(|b| b.column + b.span <= COLUMNS));
    }

    #[test]
    fn test_all_digits_present() {
        for digit in "0123456789.".chars() {
            assert!(
                BUTTONS.iter().any(|b| b.action == Action::AddDigit(digit)),
                "{digit}"
            );
        }
        let operations = BUTTONS
            .iter()
            .filter(|b| matches!(b.action, Action::ChooseOperation(_)))
            .count();
        assert_eq!(operations, 4);
    }
}

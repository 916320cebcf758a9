//! Calculator state snapshot and the actions that drive it.

use serde::Serialize;

/// One of the four supported binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// Parse an operator symbol. Returns `None` for anything but `+ - * /`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The ASCII symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Input to the calculator state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Append a digit (`0-9`) or the decimal point.
    AddDigit(char),
    /// Select the pending operator, evaluating any complete pair first.
    ChooseOperation(Operation),
    /// Evaluate the pending pair.
    Evaluate,
    /// Remove the last typed character.
    DeleteDigit,
    /// Reset to the empty state.
    Clear,
}

/// Snapshot of everything the calculator knows.
///
/// Replaced wholesale on every transition; see [`super::transition`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    /// Operand being typed (right-hand side).
    pub current_operand: Option<String>,
    /// Left-hand operand, set once an operator has been chosen.
    pub previous_operand: Option<String>,
    /// Pending operator.
    pub operation: Option<Operation>,
    /// The next digit replaces `current_operand` instead of extending it.
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, consuming this snapshot.
    pub fn apply(self, action: Action) -> Self {
        super::transition(&self, action)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

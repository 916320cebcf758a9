//! The calculator reducer.
//!
//! [`transition`] is pure: it reads one snapshot and returns the next. Input
//! that makes no sense in the current state (a second decimal point, an
//! operator with nothing to operate on, `=` with a missing operand) returns
//! the snapshot unchanged.

use super::evaluation::evaluate;
use super::state::{Action, CalculatorState, Operation};

/// Compute the state that follows `state` after `action`.
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Evaluate => evaluate_pending(state),
        Action::DeleteDigit => delete_digit(state),
        Action::Clear => CalculatorState::default(),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !(digit.is_ascii_digit() || digit == '.') {
        return state.clone();
    }

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");
    if digit == '0' && current == "0" {
        return state.clone();
    }
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    let mut next = String::with_capacity(current.len() + 1);
    next.push_str(current);
    next.push(digit);

    CalculatorState {
        current_operand: Some(next),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),
        // Operand already moved left; just swap the operator.
        (None, Some(_)) => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            current_operand: None,
            operation: Some(op),
            ..state.clone()
        },
        (Some(current), Some(previous)) => {
            // A pair is complete; fold it before taking the new operator.
            CalculatorState {
                previous_operand: Some(evaluate(previous, current, state.operation)),
                current_operand: None,
                operation: Some(op),
                ..state.clone()
            }
        }
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(op), Some(current), Some(previous)) = (
        state.operation,
        state.current_operand.as_deref(),
        state.previous_operand.as_deref(),
    ) else {
        return state.clone();
    };

    CalculatorState {
        current_operand: Some(evaluate(previous, current, Some(op))),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand.as_deref() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

//! Calculator core.
//!
//! This module provides:
//! - The [`CalculatorState`] snapshot and the [`Action`]s that drive it
//! - The pure [`transition`] reducer
//! - Evaluation of a pending operand pair
//! - Display formatting with thousand separators
//! - Copying results to the clipboard

mod clipboard;
mod evaluation;
mod format;
mod state;
mod transition;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::evaluate;
pub use format::{DEFAULT_SEPARATOR, format_operand, format_operand_with};
pub use state::{Action, CalculatorState, Operation};
pub use transition::transition;

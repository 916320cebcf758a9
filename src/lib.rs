//! A keyboard and mouse driven terminal calculator.
//!
//! The calculator itself is a pure reducer in [`calculator`]. [`App`] wraps
//! it with key bindings and a status line, [`terminal`] drives it from a real
//! terminal and [`replay`] drives it from a string of keys.

pub mod app;
pub mod calculator;
pub mod config;
pub mod keymap;
pub mod keypad;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, AppAction, Display};
pub use config::Config;
pub use keymap::{KeyCommand, KeyInput, KeyMap};
pub use replay::replay;
pub use terminal::{TerminalDriver, TerminalError};

//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] for real terminals (styled status lines, spinners, prompts)
//! - [`Table`] for column-aligned listings
//!
//! # Example
//!
//! ```
//! use deckicons::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("<svg/>");
//! ui.success("Fetched 1 icon");
//!
//! assert_eq!(ui.outputs(), &["<svg/>".to_string()]);
//! assert!(ui.has_success("Fetched"));
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DeckTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Primary command output (markup, listings). Printed in every mode.
    fn output(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive sessions get `default`.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Start a spinner for a network operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Clear the spinner without a final line.
    fn finish_clear(&mut self);
}

//! Terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{IconError, Result};

use super::{DeckTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// Terminal UI: command output on stdout, status on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DeckTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, interactive: bool) -> Self {
        let err = Term::stderr();
        Self {
            interactive: interactive && err.is_term(),
            out: Term::stdout(),
            err,
            theme: DeckTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.err)
            .map_err(|e| IconError::Io(e.into()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() && self.err.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Create the UI for a CLI invocation.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, interactive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn non_interactive_confirm_uses_default() {
        let mut ui = TerminalUI::new(OutputMode::Normal, false);
        assert!(!ui.is_interactive());
        assert!(ui.confirm("Clear cache?", true).unwrap());
        assert!(!ui.confirm("Clear cache?", false).unwrap());
    }
}

//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status messages and spinners.
    #[default]
    Normal,
    /// Warnings and errors only, no spinners.
    Quiet,
    /// Errors only.
    Silent,
}

impl OutputMode {
    /// Pick a mode from the `--quiet` / `--silent` flags.
    pub fn from_flags(quiet: bool, silent: bool) -> Self {
        if silent {
            Self::Silent
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows status and success messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows warnings.
    pub fn shows_warnings(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`AppContext`] for the registry and engine settings commands share
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::config::EngineConfig;
use crate::error::{IconError, Result};
use crate::registry::Registry;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Success when `failures` is zero, exit code 1 otherwise.
    pub fn from_failures(failures: usize) -> Self {
        if failures == 0 {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Global flags that override engine settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub fetched_dir: Option<PathBuf>,
    pub icon_api: Option<String>,
    pub search_api: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Overrides {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            fetched_dir: cli.fetched_dir.clone(),
            icon_api: cli.icon_api.clone(),
            search_api: cli.search_api.clone(),
            timeout_ms: cli.timeout,
        }
    }

    /// Apply on top of an already layered config. Relative paths resolve
    /// against `working_dir`.
    fn apply(&self, mut config: EngineConfig, working_dir: &Path) -> EngineConfig {
        if let Some(dir) = &self.fetched_dir {
            config.fetched_dir = Some(working_dir.join(dir));
        }
        if let Some(url) = &self.icon_api {
            config.icon_api_url = url.clone();
        }
        if let Some(url) = &self.search_api {
            config.search_api_url = url.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config.fetch_timeout = Duration::from_millis(ms);
            config.search_timeout = Duration::from_millis(ms);
        }
        config
    }
}

/// Registry and settings for one invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub registry: Registry,
    pub config: EngineConfig,
}

impl AppContext {
    /// Load the registry and layer settings: defaults, registry `settings:`,
    /// `DECKICONS_*` environment, then CLI flags.
    ///
    /// With `require_registry` unset, a missing registry file yields an empty
    /// registry; parse and validation errors are still fatal.
    pub fn load(
        registry_path: &Path,
        working_dir: &Path,
        overrides: &Overrides,
        require_registry: bool,
    ) -> Result<Self> {
        let registry = match Registry::load(registry_path) {
            Ok(registry) => registry,
            Err(IconError::ConfigNotFound { path }) if !require_registry => {
                tracing::debug!("No registry at {:?}, continuing without one", path);
                Registry::default()
            }
            Err(e) => return Err(e),
        };

        let base_dir = registry.base_dir().unwrap_or(working_dir).to_path_buf();
        let config = EngineConfig::default()
            .with_settings(registry.settings(), &base_dir)?
            .with_env()?;
        let config = overrides.apply(config, working_dir);

        Ok(Self { registry, config })
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher; relative paths on the command line resolve
    /// against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn context(&self, cli: &Cli, require_registry: bool) -> Result<AppContext> {
        AppContext::load(
            &self.working_dir.join(&cli.registry),
            &self.working_dir,
            &Overrides::from_cli(cli),
            require_registry,
        )
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(self.context(cli, true)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Fetch(args) => {
                let cmd = super::fetch::FetchCommand::new(self.context(cli, false)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Search(args) => {
                let cmd =
                    super::search::SearchCommand::new(self.context(cli, false)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Collections(args) => {
                let cmd = super::collections::CollectionsCommand::new(
                    self.context(cli, false)?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Sources(args) => {
                let cmd =
                    super::sources::SourcesCommand::new(self.context(cli, true)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Provenance(args) => {
                let cmd = super::provenance::ProvenanceCommand::new(
                    self.context(cli, false)?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Cache(args) => {
                let cmd = super::cache::CacheCommand::new(self.context(cli, false)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_REGISTRY_FILE;

use super::commands::cache::CacheArgs;

/// deckicons - Resolve icon references into slide-ready markup.
#[derive(Debug, Parser)]
#[command(name = "deckicons")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the icon registry file
    #[arg(
        short,
        long,
        global = true,
        env = "DECKICONS_REGISTRY",
        default_value = DEFAULT_REGISTRY_FILE
    )]
    pub registry: PathBuf,

    /// Directory of fetched icons (overrides settings.fetched_dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub fetched_dir: Option<PathBuf>,

    /// Base URL of the icon API
    #[arg(long, global = true, value_name = "URL")]
    pub icon_api: Option<String>,

    /// Base URL of the search API
    #[arg(long, global = true, value_name = "URL")]
    pub search_api: Option<String>,

    /// Network timeout in milliseconds (fetch and search)
    #[arg(long, global = true, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Errors only
    #[arg(long, global = true)]
    pub silent: bool,

    /// Never prompt
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render icons to markup
    Render(RenderArgs),

    /// Download icons into the fetched-icon directory
    Fetch(FetchArgs),

    /// Search the icon API
    Search(SearchArgs),

    /// List icon collections available from the API
    Collections(CollectionsArgs),

    /// List sources in the registry
    Sources(SourcesArgs),

    /// Show where fetched icons came from
    Provenance(ProvenanceArgs),

    /// Manage the search cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Icon references or aliases (e.g. `mdi:home`, `ok`)
    #[arg(required = true, value_name = "ICON")]
    pub icons: Vec<String>,

    /// Icon size (e.g. 24px, 1.5em)
    #[arg(long)]
    pub size: Option<String>,

    /// Color or palette name
    #[arg(long)]
    pub color: Option<String>,

    /// Extra CSS class
    #[arg(long)]
    pub class: Option<String>,

    /// Emit palette colors as CSS variables
    #[arg(long)]
    pub theme_colors: bool,

    /// Fetch missing icons before rendering
    #[arg(long)]
    pub warm: bool,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FetchArgs {
    /// Icon references or aliases
    #[arg(required = true, value_name = "ICON")]
    pub icons: Vec<String>,

    /// Download again even if already fetched
    #[arg(short, long)]
    pub force: bool,

    /// Print the SVG instead of saving it
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Search keywords
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = crate::search::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Restrict to collections (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub prefixes: Vec<String>,

    /// Result offset
    #[arg(long, default_value_t = 0)]
    pub start: u32,

    /// Bypass the search cache
    #[arg(long)]
    pub no_cache: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `collections` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CollectionsArgs {
    /// Bypass the search cache
    #[arg(long)]
    pub no_cache: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `sources` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourcesArgs {
    /// Also list aliases and palette colors
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the `provenance` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProvenanceArgs {
    /// Only show entries whose key contains this text
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn about_comes_from_doc_comment() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert!(about.unwrap_or_default().contains("slide-ready markup"));
    }

    #[test]
    fn parses_render_with_options() {
        let cli = Cli::try_parse_from([
            "deckicons", "render", "ok", "mdi:home", "--size", "2em", "--color", "primary",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.icons, vec!["ok", "mdi:home"]);
                assert_eq!(args.size.as_deref(), Some("2em"));
                assert_eq!(args.color.as_deref(), Some("primary"));
                assert!(!args.theme_colors);
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn render_requires_an_icon() {
        assert!(Cli::try_parse_from(["deckicons", "render"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "deckicons",
            "fetch",
            "health:stethoscope",
            "--fetched-dir",
            "assets/fetched",
            "--timeout",
            "2500",
        ])
        .unwrap();

        assert_eq!(cli.fetched_dir, Some(PathBuf::from("assets/fetched")));
        assert_eq!(cli.timeout, Some(2500));
    }

    #[test]
    fn search_prefixes_are_comma_separated() {
        let cli =
            Cli::try_parse_from(["deckicons", "search", "heart", "-p", "mdi,lucide"]).unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.prefixes, vec!["mdi", "lucide"]);
                assert_eq!(args.limit, crate::search::DEFAULT_LIMIT);
            }
            other => panic!("expected search, got {:?}", other),
        }
    }
}

//! Command-line interface for deckicons.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CollectionsArgs, CompletionsArgs, FetchArgs, ProvenanceArgs, RenderArgs,
    SearchArgs, SourcesArgs,
};
pub use commands::{AppContext, Command, CommandDispatcher, CommandResult};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! registry and engine settings once into an [`AppContext`] and routes the
//! subcommand to its implementation. Markup and data go to stdout through
//! [`UserInterface::output`](crate::ui::UserInterface::output); status goes
//! to stderr.

pub mod cache;
pub mod collections;
pub mod completions;
pub mod dispatcher;
pub mod fetch;
pub mod provenance;
pub mod render;
pub mod search;
pub mod sources;

pub use dispatcher::{AppContext, Command, CommandDispatcher, CommandResult, Overrides};

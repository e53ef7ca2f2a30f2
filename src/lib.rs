//! deckicons - Resolve icon references into slide-ready markup.
//!
//! A YAML registry declares icon sources (web fonts, inline SVG, SVG
//! sprites, local SVG directories) under short prefixes, plus aliases and a
//! named color palette. References such as `mi:home`, `health:stethoscope`
//! or an alias like `ok` are resolved against it and rendered to HTML/SVG.
//! Missing icons can be fetched from an Iconify-compatible API into a local
//! mirror with a provenance ledger; search results are kept in a TTL cache.
//!
//! # Modules
//!
//! - [`cache`] - TTL cache and the fetched-icon store
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Registry file parsing and engine settings
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Downloading icons and recording provenance
//! - [`registry`] - The loaded registry: sources, aliases, colors
//! - [`render`] - Per-source-type renderers and style resolution
//! - [`resolver`] - Reference resolution and batch rendering
//! - [`search`] - Icon search and collection listing
//! - [`ui`] - Spinners, prompts, and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use deckicons::config::EngineConfig;
//! use deckicons::registry::Registry;
//! use deckicons::render::RenderOptions;
//! use deckicons::resolver::IconResolver;
//!
//! let yaml = "sources:\n  - { name: Material Icons, type: web-font, prefix: mi }\n";
//! let registry = Registry::from_yaml(yaml, Path::new(".")).unwrap();
//! let resolver = IconResolver::new(registry, EngineConfig::default()).unwrap();
//!
//! let html = resolver.render("mi:home", &RenderOptions::new()).unwrap();
//! assert!(html.contains(">home</span>"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod search;
pub mod ui;

pub use error::{IconError, Result};

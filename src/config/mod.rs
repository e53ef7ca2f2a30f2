//! Registry file schema, loading, and engine settings.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Layered engine settings in [`settings`]
//!
//! Validation of the parsed file (unique prefixes, known source types)
//! lives in [`crate::registry`], which turns a [`RegistryFile`] into an
//! immutable [`Registry`](crate::registry::Registry).

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{base_dir_of, load_registry_file, parse_registry, DEFAULT_REGISTRY_FILE};
pub use schema::{DefaultsConfig, RegistryFile, SettingsConfig, SourceConfig};
pub use settings::{
    EngineConfig, DEFAULT_API_URL, DEFAULT_FETCH_TIMEOUT, DEFAULT_SEARCH_TTL,
};

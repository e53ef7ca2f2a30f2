//! The `cache` command.
//!
//! Provides `deckicons cache stats`, `deckicons cache clear` and
//! `deckicons cache prune` over the search cache. Fetched icons are never
//! touched here.

use clap::{Args, Subcommand};

use crate::cache::{format_duration, TtlCache};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{AppContext, Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Show cache statistics.
    Stats,
    /// Remove every cached search response.
    Clear {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
    /// Remove expired and unreadable entries.
    Prune,
}

/// The cache command implementation.
pub struct CacheCommand {
    ctx: AppContext,
    args: CacheArgs,
}

impl CacheCommand {
    pub fn new(ctx: AppContext, args: CacheArgs) -> Self {
        Self { ctx, args }
    }

    fn cache(&self) -> TtlCache {
        TtlCache::new(&self.ctx.config.search_cache_dir, self.ctx.config.search_ttl)
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cache = self.cache();
        match &self.args.command {
            CacheSubcommand::Stats => show_stats(&cache, ui)?,
            CacheSubcommand::Clear { force } => clear_cache(&cache, *force, ui)?,
            CacheSubcommand::Prune => {
                let removed = cache.prune_expired()?;
                ui.success(&format!("Pruned {} expired entries", removed));
            }
        }
        Ok(CommandResult::success())
    }
}

fn show_stats(cache: &TtlCache, ui: &mut dyn UserInterface) -> Result<()> {
    let stats = cache.stats()?;

    ui.output(&format!("Location: {}", cache.root().display()));
    ui.output(&format!("TTL: {}", format_duration(cache.ttl_seconds())));
    ui.output(&format!("Entries: {}", stats.entries));
    ui.output(&format!("Fresh: {}", stats.entries - stats.expired));
    ui.output(&format!("Expired: {}", stats.expired));
    ui.output(&format!("Size: {} bytes", stats.total_bytes));
    Ok(())
}

fn clear_cache(cache: &TtlCache, force: bool, ui: &mut dyn UserInterface) -> Result<()> {
    let stats = cache.stats()?;
    if stats.entries == 0 {
        ui.message("Cache is already empty");
        return Ok(());
    }

    if !force && ui.is_interactive() {
        let question = format!("Clear {} cached entries?", stats.entries);
        if !ui.confirm(&question, false)? {
            ui.message("Cancelled");
            return Ok(());
        }
    }

    let cleared = cache.clear()?;
    ui.success(&format!("Cleared {} entries", cleared));
    Ok(())
}

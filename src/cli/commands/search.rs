//! The `search` command.

use anyhow::Context;

use crate::cache::TtlCache;
use crate::cli::args::SearchArgs;
use crate::error::Result;
use crate::search::{CachedSearch, SearchClient, SearchOptions, SearchResults};
use crate::ui::UserInterface;

use super::dispatcher::{AppContext, Command, CommandResult};

/// Searches the icon API, serving repeats from the search cache.
pub struct SearchCommand {
    ctx: AppContext,
    args: SearchArgs,
}

impl SearchCommand {
    pub fn new(ctx: AppContext, args: SearchArgs) -> Self {
        Self { ctx, args }
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.args.limit,
            prefixes: self.args.prefixes.clone(),
            start: self.args.start,
        }
    }

    fn run_search(&self, client: &SearchClient) -> Result<SearchResults> {
        let options = self.options();
        if self.args.no_cache {
            return client.search(&self.args.query, &options);
        }

        let cache = TtlCache::new(&self.ctx.config.search_cache_dir, self.ctx.config.search_ttl);
        CachedSearch::new(client, &cache).search(&self.args.query, &options)
    }
}

impl Command for SearchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = SearchClient::from_config(&self.ctx.config)?;

        let mut spinner = ui.start_spinner(&format!("Searching for '{}'...", self.args.query));
        let results = self.run_search(&client);
        spinner.finish_clear();
        let results = results?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if results.icons.is_empty() {
            ui.message(&format!("No icons match '{}'", self.args.query));
            return Ok(CommandResult::success());
        }

        for icon in &results.icons {
            ui.output(icon);
        }
        ui.message(&format!(
            "Showing {} of {} results",
            results.icons.len(),
            results.total
        ));
        Ok(CommandResult::success())
    }
}

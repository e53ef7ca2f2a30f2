//! The `collections` command.

use anyhow::Context;
use std::collections::BTreeMap;

use crate::cache::TtlCache;
use crate::cli::args::CollectionsArgs;
use crate::error::Result;
use crate::search::{CachedSearch, CollectionInfo, SearchClient};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{AppContext, Command, CommandResult};

/// Lists icon collections with their size and license.
pub struct CollectionsCommand {
    ctx: AppContext,
    args: CollectionsArgs,
}

impl CollectionsCommand {
    pub fn new(ctx: AppContext, args: CollectionsArgs) -> Self {
        Self { ctx, args }
    }

    fn load(&self, client: &SearchClient) -> Result<BTreeMap<String, CollectionInfo>> {
        if self.args.no_cache {
            return client.collections();
        }
        let cache = TtlCache::new(&self.ctx.config.search_cache_dir, self.ctx.config.search_ttl);
        CachedSearch::new(client, &cache).collections()
    }
}

impl Command for CollectionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = SearchClient::from_config(&self.ctx.config)?;

        let mut spinner = ui.start_spinner("Loading collections...");
        let collections = self.load(&client);
        spinner.finish_clear();
        let collections = collections?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&collections)
                .context("Failed to serialize collections")?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["PREFIX", "ICONS", "LICENSE", "NAME"]);
        for (prefix, info) in &collections {
            let total = info.total.map(|t| t.to_string()).unwrap_or_default();
            let license = info
                .license
                .as_ref()
                .map(|l| l.spdx.clone().unwrap_or_else(|| l.title.clone()))
                .unwrap_or_default();
            table.add_row(&[prefix.as_str(), total.as_str(), license.as_str(), info.name.as_str()]);
        }
        ui.output(&table.render());
        ui.message(&format!("{} collections", collections.len()));

        Ok(CommandResult::success())
    }
}

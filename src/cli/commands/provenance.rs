//! The `provenance` command.

use anyhow::Context;

use crate::cache::FetchedIconStore;
use crate::cli::args::ProvenanceArgs;
use crate::error::{IconError, Result};
use crate::fetch::ProvenanceLedger;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{AppContext, Command, CommandResult};

/// Prints the provenance ledger of the fetched-icon directory.
pub struct ProvenanceCommand {
    ctx: AppContext,
    args: ProvenanceArgs,
}

impl ProvenanceCommand {
    pub fn new(ctx: AppContext, args: ProvenanceArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ProvenanceCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = self.ctx.config.fetched_dir.as_ref().ok_or_else(|| {
            IconError::ConfigValidationError {
                message: "No fetched directory configured; pass --fetched-dir or set settings.fetched_dir"
                    .to_string(),
            }
        })?;

        let store = FetchedIconStore::new(dir);
        let mut records = ProvenanceLedger::new(store.ledger_path()).load()?;
        if let Some(filter) = &self.args.filter {
            records.retain(|key, _| key.contains(filter.as_str()));
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&records).context("Failed to serialize ledger")?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.message("No fetched icons recorded");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["KEY", "LICENSE", "FETCHED", "SOURCE"]);
        for (key, record) in &records {
            table.add_row(&[
                key.as_str(),
                record.license.as_str(),
                record.fetched_at.as_str(),
                record.source.as_str(),
            ]);
        }
        ui.output(&table.render());
        Ok(CommandResult::success())
    }
}

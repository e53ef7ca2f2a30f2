//! The `sources` command.

use crate::cli::args::SourcesArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{AppContext, Command, CommandResult};

/// Lists the registry's sources, and optionally its aliases and palette.
pub struct SourcesCommand {
    ctx: AppContext,
    args: SourcesArgs,
}

impl SourcesCommand {
    pub fn new(ctx: AppContext, args: SourcesArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for SourcesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = &self.ctx.registry;

        if registry.sources().is_empty() {
            ui.warning("Registry has no sources");
        } else {
            let mut table = Table::new(&["PREFIX", "TYPE", "NAME", "LOCATION"]);
            for source in registry.sources() {
                let location = match (&source.url, &source.path) {
                    (_, Some(path)) => path.display().to_string(),
                    (Some(url), None) => url.clone(),
                    (None, None) => String::new(),
                };
                table.add_row(&[
                    source.prefix.as_str(),
                    source.source_type.as_str(),
                    source.name.as_str(),
                    location.as_str(),
                ]);
            }
            ui.output(&table.render());
        }

        if self.args.all {
            if !registry.aliases().is_empty() {
                let mut table = Table::new(&["ALIAS", "TARGET"]);
                for (alias, target) in registry.aliases() {
                    table.add_row(&[alias, target]);
                }
                ui.output("");
                ui.output(&table.render());
            }
            if !registry.colors().is_empty() {
                let mut table = Table::new(&["COLOR", "VALUE"]);
                for (name, value) in registry.colors() {
                    table.add_row(&[name, value]);
                }
                ui.output("");
                ui.output(&table.render());
            }
        }

        Ok(CommandResult::success())
    }
}

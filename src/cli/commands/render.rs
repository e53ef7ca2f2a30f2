//! The `render` command.

use crate::cli::args::RenderArgs;
use crate::error::Result;
use crate::render::{ColorMode, RenderOptions};
use crate::resolver::IconResolver;
use crate::ui::UserInterface;

use super::dispatcher::{AppContext, Command, CommandResult};
use super::fetch::report_warm;

/// Renders each icon and prints its markup on its own line.
pub struct RenderCommand {
    ctx: AppContext,
    args: RenderArgs,
}

impl RenderCommand {
    pub fn new(ctx: AppContext, args: RenderArgs) -> Self {
        Self { ctx, args }
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            size: self.args.size.clone(),
            color: self.args.color.clone(),
            class: self.args.class.clone(),
            color_mode: self.args.theme_colors.then_some(ColorMode::ThemeVariable),
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolver = IconResolver::new(self.ctx.registry.clone(), self.ctx.config.clone())?;

        let mut failures = 0;
        if self.args.warm {
            let mut spinner = ui.start_spinner("Fetching missing icons...");
            let outcomes = resolver.warm(&self.args.icons)?;
            spinner.finish_clear();
            failures += report_warm(&outcomes, ui);
        }

        let results = resolver.render_many(&self.args.icons, &self.options());
        for (icon, result) in self.args.icons.iter().zip(results) {
            match result {
                Ok(markup) => ui.output(&markup),
                Err(e) => {
                    ui.error(&format!("{}: {}", icon, e));
                    failures += 1;
                }
            }
        }

        Ok(CommandResult::from_failures(failures))
    }
}

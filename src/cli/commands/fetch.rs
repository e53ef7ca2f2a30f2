//! The `fetch` command.

use crate::cli::args::FetchArgs;
use crate::error::{IconError, Result};
use crate::fetch::IconFetcher;
use crate::resolver::{WarmOutcome, WarmStatus};
use crate::ui::UserInterface;

use super::dispatcher::{AppContext, Command, CommandResult};

/// Downloads icons into the fetched-icon directory and records provenance.
///
/// Aliases from the registry are resolved first; any other `prefix:name`
/// is fetched as-is, whether or not the prefix is registered.
pub struct FetchCommand {
    ctx: AppContext,
    args: FetchArgs,
}

impl FetchCommand {
    pub fn new(ctx: AppContext, args: FetchArgs) -> Self {
        Self { ctx, args }
    }

    fn fetcher(&self) -> Result<IconFetcher> {
        let fetcher = if self.args.print && self.ctx.config.fetched_dir.is_none() {
            // Printing never touches the store, so any root will do.
            let config = crate::config::EngineConfig {
                fetched_dir: Some(std::env::temp_dir()),
                ..self.ctx.config.clone()
            };
            IconFetcher::from_config(&config)?
        } else {
            IconFetcher::from_config(&self.ctx.config)?
        };

        fetcher.ok_or_else(|| IconError::ConfigValidationError {
            message: "No fetched directory configured; pass --fetched-dir or set settings.fetched_dir"
                .to_string(),
        })
    }

    fn fetch_one(
        &self,
        fetcher: &IconFetcher,
        icon: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let target = self.ctx.registry.resolve_alias(icon);
        let reference = fetcher
            .parse_reference(target)
            .ok_or_else(|| IconError::IconSyntax {
                reference: target.to_string(),
            })?;

        if self.args.print {
            let svg = fetcher.fetch_and_save(&reference, false)?;
            ui.output(&svg);
            return Ok(());
        }

        if fetcher.exists_locally(&reference) && !self.args.force {
            ui.message(&format!(
                "{} already fetched ({})",
                reference,
                fetcher.local_path(&reference).display()
            ));
            return Ok(());
        }

        let mut spinner = ui.start_spinner(&format!("Fetching {}...", reference));
        match fetcher.fetch_and_save(&reference, true) {
            Ok(_) => {
                spinner.finish_success(&format!(
                    "Fetched {} to {}",
                    reference,
                    fetcher.local_path(&reference).display()
                ));
                Ok(())
            }
            Err(e) => {
                spinner.finish_clear();
                Err(e)
            }
        }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fetcher = self.fetcher()?;

        let mut failures = 0;
        for icon in &self.args.icons {
            if let Err(e) = self.fetch_one(&fetcher, icon, ui) {
                ui.error(&format!("{}: {}", icon, e));
                if e.is_retryable() {
                    ui.warning("The request may succeed if retried");
                }
                failures += 1;
            }
        }

        Ok(CommandResult::from_failures(failures))
    }
}

/// Print warm outcomes. Returns the number of failures.
pub(crate) fn report_warm(outcomes: &[WarmOutcome], ui: &mut dyn UserInterface) -> usize {
    let mut failures = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(WarmStatus::Fetched) => ui.success(&format!("Fetched {}", outcome.reference)),
            Ok(WarmStatus::Cached) | Ok(WarmStatus::Skipped) => {}
            Err(e) => {
                ui.warning(&format!("Could not fetch {}: {}", outcome.reference, e));
                failures += 1;
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::registry::Registry;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn ctx(server: &MockServer, fetched: Option<&Path>) -> AppContext {
        let yaml = "aliases:\n  doctor: health:stethoscope\n";
        AppContext {
            registry: Registry::from_yaml(yaml, Path::new(".")).unwrap(),
            config: EngineConfig {
                fetched_dir: fetched.map(Path::to_path_buf),
                icon_api_url: server.base_url(),
                ..Default::default()
            },
        }
    }

    fn args(icons: &[&str]) -> FetchArgs {
        FetchArgs {
            icons: icons.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn fetches_alias_target_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/healthicons/stethoscope.svg");
            then.status(200).body("<svg/>");
        });
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let cmd = FetchCommand::new(ctx(&server, Some(temp.path())), args(&["doctor"]));
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(cmd.execute(&mut ui).unwrap().success);

        mock.assert_calls(1);
        assert!(ui.has_message("already fetched"));
        assert_eq!(ui.spinners(), &["Fetching health:stethoscope...".to_string()]);
        assert!(temp.path().join("healthicons/stethoscope.svg").is_file());
        assert!(temp.path().join("provenance.yaml").is_file());
    }

    #[test]
    fn force_fetches_again() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/mdi/home.svg");
            then.status(200).body("<svg/>");
        });
        let temp = TempDir::new().unwrap();

        let mut fetch_args = args(&["mdi:home"]);
        fetch_args.force = true;
        let cmd = FetchCommand::new(ctx(&server, Some(temp.path())), fetch_args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        cmd.execute(&mut ui).unwrap();

        mock.assert_calls(2);
    }

    #[test]
    fn reports_not_found_and_invalid_references() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/mdi/nope.svg");
            then.status(404);
        });
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let result = FetchCommand::new(
            ctx(&server, Some(temp.path())),
            args(&["mdi:nope", "mdi:../etc", "home"]),
        )
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 3);
        assert!(ui.has_error("not found (HTTP 404)"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn print_writes_svg_without_saving() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lucide/heart.svg");
            then.status(200).body("<svg id=\"heart\"/>");
        });

        let mut fetch_args = args(&["lucide:heart"]);
        fetch_args.print = true;
        let mut ui = MockUI::new();
        FetchCommand::new(ctx(&server, None), fetch_args)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_output("id=\"heart\""));
    }

    #[test]
    fn requires_fetched_dir_to_save() {
        let server = MockServer::start();
        let mut ui = MockUI::new();
        let err = FetchCommand::new(ctx(&server, None), args(&["mdi:home"]))
            .execute(&mut ui)
            .unwrap_err();
        assert!(err.is_config_error());
    }
}

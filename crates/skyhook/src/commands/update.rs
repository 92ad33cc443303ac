//! Update command

use anyhow::Result;
use camino::Utf8Path;
use skyhook_update::{UpdateOrchestrator, UpdateOutcome};

use crate::cli::UpdateArgs;
use crate::commands::load_config;
use crate::output;

pub async fn run(args: UpdateArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let app_name = config.app_name.clone();

    let orchestrator = UpdateOrchestrator::new(config)?.with_progress(!args.no_progress);

    match orchestrator.run().await? {
        UpdateOutcome::UpToDate { version } => {
            output::success(&format!("{} {} is up to date", app_name, version));
        }
        UpdateOutcome::Installed { from, to } => {
            output::success(&format!("{} updated: {} -> {}", app_name, from, to));
        }
    }

    Ok(())
}

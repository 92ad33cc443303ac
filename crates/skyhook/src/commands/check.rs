//! Check command (dry run)

use anyhow::Result;
use camino::Utf8Path;
use serde_json::json;
use skyhook_update::UpdateOrchestrator;

use crate::cli::CheckArgs;
use crate::commands::load_config;
use crate::output;

pub async fn run(args: CheckArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let app_name = config.app_name.clone();
    let orchestrator = UpdateOrchestrator::new(config)?;

    let spinner = output::spinner("Checking for updates...");
    let check = orchestrator.check().await;
    spinner.finish_and_clear();
    let check = check?;

    if args.json {
        let payload = json!({
            "app": app_name,
            "installed": check.local,
            "latest": check.latest,
            "update_available": check.update_available,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    output::kv("Installed", &check.local);
    output::kv("Latest", &check.latest);

    if check.update_available {
        output::success(&format!("Update available: {}", check.latest));
        output::info("Run 'skyhook update' to install it");
    } else {
        output::success("Already on the latest version");
    }

    Ok(())
}

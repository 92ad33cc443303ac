//! Version command

use anyhow::Result;
use camino::Utf8Path;
use serde_json::json;
use skyhook_update::VersionStore;

use crate::cli::VersionArgs;
use crate::commands::load_config;
use crate::output;

pub fn run(args: VersionArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let tool_version = env!("CARGO_PKG_VERSION");

    // The wrapped app's recorded version is shown when a config is present
    let recorded = load_config(config_path).ok().map(|config| {
        let store = VersionStore::new(config.marker_path());
        (config.app_name, store.read())
    });

    if args.json {
        let mut payload = json!({ "skyhook": tool_version });
        if let Some((app, version)) = &recorded {
            payload["app"] = json!(app);
            payload["installed"] = json!(version);
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("skyhook {}", tool_version);
        if let Some((app, version)) = recorded {
            output::kv(&app, &version);
        }
    }

    Ok(())
}

//! Platform asset selection

use regex::Regex;
use tracing::debug;

use skyhook_core::{Error, PlatformTarget, Result};

use crate::releases::ReleaseAsset;

/// Pick the asset matching a platform target from a release's asset list.
///
/// A name matches when it ends with `<os>-<arch>`, optionally followed by
/// `.exe`, case-insensitively. Windows assets always carry the suffix,
/// others never do. The first match in index order wins; when an index ever
/// lists duplicate per-platform assets, the earliest listed is the
/// predictable choice.
pub fn select_asset<'a>(
    assets: &'a [ReleaseAsset],
    target: &PlatformTarget,
) -> Result<&'a ReleaseAsset> {
    let pattern = format!(r"(?i)({})(\.exe)?$", regex::escape(&target.asset_suffix()));
    let matcher = Regex::new(&pattern).expect("platform suffix forms a valid pattern");

    match assets.iter().find(|asset| matcher.is_match(&asset.name)) {
        Some(asset) => {
            debug!("selected asset '{}' for {}", asset.name, target);
            Ok(asset)
        }
        None => Err(Error::asset_not_found(target.asset_suffix())),
    }
}

//! Command helper utilities

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::assets::{AssetLayout, require_skill_assets, resolve_assets_root};
use crate::error::{Result, SkillError};
use crate::package_registry::DEFAULT_REGISTRY_URL;
use crate::skill::SkillKind;

/// Environment variable overriding the package registry base URL
pub const REGISTRY_ENV: &str = "TAIWAN_SKILL_REGISTRY";

/// Resolve the current directory, used as the project install target
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| SkillError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })
}

/// Locate the asset directory for `skill`, failing when it is not bundled
pub fn skill_layout(skill: SkillKind, assets: Option<PathBuf>) -> Result<AssetLayout> {
    let root = resolve_assets_root(assets)?;
    let layout = AssetLayout::for_skill(&root, skill);
    require_skill_assets(&layout)?;
    Ok(layout)
}

/// Package registry base URL (`TAIWAN_SKILL_REGISTRY` or the public registry)
pub fn registry_url() -> String {
    std::env::var(REGISTRY_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string())
}

/// Whether prompts can be shown (both stdin and stdout are terminals)
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Compare dotted numeric versions; `None` when either side does not parse
pub fn is_newer(candidate: &str, current: &str) -> Option<bool> {
    fn parse(v: &str) -> Option<Vec<u64>> {
        v.trim_start_matches('v')
            .split('.')
            .map(|part| part.parse().ok())
            .collect()
    }

    Some(parse(candidate)? > parse(current)?)
}

//! Location of the bundled skill assets
//!
//! Layout under a skill's asset directory:
//! - `templates/platforms/<stem>.json`: per-assistant configuration
//! - `templates/base/skill-content.md`: primary document template
//! - `templates/base/quick-reference.md`: optional fragment
//! - `skill/`: files copied into the installed skill (EXAMPLES.md, references/, ...)

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillError};
use crate::skill::SkillKind;

/// Paths inside one skill's asset directory
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(skill_assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: skill_assets_dir.into(),
        }
    }

    /// Layout for a skill under the given assets root
    pub fn for_skill(assets_root: &Path, skill: SkillKind) -> Self {
        Self::new(skill.assets_dir(assets_root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn platform_config(&self, stem: &str) -> PathBuf {
        self.root
            .join("templates")
            .join("platforms")
            .join(format!("{stem}.json"))
    }

    pub fn skill_template(&self) -> PathBuf {
        self.root.join("templates").join("base").join("skill-content.md")
    }

    pub fn quick_reference(&self) -> PathBuf {
        self.root
            .join("templates")
            .join("base")
            .join("quick-reference.md")
    }

    /// Source tree for auxiliary files (EXAMPLES.md, references/, scripts/, data/)
    pub fn bundle_dir(&self) -> PathBuf {
        self.root.join("skill")
    }
}

/// Resolve the assets root directory
///
/// Priority order:
/// 1. Explicit path (`--assets` / `TAIWAN_SKILL_ASSETS`)
/// 2. `assets/` next to the executable
/// 3. `assets/` in the crate source tree
pub fn resolve_assets_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(dunce::canonicalize(&path).unwrap_or(path));
        }
        return Err(SkillError::AssetsNotFound {
            path: path.display().to_string(),
        });
    }

    let candidates = beside_executable()
        .into_iter()
        .chain(std::iter::once(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ));

    let mut last = None;
    for candidate in candidates {
        if candidate.is_dir() {
            tracing::debug!(path = %candidate.display(), "using assets root");
            return Ok(candidate);
        }
        last = Some(candidate);
    }

    Err(SkillError::AssetsNotFound {
        path: last.map(|p| p.display().to_string()).unwrap_or_default(),
    })
}

fn beside_executable() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    Some(exe.parent()?.join("assets"))
}

/// Ensure the skill's asset directory exists before loading anything from it
pub fn require_skill_assets(layout: &AssetLayout) -> Result<()> {
    if layout.root().is_dir() {
        Ok(())
    } else {
        Err(SkillError::AssetsNotFound {
            path: layout.root().display().to_string(),
        })
    }
}

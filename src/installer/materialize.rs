//! Writing a rendered skill and its auxiliary assets to disk
//!
//! No rollback: a failure part-way leaves whatever was already written.
//! Re-running with overwrite is the recovery path.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::paths::ResolvedPath;
use super::render::render_skill_document;
use crate::assets::AssetLayout;
use crate::common::fs::copy_dir_recursive;
use crate::error::{Result, SkillError, write_failed};
use crate::platform::PlatformConfig;
use crate::progress::{InstallStep, ProgressReporter};

/// File name of the bundled examples document
pub const EXAMPLES_FILE: &str = "EXAMPLES.md";

/// An auxiliary asset copied next to the primary document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuxAsset {
    Examples,
    References,
    Scripts,
    Data,
}

impl AuxAsset {
    const ALL: [AuxAsset; 4] = [
        AuxAsset::Examples,
        AuxAsset::References,
        AuxAsset::Scripts,
        AuxAsset::Data,
    ];

    fn name(self) -> &'static str {
        match self {
            AuxAsset::Examples => EXAMPLES_FILE,
            AuxAsset::References => "references",
            AuxAsset::Scripts => "scripts",
            AuxAsset::Data => "data",
        }
    }

    fn enabled(self, config: &PlatformConfig) -> bool {
        let sections = &config.sections;
        match self {
            AuxAsset::Examples => sections.examples,
            AuxAsset::References => sections.references,
            AuxAsset::Scripts => sections.scripts,
            AuxAsset::Data => sections.data,
        }
    }

    fn step(self) -> Option<InstallStep> {
        match self {
            AuxAsset::Examples => None,
            AuxAsset::References => Some(InstallStep::InstallingReferences),
            AuxAsset::Scripts => Some(InstallStep::InstallingScripts),
            AuxAsset::Data => Some(InstallStep::InstallingData),
        }
    }
}

/// Write the skill described by `config` into `resolved`
///
/// Fails with `AlreadyInstalled` (and writes nothing) when the primary
/// document exists and `overwrite` is false. Returns the root folders written.
pub fn materialize(
    config: &PlatformConfig,
    resolved: &ResolvedPath,
    layout: &AssetLayout,
    overwrite: bool,
    reporter: &dyn ProgressReporter,
) -> Result<BTreeSet<PathBuf>> {
    if resolved.file_path.exists() && !overwrite {
        return Err(SkillError::AlreadyInstalled {
            path: resolved.skill_dir.display().to_string(),
        });
    }

    reporter.step(InstallStep::LoadingTemplates);
    fs::create_dir_all(&resolved.skill_dir).map_err(|e| write_failed(&resolved.skill_dir, e))?;
    let document = render_skill_document(config, layout)?;

    reporter.step(InstallStep::GeneratingSkillFiles);
    fs::write(&resolved.file_path, document).map_err(|e| write_failed(&resolved.file_path, e))?;

    let source_root = layout.bundle_dir();
    for asset in AuxAsset::ALL {
        if let Some(step) = asset.step() {
            reporter.step(step);
        }
        if asset.enabled(config) {
            copy_asset(asset, &source_root, &resolved.skill_dir)?;
        }
    }

    Ok(BTreeSet::from([resolved.reported_root.clone()]))
}

fn copy_asset(asset: AuxAsset, source_root: &Path, skill_dir: &Path) -> Result<()> {
    let source = source_root.join(asset.name());
    let target = skill_dir.join(asset.name());

    if !source.exists() {
        tracing::debug!(asset = asset.name(), "asset not bundled, skipping");
        return Ok(());
    }

    match asset {
        AuxAsset::Examples => {
            fs::copy(&source, &target).map_err(|e| write_failed(&target, e))?;
        }
        AuxAsset::References | AuxAsset::Scripts | AuxAsset::Data => {
            let copied =
                copy_dir_recursive(&source, &target).map_err(|e| write_failed(&target, e))?;
            tracing::debug!(asset = asset.name(), files = copied, "copied asset directory");
        }
    }

    Ok(())
}

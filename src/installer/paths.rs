//! Destination path resolution for skill installs
//!
//! Project installs land under `<project>/<root>/<skillPath>`; global installs
//! land under the expanded `globalRoot`. A global root that is itself a flat
//! "global skills" folder already implies the `skills/` segment, so it is
//! stripped from `skillPath` there.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SkillError};
use crate::platform::PlatformConfig;

/// Marker in a global root naming a flattened shared skills folder
pub const FLATTENED_GLOBAL_MARKER: &str = "global_skills";

const SKILLS_SEGMENT: &str = "skills/";

/// Where a skill is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    /// Under the current project directory
    Project,
    /// Under the assistant's home-directory location
    Global,
}

impl std::fmt::Display for InstallScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallScope::Project => f.write_str("project"),
            InstallScope::Global => f.write_str("global"),
        }
    }
}

/// Concrete destination for one install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Directory receiving the skill files
    pub skill_dir: PathBuf,
    /// Primary document path
    pub file_path: PathBuf,
    /// Top-level folder reported back to the user
    pub reported_root: PathBuf,
}

/// Compute the destination for `config` in the given scope
///
/// `project_dir` is the base for project installs; `home` expands `~` in the
/// global root.
pub fn resolve_path(
    config: &PlatformConfig,
    scope: InstallScope,
    project_dir: &Path,
    home: Option<&Path>,
) -> Result<ResolvedPath> {
    let folders = &config.folder_structure;
    let filename = ensure_file_name(&folders.filename)?;

    let (skill_dir, reported_root) = match scope {
        InstallScope::Project => {
            let root = ensure_subdir("root", &folders.root)?;
            let skill_path = ensure_subdir("skillPath", &folders.skill_path)?;
            (
                project_dir.join(root).join(skill_path),
                root.to_path_buf(),
            )
        }
        InstallScope::Global => {
            let global_root =
                folders
                    .global_root
                    .as_deref()
                    .ok_or_else(|| SkillError::GlobalUnsupported {
                        platform: config.display_name.clone(),
                    })?;
            let target_base = expand_global_root(global_root, home)?;

            let skill_path = if global_root.contains(FLATTENED_GLOBAL_MARKER) {
                folders
                    .skill_path
                    .strip_prefix(SKILLS_SEGMENT)
                    .unwrap_or(&folders.skill_path)
            } else {
                folders.skill_path.as_str()
            };
            let skill_path = ensure_subdir("skillPath", skill_path)?;

            (target_base.join(skill_path), target_base)
        }
    };

    let file_path = skill_dir.join(filename);
    tracing::debug!(
        scope = %scope,
        skill_dir = %skill_dir.display(),
        "resolved install destination"
    );

    Ok(ResolvedPath {
        skill_dir,
        file_path,
        reported_root,
    })
}

/// Expand a leading `~` to the home directory; the result must be absolute
pub fn expand_global_root(global_root: &str, home: Option<&Path>) -> Result<PathBuf> {
    let expanded = if global_root == "~" {
        home.ok_or(SkillError::HomeDirUnavailable)?.to_path_buf()
    } else if let Some(rest) = global_root
        .strip_prefix("~/")
        .or_else(|| global_root.strip_prefix("~\\"))
    {
        let home = home.ok_or(SkillError::HomeDirUnavailable)?;
        home.join(ensure_relative("globalRoot", rest)?)
    } else {
        PathBuf::from(global_root)
    };

    let has_parent = expanded
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    if !expanded.is_absolute() || has_parent {
        return Err(unsafe_path("globalRoot", global_root));
    }

    Ok(expanded)
}

/// Accept only plain relative paths (no root, prefix, or `..`)
fn ensure_relative<'a>(field: &str, value: &'a str) -> Result<&'a Path> {
    let path = Path::new(value);
    let safe = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if safe {
        Ok(path)
    } else {
        Err(unsafe_path(field, value))
    }
}

/// Like [`ensure_relative`], but the path must name at least one directory
///
/// An empty or `.` path would make the skill dir the shared root itself.
fn ensure_subdir<'a>(field: &str, value: &'a str) -> Result<&'a Path> {
    let path = ensure_relative(field, value)?;
    if path.components().any(|c| matches!(c, Component::Normal(_))) {
        Ok(path)
    } else {
        Err(unsafe_path(field, value))
    }
}

fn ensure_file_name(value: &str) -> Result<&Path> {
    let path = Path::new(value);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(unsafe_path("filename", value)),
    }
}

fn unsafe_path(field: &str, value: &str) -> SkillError {
    SkillError::UnsafePath {
        field: field.to_string(),
        value: value.to_string(),
    }
}

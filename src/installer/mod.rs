//! Skill installation
//!
//! This module handles:
//! - Destination resolution per scope (via `paths`)
//! - Primary document rendering (via `render`)
//! - Writing documents and auxiliary assets (via `materialize`)
//! - Orchestrating single and bulk installs (`Installer`)

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub mod materialize;
pub mod paths;
pub mod render;

pub use paths::{InstallScope, ResolvedPath};

use crate::assets::AssetLayout;
use crate::error::{Result, SkillError, write_failed};
use crate::platform::{ASSISTANTS, PlatformConfig, PlatformRegistry};
use crate::progress::{NoProgress, ProgressReporter};

/// Result of a bulk install across every assistant
#[derive(Debug, Default)]
pub struct BulkOutcome {
    /// Assistants that received the skill, in table order
    pub installed: Vec<&'static str>,
    /// Distinct top-level folders written
    pub roots: BTreeSet<PathBuf>,
}

/// One install invocation
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub assistant_id: String,
    pub scope: InstallScope,
    pub overwrite: bool,
    /// Base directory for project installs
    pub project_dir: PathBuf,
}

/// Configuration and destination for an install, before anything is written
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub config: PlatformConfig,
    pub resolved: ResolvedPath,
    /// Scope actually used
    pub scope: InstallScope,
    /// Global was requested but the assistant has no global root
    pub fell_back_to_project: bool,
}

impl InstallPlan {
    /// Whether the primary document is already present at the destination
    pub fn is_installed(&self) -> bool {
        self.resolved.file_path.exists()
    }
}

/// Result of a completed install
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub roots: BTreeSet<PathBuf>,
    pub skill_dir: PathBuf,
    pub file_path: PathBuf,
    pub scope: InstallScope,
}

/// Installs one skill's assets into AI assistants
pub struct Installer {
    registry: PlatformRegistry,
    home: Option<PathBuf>,
}

impl Installer {
    /// Create an installer reading from `layout`; `home` expands global roots
    pub fn new(layout: AssetLayout, home: Option<PathBuf>) -> Self {
        Self {
            registry: PlatformRegistry::new(layout),
            home,
        }
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Resolve configuration and destination without writing anything
    ///
    /// A global request for an assistant without a global root falls back to
    /// the project scope.
    pub fn plan(&self, request: &InstallRequest) -> Result<InstallPlan> {
        let config = self.registry.resolve(&request.assistant_id)?;
        let home = self.home.as_deref();

        match paths::resolve_path(&config, request.scope, &request.project_dir, home) {
            Ok(resolved) => Ok(InstallPlan {
                config,
                resolved,
                scope: request.scope,
                fell_back_to_project: false,
            }),
            Err(SkillError::GlobalUnsupported { platform }) => {
                tracing::debug!(%platform, "global install unsupported, using project directory");
                let resolved = paths::resolve_path(
                    &config,
                    InstallScope::Project,
                    &request.project_dir,
                    home,
                )?;
                Ok(InstallPlan {
                    config,
                    resolved,
                    scope: InstallScope::Project,
                    fell_back_to_project: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Install into a single assistant
    ///
    /// With `overwrite`, an existing skill directory is removed entirely before
    /// the fresh copy is written.
    pub fn install(
        &self,
        request: &InstallRequest,
        reporter: &dyn ProgressReporter,
    ) -> Result<InstallOutcome> {
        let plan = self.plan(request)?;
        self.execute(plan, request.overwrite, reporter)
    }

    /// Write a previously computed plan
    pub fn execute(
        &self,
        plan: InstallPlan,
        overwrite: bool,
        reporter: &dyn ProgressReporter,
    ) -> Result<InstallOutcome> {
        let skill_dir = &plan.resolved.skill_dir;
        if overwrite && skill_dir.exists() {
            tracing::debug!(path = %skill_dir.display(), "removing existing installation");
            fs::remove_dir_all(skill_dir).map_err(|e| write_failed(skill_dir, e))?;
        }

        let roots = materialize::materialize(
            &plan.config,
            &plan.resolved,
            self.registry.layout(),
            overwrite,
            reporter,
        )?;

        tracing::info!(
            platform = %plan.config.display_name,
            path = %plan.resolved.file_path.display(),
            "installed skill"
        );

        Ok(InstallOutcome {
            roots,
            skill_dir: plan.resolved.skill_dir,
            file_path: plan.resolved.file_path,
            scope: plan.scope,
        })
    }

    /// Install into every assistant in project scope, best effort
    ///
    /// A failing assistant (unknown, misconfigured, already installed) is
    /// skipped and the rest continue.
    pub fn install_all(
        &self,
        project_dir: &Path,
        overwrite: bool,
        reporter: &dyn ProgressReporter,
    ) -> BulkOutcome {
        let mut bulk = BulkOutcome::default();

        for assistant in ASSISTANTS {
            let request = InstallRequest {
                assistant_id: assistant.id.to_string(),
                scope: InstallScope::Project,
                overwrite,
                project_dir: project_dir.to_path_buf(),
            };

            match self.install(&request, &NoProgress) {
                Ok(outcome) => {
                    bulk.installed.push(assistant.id);
                    bulk.roots.extend(outcome.roots);
                }
                Err(e) => tracing::debug!(assistant = assistant.id, error = %e, "skipping"),
            }
            reporter.platform_done(assistant.id);
        }

        bulk
    }
}

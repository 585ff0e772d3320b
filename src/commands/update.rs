//! Update command implementation
//!
//! Compares the running version with the registry's latest release and
//! prints the upgrade command. Never fails on network errors.

use crate::commands::helpers::is_newer;
use crate::commands::versions::fetch_with_spinner;
use crate::error::Result;
use crate::skill::{SkillKind, SkillSpec};
use crate::ui;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq, Eq)]
enum UpdateStatus {
    UpToDate,
    Available(String),
    Unknown,
}

fn update_status(latest: Option<&str>) -> UpdateStatus {
    match latest {
        None => UpdateStatus::Unknown,
        Some(latest) => match is_newer(latest, CURRENT_VERSION) {
            Some(true) => UpdateStatus::Available(latest.to_string()),
            Some(false) => UpdateStatus::UpToDate,
            // Pre-release or unusual tags: report any difference
            None if latest != CURRENT_VERSION => UpdateStatus::Available(latest.to_string()),
            None => UpdateStatus::UpToDate,
        },
    }
}

fn upgrade_command(spec: &SkillSpec) -> String {
    format!("npm install -g {}@latest", spec.package)
}

/// Run update command
pub fn run(skill: SkillKind) -> Result<()> {
    let spec = skill.spec();
    ui::title(&format!("{} update check", spec.display_name));

    let status = match fetch_with_spinner(spec.package) {
        Ok(document) => update_status(document.latest()),
        Err(e) => {
            tracing::debug!(error = %e, "update check failed");
            ui::warn(&format!("Could not check for updates: {e}"));
            UpdateStatus::Unknown
        }
    };

    match status {
        UpdateStatus::UpToDate => {
            ui::success(&format!("You are on the latest version ({CURRENT_VERSION})"));
        }
        UpdateStatus::Available(latest) => {
            ui::info(&format!("New version available: {CURRENT_VERSION} → {latest}"));
            ui::info(&format!("Upgrade with: {}", upgrade_command(spec)));
        }
        UpdateStatus::Unknown => {
            ui::info(&format!("Current version: {CURRENT_VERSION}"));
            ui::info(&format!("Upgrade manually with: {}", upgrade_command(spec)));
        }
    }
    println!();

    Ok(())
}

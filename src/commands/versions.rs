//! Versions command implementation
//!
//! Lists the most recently published versions of the skill package. Registry
//! failures are reported as a warning; the command itself always succeeds.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::helpers::registry_url;
use crate::error::Result;
use crate::package_registry::{MAX_LISTED_VERSIONS, PackageDocument, RegistryClient};
use crate::skill::SkillKind;
use crate::ui;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run versions command
pub fn run(skill: SkillKind) -> Result<()> {
    let package = skill.spec().package;
    ui::title(&format!("{} versions", skill.spec().display_name));

    match fetch_with_spinner(package) {
        Ok(document) => print_versions(&document),
        Err(e) => {
            tracing::debug!(error = %e, "version lookup failed");
            ui::warn(&format!("Could not fetch published versions: {e}"));
            ui::info(&format!("Current version: {CURRENT_VERSION}"));
        }
    }
    println!();

    Ok(())
}

/// Fetch the package document while a spinner runs
pub fn fetch_with_spinner(package: &str) -> Result<PackageDocument> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching {package} from the registry..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = RegistryClient::new(registry_url()).and_then(|c| c.fetch_package(package));
    spinner.finish_and_clear();
    result
}

fn print_versions(document: &PackageDocument) {
    let versions = document.recent_versions(MAX_LISTED_VERSIONS);
    if versions.is_empty() {
        ui::warn("No published versions found");
        ui::info(&format!("Current version: {CURRENT_VERSION}"));
        return;
    }

    for line in version_lines(&versions, document.latest()) {
        println!("{line}");
    }
}

fn version_lines(versions: &[String], latest: Option<&str>) -> Vec<String> {
    versions
        .iter()
        .map(|version| {
            let mut tags = Vec::new();
            if version == CURRENT_VERSION {
                tags.push("current");
            }
            if Some(version.as_str()) == latest {
                tags.push("latest");
            }

            if tags.is_empty() {
                format!("    {version}")
            } else {
                let label = Style::new().green().apply_to(format!("({})", tags.join(", ")));
                format!("  {} {version} {label}", Style::new().green().apply_to("●"))
            }
        })
        .collect()
}

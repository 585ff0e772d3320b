//! List command implementation
//!
//! Shows every supported assistant with the locations the skill would be
//! installed to. Assistants detected in the current directory are marked.

use std::path::{Path, PathBuf};

use console::Style;

use crate::commands::helpers::{current_dir, skill_layout};
use crate::error::Result;
use crate::platform::detection::detect_assistants;
use crate::platform::{ASSISTANTS, Assistant, PlatformConfig, PlatformRegistry};
use crate::skill::SkillKind;
use crate::ui;

/// Run list command
pub fn run(skill: SkillKind, assets: Option<PathBuf>) -> Result<()> {
    let layout = skill_layout(skill, assets)?;
    let registry = PlatformRegistry::new(layout);
    let project_dir = current_dir()?;

    list_assistants(&registry, &project_dir, skill);
    Ok(())
}

fn list_assistants(registry: &PlatformRegistry, project_dir: &Path, skill: SkillKind) {
    let detected = detect_assistants(project_dir);

    ui::title(&format!(
        "Supported AI assistants for {} ({})",
        skill.spec().display_name,
        ASSISTANTS.len()
    ));

    let header = Style::new().bold();
    println!(
        "    {}",
        header.apply_to(format!(
            "{:<12} {:<24} {:<36} {:<40} {}",
            "ID", "ASSISTANT", "PROJECT PATH", "GLOBAL PATH", "TYPE"
        ))
    );

    for assistant in ASSISTANTS {
        let marker = if detected.contains(&assistant) {
            Style::new().green().apply_to("●").to_string()
        } else {
            " ".to_string()
        };

        match registry.resolve(assistant.id) {
            Ok(config) => print_row(&marker, assistant, &config),
            Err(e) => {
                tracing::debug!(assistant = assistant.id, error = %e, "configuration unavailable");
                println!(
                    "  {marker} {:<12} {:<24} {}",
                    assistant.id,
                    assistant.description,
                    Style::new().red().apply_to("configuration unavailable")
                );
            }
        }
    }

    println!();
    if detected.is_empty() {
        ui::dim("  No assistant folders detected in the current directory.");
    } else {
        ui::dim("  ● detected in the current directory");
    }
    println!();
}

fn print_row(marker: &str, assistant: &Assistant, config: &PlatformConfig) {
    let folders = &config.folder_structure;
    let global = folders.global_root.as_deref().unwrap_or("-");

    println!(
        "  {marker} {} {:<24} {:<36} {:<40} {}",
        Style::new().cyan().apply_to(format!("{:<12}", assistant.id)),
        assistant.description,
        config.project_path(),
        global,
        config.install_type
    );

    if let Some(shared) = &folders.shared_path {
        println!("  {:<38} {}", "", Style::new().dim().apply_to(format!("shared: {shared}")));
    }
}

//! Init command implementation
//!
//! Installs the selected skill into one assistant (or all of them):
//! 1. Pick the assistant (`--ai`, interactive selector, or auto-detect)
//! 2. Pick the scope (`--global`, or a prompt when the assistant supports it)
//! 3. Confirm overwriting an existing installation
//! 4. Write the skill with a progress bar and print next steps

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use inquire::{Confirm, Select};

use crate::cli::InitArgs;
use crate::commands::helpers::{current_dir, is_interactive, skill_layout};
use crate::common::fs::list_files;
use crate::error::{Result, SkillError};
use crate::installer::{InstallRequest, InstallScope, Installer};
use crate::platform::detection::detect_assistants;
use crate::platform::{ALL_ID, ASSISTANTS, Assistant, AssistantSelection};
use crate::progress::ProgressDisplay;
use crate::skill::{SkillKind, SkillSpec};
use crate::ui;

/// How much the command may ask the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptMode {
    Interactive,
    Unattended,
}

impl PromptMode {
    fn from_args(args: &InitArgs) -> Self {
        if !args.yes && is_interactive() {
            PromptMode::Interactive
        } else {
            PromptMode::Unattended
        }
    }
}

/// Entry in the assistant selector
struct Choice {
    id: &'static str,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Run init command
pub fn run(skill: SkillKind, assets: Option<PathBuf>, args: &InitArgs) -> Result<()> {
    let layout = skill_layout(skill, assets)?;
    let project_dir = current_dir()?;
    let installer = Installer::new(layout, dirs::home_dir());
    let mode = PromptMode::from_args(args);
    let spec = skill.spec();

    ui::title(&format!("{} v{}", spec.display_name, env!("CARGO_PKG_VERSION")));

    let selection = match &args.ai {
        Some(id) => AssistantSelection::parse(id),
        None => match choose_assistant(&project_dir, mode)? {
            Some(selection) => selection,
            None => {
                ui::warn("Installation cancelled");
                return Ok(());
            }
        },
    };

    match selection {
        AssistantSelection::All => {
            if args.global {
                ui::warn("--global is ignored when installing for all assistants");
            }
            install_all(&installer, &project_dir, args.force, spec);
            Ok(())
        }
        AssistantSelection::One(id) => install_one(&installer, &project_dir, &id, args, mode, spec),
    }
}

/// Select the target assistant, or `None` when the user cancelled
fn choose_assistant(project_dir: &Path, mode: PromptMode) -> Result<Option<AssistantSelection>> {
    let detected = detect_assistants(project_dir);
    if detected.is_empty() {
        ui::info("No AI assistant folders detected in the current directory");
    } else {
        let names: Vec<_> = detected.iter().map(|a| a.description).collect();
        ui::info(&format!("Detected: {}", names.join(", ")));
    }

    let suggested = detected.first().copied();

    if mode == PromptMode::Unattended {
        return match suggested {
            Some(assistant) => {
                ui::info(&format!("Using {}", assistant.description));
                Ok(Some(AssistantSelection::One(assistant.id.to_string())))
            }
            None => Err(SkillError::NoAssistantSelected),
        };
    }

    let choices = selector_choices();
    let start = suggested
        .and_then(|s| choices.iter().position(|c| c.id == s.id))
        .unwrap_or(0);

    println!();
    let Some(choice) = Select::new("Select AI assistant to install for", choices)
        .with_starting_cursor(start)
        .with_page_size(15)
        .with_help_message("↑↓ to move, ENTER to select, type to filter, ESC to cancel")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    Ok(Some(AssistantSelection::parse(choice.id)))
}

fn selector_choices() -> Vec<Choice> {
    ASSISTANTS
        .iter()
        .map(|a| Choice {
            id: a.id,
            label: format!("{} ({})", a.description, a.id),
        })
        .chain(std::iter::once(Choice {
            id: ALL_ID,
            label: "All assistants".to_string(),
        }))
        .collect()
}

fn install_one(
    installer: &Installer,
    project_dir: &Path,
    id: &str,
    args: &InitArgs,
    mode: PromptMode,
    spec: &SkillSpec,
) -> Result<()> {
    let assistant = installer.registry().assistant(id)?;
    let config = installer.registry().resolve(id)?;

    let scope = if args.global {
        InstallScope::Global
    } else if args.ai.is_none() && mode == PromptMode::Interactive && config.supports_global() {
        ask_global_scope(assistant)?
    } else {
        InstallScope::Project
    };

    let request = InstallRequest {
        assistant_id: id.to_string(),
        scope,
        overwrite: args.force,
        project_dir: project_dir.to_path_buf(),
    };
    let plan = installer.plan(&request)?;

    if plan.fell_back_to_project {
        ui::warn(&format!(
            "{} does not support global installation; installing into the project instead",
            plan.config.display_name
        ));
    }

    let mut overwrite = args.force;
    if plan.is_installed() && !overwrite && mode == PromptMode::Interactive {
        if confirm_overwrite(&plan.resolved.skill_dir)? {
            overwrite = true;
        } else {
            return Err(SkillError::AlreadyInstalled {
                path: plan.resolved.skill_dir.display().to_string(),
            });
        }
    }

    println!();
    let progress = ProgressDisplay::for_steps();
    let outcome = match installer.execute(plan, overwrite, &progress) {
        Ok(outcome) => {
            progress.finish();
            outcome
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    println!();
    ui::success(&format!(
        "{} installed for {} ({} scope)",
        spec.display_name, assistant.description, outcome.scope
    ));
    print_roots(&outcome.roots);
    ui::info(&format!("Skill file: {}", outcome.file_path.display()));
    if let Ok(files) = list_files(&outcome.skill_dir) {
        ui::info(&format!("Files written: {}", files.len()));
    }
    print_next_steps(spec, Some(assistant));

    Ok(())
}

fn install_all(installer: &Installer, project_dir: &Path, force: bool, spec: &SkillSpec) {
    println!();
    let progress = ProgressDisplay::for_platforms(ASSISTANTS.len() as u64);
    let bulk = installer.install_all(project_dir, force, &progress);
    progress.finish();
    println!();

    if bulk.installed.is_empty() {
        ui::warn("No installations were made");
        if !force {
            ui::info("Existing installations are skipped; pass --force to replace them");
        }
        return;
    }

    ui::success(&format!(
        "{} installed for {} of {} assistants",
        spec.display_name,
        bulk.installed.len(),
        ASSISTANTS.len()
    ));
    print_roots(&bulk.roots);
    print_next_steps(spec, None);
}

fn ask_global_scope(assistant: &Assistant) -> Result<InstallScope> {
    let global = Confirm::new(&format!(
        "Install globally for {} (home directory)?",
        assistant.description
    ))
    .with_default(false)
    .with_help_message("A global install is available in every project")
    .prompt_skippable()?
    .unwrap_or(false);

    Ok(if global {
        InstallScope::Global
    } else {
        InstallScope::Project
    })
}

fn confirm_overwrite(skill_dir: &Path) -> Result<bool> {
    Ok(Confirm::new(&format!(
        "Skill already installed at {}. Overwrite?",
        skill_dir.display()
    ))
    .with_default(false)
    .with_help_message("The existing skill directory will be replaced")
    .prompt_skippable()?
    .unwrap_or(false))
}

fn print_roots(roots: &BTreeSet<PathBuf>) {
    for root in roots {
        ui::info(&format!("Installed to: {}", root.display()));
    }
}

fn next_steps_lines(spec: &SkillSpec, assistant: Option<&Assistant>) -> Vec<String> {
    let target = assistant.map_or("your AI assistant", |a| a.description);
    let mut lines = vec![
        format!("1. Restart or reload {target}"),
        "2. Try asking:".to_string(),
    ];
    lines.extend(spec.sample_prompts.iter().map(|p| format!("   • \"{p}\"")));
    lines
}

fn print_next_steps(spec: &SkillSpec, assistant: Option<&Assistant>) {
    ui::boxed("Next steps", &next_steps_lines(spec, assistant));
}

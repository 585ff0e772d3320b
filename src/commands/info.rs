//! Info command implementation

use crate::error::Result;
use crate::platform::ASSISTANTS;
use crate::skill::{SkillKind, SkillSpec};
use crate::ui;

/// Run info command
pub fn run(skill: SkillKind) -> Result<()> {
    let spec = skill.spec();

    ui::title(spec.display_name);
    for (label, value) in summary(spec) {
        ui::field(label, &value);
    }

    println!();
    ui::section("Links:");
    ui::field("Repository", spec.repository);
    ui::field("Package", &package_page(spec));
    println!();

    Ok(())
}

fn summary(spec: &SkillSpec) -> Vec<(&'static str, String)> {
    vec![
        ("Name", spec.name.to_string()),
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
        ("Providers", spec.providers.join(", ")),
        ("Features", spec.features.join(", ")),
        ("Platforms", format!("{} AI assistants", ASSISTANTS.len())),
        ("License", env!("CARGO_PKG_LICENSE").to_string()),
    ]
}

fn package_page(spec: &SkillSpec) -> String {
    format!("https://www.npmjs.com/package/{}", spec.package)
}

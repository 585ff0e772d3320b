//! Test fixtures for building a minimal skill asset tree.
//!
//! ```ignore
//! let (_temp, layout) = create_skill_assets();
//! let registry = PlatformRegistry::new(layout);
//! ```

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use crate::assets::AssetLayout;
use crate::platform::ASSISTANTS;

pub const TEMPLATE: &str = "# {{TITLE}}\n\n{{DESCRIPTION}}\n\nSee {{TITLE}} references.\n";
pub const QUICK_REFERENCE: &str = "## Quick Reference\n\n- B2C amounts are tax-inclusive\n";

/// Create a temp directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a skill asset tree with a configuration for every assistant.
///
/// `claude` enables every section and quick reference, `antigravity` uses a
/// flattened `global_skills` root, `windsurf` has no global root and no
/// frontmatter; the rest follow the cursor shape.
///
/// # Panics
///
/// Panics if any fixture file cannot be written.
#[must_use]
pub fn create_skill_assets() -> (TempDir, AssetLayout) {
    let temp = create_temp_dir();
    let layout = AssetLayout::new(temp.path().join("taiwan-invoice"));

    for assistant in ASSISTANTS {
        let config = fixture_config(assistant.id, assistant.folder);
        write(
            &layout.platform_config(assistant.config_stem),
            &serde_json::to_string_pretty(&config).expect("fixture config serializes"),
        );
    }

    write(&layout.skill_template(), TEMPLATE);
    write(&layout.quick_reference(), QUICK_REFERENCE);

    let bundle = layout.bundle_dir();
    write(&bundle.join("EXAMPLES.md"), "# Examples\n");
    write(&bundle.join("references/ECPAY_API_REFERENCE.md"), "# ECPay\n");
    write(&bundle.join("references/nested/FIELDS.md"), "# Fields\n");
    write(&bundle.join("scripts/search.py"), "print('search')\n");
    write(&bundle.join("data/providers.csv"), "name\nECPay\n");

    (temp, layout)
}

fn fixture_config(id: &str, folder: &str) -> serde_json::Value {
    let all_sections = id == "claude";
    let global_root = match id {
        "windsurf" => None,
        "antigravity" => Some("~/.gemini/antigravity/global_skills".to_string()),
        _ => Some(format!("~/{folder}")),
    };
    let frontmatter = if id == "windsurf" {
        serde_json::Value::Null
    } else {
        json!({
            "name": "taiwan-invoice",
            "description": "Taiwan e-invoice: ECPay, SmilePay, Amego",
        })
    };

    let mut folder_structure = json!({
        "root": folder,
        "skillPath": "skills/taiwan-invoice",
        "filename": "SKILL.md",
    });
    if let Some(global_root) = global_root {
        folder_structure["globalRoot"] = json!(global_root);
    }

    json!({
        "platform": id,
        "displayName": id,
        "installType": "full",
        "folderStructure": folder_structure,
        "frontmatter": frontmatter,
        "sections": {
            "examples": true,
            "references": true,
            "scripts": true,
            "data": all_sections,
            "quickReference": all_sections,
        },
        "title": "Taiwan Invoice",
        "description": "Taiwan e-invoice integration",
    })
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

//! Rendering of the primary skill document

use std::fs;

use crate::assets::AssetLayout;
use crate::error::{Result, config_load_failure};
use crate::platform::{Frontmatter, PlatformConfig};

const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
const DESCRIPTION_PLACEHOLDER: &str = "{{DESCRIPTION}}";

/// Render the YAML header for a document, or an empty string when absent
///
/// Values containing `:`, `"` or a newline are double-quoted and escaped, as
/// are values a plain YAML scalar would misread (leading indicator, edge
/// whitespace, comment marker, empty). Bare words such as `false` stay plain.
pub fn render_frontmatter(frontmatter: Option<&Frontmatter>) -> String {
    let Some(frontmatter) = frontmatter else {
        return String::new();
    };

    let mut out = String::from("---\n");
    for (key, value) in frontmatter.entries() {
        out.push_str(key);
        out.push_str(": ");
        if needs_quoting(value) {
            out.push('"');
            out.push_str(&escape_double_quoted(value));
            out.push('"');
        } else {
            out.push_str(value);
        }
        out.push('\n');
    }
    out.push_str("---\n\n");
    out
}

/// Characters that change the meaning of a plain scalar when they lead it
const LEADING_INDICATORS: &[char] = &[
    '-', '?', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '%', '@', '`',
];

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value.contains([':', '"', '\n'])
        || value.contains(" #")
        || value.starts_with(LEADING_INDICATORS)
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
}

fn escape_double_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Replace every `{{TITLE}}` and `{{DESCRIPTION}}` in a single pass
///
/// Substituted text is never rescanned, so placeholders inside the title or
/// description stay literal.
pub fn substitute(template: &str, title: &str, description: &str) -> String {
    let mut out = String::with_capacity(template.len() + title.len() + description.len());
    let mut rest = template;

    while let Some(pos) = rest.find("{{") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(TITLE_PLACEHOLDER) {
            out.push_str(title);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(DESCRIPTION_PLACEHOLDER) {
            out.push_str(description);
            rest = after;
        } else {
            out.push_str("{{");
            rest = &tail[2..];
        }
    }
    out.push_str(rest);
    out
}

/// Render the full primary document for an assistant
pub fn render_skill_document(config: &PlatformConfig, layout: &AssetLayout) -> Result<String> {
    let template_path = layout.skill_template();
    let template =
        fs::read_to_string(&template_path).map_err(|e| config_load_failure(&template_path, e))?;

    let mut body = substitute(&template, &config.title, &config.description);

    if config.sections.quick_reference {
        let fragment_path = layout.quick_reference();
        match fs::read_to_string(&fragment_path) {
            Ok(quick_ref) => body = format!("{quick_ref}\n{body}"),
            Err(e) => tracing::debug!(
                path = %fragment_path.display(),
                error = %e,
                "quick reference not available, skipping"
            ),
        }
    }

    Ok(render_frontmatter(config.frontmatter.as_ref()) + &body)
}

//! Detection of AI assistants already in use in a project

use std::path::Path;

use super::{ASSISTANTS, Assistant};

/// Detect which assistants are present in the project
///
/// Returns assistants whose folder exists (e.g. `.cursor`, `.roo`), in table order.
pub fn detect_assistants(project_dir: &Path) -> Vec<&'static Assistant> {
    ASSISTANTS
        .iter()
        .filter(|a| project_dir.join(a.folder).is_dir())
        .collect()
}

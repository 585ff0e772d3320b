//! AI assistant definitions and per-assistant configuration
//!
//! This module handles:
//! - The static table of supported assistants (`ASSISTANTS`)
//! - Platform configuration records loaded from bundled JSON (`PlatformConfig`)
//! - Configuration lookup (via `registry`)
//! - Assistant detection in a project (via `detection`)

use serde::Deserialize;
use serde_json::{Map, Value};

pub mod detection;
pub mod registry;

pub use registry::PlatformRegistry;

/// A supported AI coding assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assistant {
    /// Identifier accepted by `--ai` (e.g. "cursor")
    pub id: &'static str,
    /// File stem of the platform configuration (e.g. "agent" for antigravity)
    pub config_stem: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Project folder whose presence indicates the assistant is in use
    pub folder: &'static str,
}

impl Assistant {
    const fn new(
        id: &'static str,
        config_stem: &'static str,
        description: &'static str,
        folder: &'static str,
    ) -> Self {
        Self {
            id,
            config_stem,
            description,
            folder,
        }
    }
}

/// All supported assistants, in display order
pub const ASSISTANTS: &[Assistant] = &[
    Assistant::new("claude", "claude", "Claude Code (Anthropic)", ".claude"),
    Assistant::new("cursor", "cursor", "Cursor Editor", ".cursor"),
    Assistant::new("windsurf", "windsurf", "Windsurf (Codeium)", ".windsurf"),
    Assistant::new("antigravity", "agent", "Antigravity (Google)", ".agent"),
    Assistant::new("copilot", "copilot", "GitHub Copilot", ".github"),
    Assistant::new("kiro", "kiro", "Kiro (AWS)", ".kiro"),
    Assistant::new("codex", "codex", "Codex CLI (OpenAI)", ".codex"),
    Assistant::new("qoder", "qoder", "Qoder", ".qoder"),
    Assistant::new("roocode", "roocode", "Roo Code", ".roo"),
    Assistant::new("gemini", "gemini", "Gemini CLI", ".gemini"),
    Assistant::new("trae", "trae", "Trae (ByteDance)", ".trae"),
    Assistant::new("opencode", "opencode", "OpenCode", ".opencode"),
    Assistant::new("continue", "continue", "Continue.dev", ".continue"),
    Assistant::new("codebuddy", "codebuddy", "CodeBuddy", ".codebuddy"),
];

/// Synthetic identifier that expands to every assistant
pub const ALL_ID: &str = "all";

/// Look up an assistant by identifier
pub fn find_assistant(id: &str) -> Option<&'static Assistant> {
    ASSISTANTS.iter().find(|a| a.id == id)
}

/// Which assistants an install targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantSelection {
    One(String),
    All,
}

impl AssistantSelection {
    pub fn parse(id: &str) -> Self {
        if id == ALL_ID {
            AssistantSelection::All
        } else {
            AssistantSelection::One(id.to_string())
        }
    }
}

/// Document variant an assistant expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallType {
    Full,
    Reference,
    Workflow,
}

impl std::fmt::Display for InstallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstallType::Full => "full",
            InstallType::Reference => "reference",
            InstallType::Workflow => "workflow",
        };
        f.write_str(s)
    }
}

/// Where an assistant keeps its skill files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderStructure {
    /// Project-relative top-level directory (e.g. ".cursor")
    pub root: String,
    /// Sub-path beneath `root` (or beneath `global_root`)
    pub skill_path: String,
    /// Primary document file name
    pub filename: String,
    /// Shared script location used by workflow-style assistants
    #[serde(default)]
    pub shared_path: Option<String>,
    /// Home-relative root for global installs; absent means unsupported
    #[serde(default)]
    pub global_root: Option<String>,
}

/// Content blocks and auxiliary assets enabled for an assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    #[serde(default)]
    pub examples: bool,
    #[serde(default)]
    pub references: bool,
    #[serde(default)]
    pub scripts: bool,
    #[serde(default)]
    pub data: bool,
    #[serde(default)]
    pub quick_reference: bool,
}

/// Ordered string key/value pairs rendered as a YAML header
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Frontmatter(Vec<(String, String)>);

impl Frontmatter {
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TryFrom<Map<String, Value>> for Frontmatter {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                other => Err(format!(
                    "frontmatter value for '{key}' must be a string, got {other}"
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Frontmatter)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Frontmatter(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Configuration for installing a skill into one assistant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    pub display_name: String,
    pub install_type: InstallType,
    pub folder_structure: FolderStructure,
    #[serde(default)]
    pub frontmatter: Option<Frontmatter>,
    #[serde(default)]
    pub sections: Sections,
    pub title: String,
    pub description: String,
}

impl PlatformConfig {
    /// Whether this assistant can be installed into a home-directory location
    pub fn supports_global(&self) -> bool {
        self.folder_structure.global_root.is_some()
    }

    /// Project-relative skill directory, for display
    pub fn project_path(&self) -> String {
        format!(
            "{}/{}/",
            self.folder_structure.root.trim_end_matches('/'),
            self.folder_structure.skill_path.trim_matches('/')
        )
    }
}

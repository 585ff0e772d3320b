//! Error types and handling for the skill installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillError {
    // Platform errors
    #[error("Unknown AI assistant: {id}")]
    #[diagnostic(
        code(taiwan_skill::platform::unknown),
        help(
            "Supported assistants: claude, cursor, windsurf, antigravity, copilot, kiro, codex, \
             qoder, roocode, gemini, trae, opencode, continue, codebuddy (or 'all')"
        )
    )]
    UnknownPlatform { id: String },

    #[error("Global installation is not supported for {platform}")]
    #[diagnostic(
        code(taiwan_skill::platform::global_unsupported),
        help("Install into the project directory instead (omit --global)")
    )]
    GlobalUnsupported { platform: String },

    #[error("Failed to load platform configuration: {path}: {reason}")]
    #[diagnostic(code(taiwan_skill::config::load_failed))]
    ConfigLoadFailure { path: String, reason: String },

    #[error("Refusing to use unsafe path in '{field}': {value}")]
    #[diagnostic(
        code(taiwan_skill::config::unsafe_path),
        help("Paths in platform configuration must be relative and must not contain '..'")
    )]
    UnsafePath { field: String, value: String },

    // Installation errors
    #[error("Skill already installed at: {path}")]
    #[diagnostic(
        code(taiwan_skill::install::already_installed),
        help("Use --force to overwrite the existing installation")
    )]
    AlreadyInstalled { path: String },

    #[error("No AI assistant selected")]
    #[diagnostic(
        code(taiwan_skill::install::no_assistant),
        help("Pass --ai <assistant>, or create an assistant folder (e.g. .cursor/) to auto-detect")
    )]
    NoAssistantSelected,

    #[error("Could not determine home directory")]
    #[diagnostic(code(taiwan_skill::install::no_home))]
    HomeDirUnavailable,

    #[error("Skill assets not found: {path}")]
    #[diagnostic(
        code(taiwan_skill::assets::not_found),
        help("Point --assets (or TAIWAN_SKILL_ASSETS) at the bundled assets directory")
    )]
    AssetsNotFound { path: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(taiwan_skill::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Registry errors
    #[error("Package registry request failed: {message}")]
    #[diagnostic(code(taiwan_skill::registry::request_failed))]
    Registry { message: String },

    // Terminal errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(taiwan_skill::ui::prompt_failed))]
    Prompt { message: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(taiwan_skill::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(taiwan_skill::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillError {
    fn from(err: std::io::Error) -> Self {
        SkillError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::ConfigLoadFailure {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillError {
    fn from(err: inquire::InquireError) -> Self {
        SkillError::Prompt {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SkillError {
    fn from(err: reqwest::Error) -> Self {
        SkillError::Registry {
            message: err.to_string(),
        }
    }
}

/// Creates a configuration load failure for the given path
pub fn config_load_failure(path: impl AsRef<std::path::Path>, reason: impl ToString) -> SkillError {
    SkillError::ConfigLoadFailure {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failure for the given path
pub fn write_failed(path: impl AsRef<std::path::Path>, reason: impl ToString) -> SkillError {
    SkillError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillError>;

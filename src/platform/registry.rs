//! Platform registry for resolving assistant configurations
//!
//! Configurations are read from the bundled JSON files on every lookup;
//! nothing is cached between calls.

use std::fs;

use super::{Assistant, PlatformConfig, find_assistant};
use crate::assets::AssetLayout;
use crate::error::{Result, SkillError, config_load_failure};

/// Registry of platform configurations for one skill
pub struct PlatformRegistry {
    layout: AssetLayout,
}

impl PlatformRegistry {
    /// Create a registry reading from the given skill assets
    pub fn new(layout: AssetLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Get the static assistant entry for an identifier
    ///
    /// `all` is not an assistant; callers expand it themselves.
    pub fn assistant(&self, id: &str) -> Result<&'static Assistant> {
        find_assistant(id).ok_or_else(|| SkillError::UnknownPlatform { id: id.to_string() })
    }

    /// Load the configuration for an assistant identifier
    pub fn resolve(&self, id: &str) -> Result<PlatformConfig> {
        let assistant = self.assistant(id)?;
        let path = self.layout.platform_config(assistant.config_stem);

        let content = fs::read_to_string(&path).map_err(|e| config_load_failure(&path, e))?;
        let config: PlatformConfig =
            serde_json::from_str(&content).map_err(|e| config_load_failure(&path, e))?;

        tracing::debug!(assistant = id, path = %path.display(), "loaded platform config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ASSISTANTS;
    use crate::test_fixtures::create_skill_assets;

    #[test]
    fn test_resolve_all_known_assistants() {
        let (_temp, layout) = create_skill_assets();
        let registry = PlatformRegistry::new(layout);

        for assistant in ASSISTANTS {
            let id = assistant.id;
            let config = registry.resolve(id);
            assert!(config.is_ok(), "{id} should resolve: {config:?}");
        }
    }

    #[test]
    fn test_resolve_unknown_assistant() {
        let (_temp, layout) = create_skill_assets();
        let registry = PlatformRegistry::new(layout);

        let result = registry.resolve("not-a-real-id");
        assert!(matches!(result, Err(SkillError::UnknownPlatform { .. })));
    }

    #[test]
    fn test_resolve_all_is_not_an_assistant() {
        let (_temp, layout) = create_skill_assets();
        let registry = PlatformRegistry::new(layout);

        let result = registry.resolve("all");
        assert!(matches!(result, Err(SkillError::UnknownPlatform { .. })));
    }

    #[test]
    fn test_resolve_uses_config_stem() {
        let (_temp, layout) = create_skill_assets();
        let registry = PlatformRegistry::new(layout);

        let config = registry.resolve("antigravity").unwrap();
        assert_eq!(config.folder_structure.root, ".agent");
    }

    #[test]
    fn test_resolve_corrupt_config() {
        let (_temp, layout) = create_skill_assets();
        std::fs::write(layout.platform_config("cursor"), "{ not json").unwrap();
        let registry = PlatformRegistry::new(layout);

        let result = registry.resolve("cursor");
        assert!(matches!(result, Err(SkillError::ConfigLoadFailure { .. })));
    }

    #[test]
    fn test_resolve_missing_config() {
        let (_temp, layout) = create_skill_assets();
        std::fs::remove_file(layout.platform_config("kiro")).unwrap();
        let registry = PlatformRegistry::new(layout);

        let result = registry.resolve("kiro");
        assert!(matches!(result, Err(SkillError::ConfigLoadFailure { .. })));
    }
}

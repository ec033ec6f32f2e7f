// SkillForge Engine: Canonical Registries
//
// The category slugs and platform tokens a skill may declare. The sets are
// owned by the surrounding application. This module only holds a copy and
// answers membership questions. `Registry::default()` uses the built-in sets
// from atoms/constants.rs; deployments can load their own from TOML:
//
//   categories = ["build", "test"]
//   platforms  = ["CLAUDE_CODE", "CURSOR"]

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::atoms::constants::{CATEGORY_SLUGS, PLATFORM_TOKENS};
use crate::atoms::error::{SkillError, SkillResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RegistryFile")]
pub struct Registry {
    categories: BTreeSet<String>,
    platforms: BTreeSet<String>,
}

/// On-disk shape, checked before it becomes a `Registry`.
#[derive(Deserialize)]
struct RegistryFile {
    categories: BTreeSet<String>,
    platforms: BTreeSet<String>,
}

impl TryFrom<RegistryFile> for Registry {
    type Error = SkillError;

    fn try_from(file: RegistryFile) -> SkillResult<Self> {
        Self::new(file.categories, file.platforms)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            categories: CATEGORY_SLUGS.iter().map(|s| s.to_string()).collect(),
            platforms: PLATFORM_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Registry {
    /// Build a registry from explicit sets, applying the same shape checks
    /// as the loaders.
    pub fn new<C, P>(categories: C, platforms: P) -> SkillResult<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let registry = Self {
            categories: categories.into_iter().map(Into::into).collect(),
            platforms: platforms.into_iter().map(Into::into).collect(),
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a registry TOML document.
    pub fn from_toml_str(content: &str) -> SkillResult<Self> {
        let file: RegistryFile = toml::from_str(content)?;
        let registry = Registry::try_from(file)?;
        log::debug!(
            "[skill-registry] Loaded {} categories, {} platforms",
            registry.categories.len(),
            registry.platforms.len()
        );
        Ok(registry)
    }

    /// Read and parse a registry TOML file.
    pub fn load(path: &Path) -> SkillResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).inspect_err(|e| {
            log::warn!("[skill-registry] Rejected {}: {}", path.display(), e);
        })
    }

    pub fn is_category(&self, slug: &str) -> bool {
        self.categories.contains(slug)
    }

    pub fn is_platform(&self, token: &str) -> bool {
        self.platforms.contains(token)
    }

    /// Sorted, comma-separated slugs for error messages.
    pub fn category_list(&self) -> String {
        join(&self.categories)
    }

    /// Sorted, comma-separated tokens for error messages.
    pub fn platform_list(&self) -> String {
        join(&self.platforms)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(String::as_str)
    }

    fn validate(&self) -> SkillResult<()> {
        if self.categories.is_empty() {
            return Err(SkillError::Registry("category set is empty".into()));
        }
        if self.platforms.is_empty() {
            return Err(SkillError::Registry("platform set is empty".into()));
        }
        if let Some(bad) = self.categories.iter().find(|s| !is_slug(s)) {
            return Err(SkillError::Registry(format!(
                "category '{bad}' is not a lowercase slug (use a-z, 0-9, -)"
            )));
        }
        if let Some(bad) = self.platforms.iter().find(|s| !is_platform_token(s)) {
            return Err(SkillError::Registry(format!(
                "platform '{bad}' is not an uppercase token (use A-Z, 0-9, _)"
            )));
        }
        Ok(())
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_platform_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

//! Style registry: the merged view of declared and dynamically minted styles.

use std::collections::BTreeMap;

use super::naming;
use super::types::{StyleDefinition, StyleName};

/// Holds the styles known to one attachment.
///
/// Statically declared styles and dynamically minted ones are kept apart so
/// a merge can always favor the declaration: a static style shadows any
/// dynamic style with the same name, and registering a token whose derived
/// name collides with a static style is a no-op.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    statics: BTreeMap<StyleName, StyleDefinition>,
    dynamics: BTreeMap<StyleName, StyleDefinition>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the declared styles of an attachment.
    pub fn from_static(styles: impl IntoIterator<Item = StyleDefinition>) -> Self {
        let mut registry = Self::new();
        for style in styles {
            registry.statics.insert(style.name.clone(), style);
        }
        registry
    }

    /// Register a dynamic style from its raw token and return the name it is
    /// known under. Idempotent: a token already registered (or shadowed by a
    /// static style of the same derived name) leaves the registry unchanged.
    pub fn insert_dynamic(&mut self, token: &str) -> StyleName {
        let name = naming::dynamic_style_name(token);
        if self.statics.contains_key(&name) || self.dynamics.contains_key(&name) {
            return name;
        }
        tracing::debug!(style = %name, %token, "registering dynamic style");
        self.dynamics
            .insert(name.clone(), StyleDefinition::new_dynamic(name.clone(), token));
        name
    }

    pub fn contains(&self, name: &StyleName) -> bool {
        self.statics.contains_key(name) || self.dynamics.contains_key(name)
    }

    pub fn get(&self, name: &StyleName) -> Option<&StyleDefinition> {
        self.statics.get(name).or_else(|| self.dynamics.get(name))
    }

    /// Merged view of every known style, static definitions winning on
    /// name collisions.
    pub fn styles(&self) -> BTreeMap<StyleName, StyleDefinition> {
        let mut merged = self.dynamics.clone();
        for (name, style) in &self.statics {
            merged.insert(name.clone(), style.clone());
        }
        merged
    }

    /// Only the dynamically minted styles.
    pub fn dynamic_styles(&self) -> BTreeMap<StyleName, StyleDefinition> {
        self.dynamics.clone()
    }

    pub fn len(&self) -> usize {
        self.styles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.dynamics.is_empty()
    }
}

use std::collections::BTreeMap;

use serde::Deserialize;

use super::errors::MalformedConfig;
use super::resolved::{ConfigDescriptor, ThemeConfig, TokenValue};
use super::util::is_blank;

/// Mirror of the descriptor file representation before validation is applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawDescriptor {
    content: Option<Vec<String>>,
    theme: ThemeSection,
    plugins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ThemeSection {
    #[serde(rename = "fontFamily", alias = "font_family", alias = "fontfamily")]
    font_family: BTreeMap<String, Vec<String>>,
    extend: BTreeMap<String, BTreeMap<String, TokenValue>>,
}

impl RawDescriptor {
    /// Convert the raw descriptor into a [`ConfigDescriptor`], validating the
    /// shape constraints the consuming pipeline relies on.
    pub(super) fn resolve(self) -> Result<ConfigDescriptor, MalformedConfig> {
        let content = self
            .content
            .ok_or_else(|| MalformedConfig::missing("content"))?;
        for (index, glob) in content.iter().enumerate() {
            if is_blank(glob) {
                return Err(MalformedConfig::invalid(
                    format!("content[{index}]"),
                    glob.clone(),
                    "glob pattern must not be empty",
                ));
            }
        }
        if content.is_empty() {
            log::warn!("descriptor `content` is empty; no files will be scanned for class usage");
        }

        let mut font_family = BTreeMap::new();
        for (role, stack) in self.theme.font_family {
            if is_blank(&role) {
                return Err(MalformedConfig::invalid(
                    "theme.fontFamily",
                    role,
                    "role name must not be empty",
                ));
            }
            if stack.is_empty() {
                return Err(MalformedConfig::invalid(
                    format!("theme.fontFamily.{role}"),
                    "[]",
                    "must list at least one font",
                ));
            }
            if let Some(font) = stack.iter().find(|font| is_blank(font)) {
                return Err(MalformedConfig::invalid(
                    format!("theme.fontFamily.{role}"),
                    font.clone(),
                    "font names must not be empty",
                ));
            }
            font_family.insert(role, stack);
        }

        let mut extend = BTreeMap::new();
        for (category, tokens) in self.theme.extend {
            if is_blank(&category) {
                return Err(MalformedConfig::invalid(
                    "theme.extend",
                    category,
                    "category name must not be empty",
                ));
            }
            if let Some(token) = tokens.keys().find(|token| is_blank(token)) {
                return Err(MalformedConfig::invalid(
                    format!("theme.extend.{category}"),
                    token.clone(),
                    "token name must not be empty",
                ));
            }
            extend.insert(category, tokens);
        }

        let plugins = self.plugins.unwrap_or_default();
        for (index, plugin) in plugins.iter().enumerate() {
            if is_blank(plugin) {
                return Err(MalformedConfig::invalid(
                    format!("plugins[{index}]"),
                    plugin.clone(),
                    "plugin name must not be empty",
                ));
            }
        }

        Ok(ConfigDescriptor {
            content,
            theme: ThemeConfig {
                font_family,
                extend,
            },
            plugins,
        })
    }
}

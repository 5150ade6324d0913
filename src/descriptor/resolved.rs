use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Build-ready descriptor derived from the configuration file.
///
/// Constructed once at pipeline startup and read-only thereafter. The serde
/// representation matches the descriptor file schema exactly, so serializing
/// a descriptor and re-parsing it yields a structurally identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDescriptor {
    /// Ordered glob patterns selecting the files scanned for class usage.
    pub content: Vec<String>,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Plugin identifiers activated by the consuming pipeline.
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// Typography defaults and design-token overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Font-family fallback lists keyed by role. Sequence order is the
    /// fallback priority.
    #[serde(rename = "fontFamily", alias = "font_family", alias = "fontfamily", default)]
    pub font_family: BTreeMap<String, Vec<String>>,
    /// Token values layered over the pipeline's built-in defaults, keyed by
    /// category and then token name.
    #[serde(default)]
    pub extend: BTreeMap<String, BTreeMap<String, TokenValue>>,
}

/// Literal design-token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    String(String),
    Number(serde_json::Number),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl ConfigDescriptor {
    /// Render a human readable summary of the effective descriptor.
    pub fn summary(&self) -> String {
        let mut out = String::from("Effective descriptor:\n");
        if self.content.is_empty() {
            out.push_str("  Content globs: (none)\n");
        } else {
            let _ = writeln!(out, "  Content globs: {}", self.content.join(", "));
        }
        for (role, stack) in &self.theme.font_family {
            let _ = writeln!(out, "  Font family `{role}`: {}", stack.join(", "));
        }
        for (category, tokens) in &self.theme.extend {
            for (token, value) in tokens {
                let _ = writeln!(out, "  Theme token {category}.{token}: {value}");
            }
        }
        if !self.plugins.is_empty() {
            let _ = writeln!(out, "  Plugins: {}", self.plugins.join(", "));
        }
        out
    }
}

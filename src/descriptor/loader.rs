use std::path::Path;

use config::{Config, File};

use super::errors::MalformedConfig;
use super::raw::RawDescriptor;
use super::resolved::ConfigDescriptor;

/// Load the descriptor from the file at `path`.
///
/// The format is inferred from the file extension (TOML or JSON). Any
/// structural deviation is reported as [`MalformedConfig`].
pub fn load(path: &Path) -> Result<ConfigDescriptor, MalformedConfig> {
    let settings = Config::builder()
        .add_source(File::from(path.to_path_buf()).required(true))
        .build()?;
    let raw: RawDescriptor = settings.try_deserialize()?;
    raw.resolve()
}

/// Parse a descriptor from an in-memory JSON document.
pub fn from_json_str(text: &str) -> Result<ConfigDescriptor, MalformedConfig> {
    let raw: RawDescriptor = serde_json::from_str(text)
        .map_err(|err| MalformedConfig::invalid("descriptor", "(document)", err.to_string()))?;
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::descriptor::TokenValue;

    const REFERENCE: &str = r#"{
        "content": ["./index.html", "./src/**/*.{js,ts,jsx,tsx}"],
        "theme": {
            "fontFamily": {
                "sans": ["\"Roboto Mono\"", "monospace"]
            },
            "extend": {
                "height": {
                    "screen": "100dvh"
                }
            }
        },
        "plugins": []
    }"#;

    #[test]
    fn reference_descriptor_loads() {
        let descriptor = from_json_str(REFERENCE).unwrap();
        assert_eq!(
            descriptor.content,
            vec!["./index.html", "./src/**/*.{js,ts,jsx,tsx}"]
        );
        assert_eq!(
            descriptor.theme.font_family["sans"][0],
            "\"Roboto Mono\""
        );
        assert_eq!(
            descriptor.theme.extend["height"]["screen"],
            TokenValue::String("100dvh".to_string())
        );
        assert!(descriptor.plugins.is_empty());
    }

    #[test]
    fn non_list_content_is_malformed() {
        let err = from_json_str(r#"{"content": "./index.html"}"#).unwrap_err();
        assert_eq!(err.key, "descriptor");
    }

    #[test]
    fn missing_theme_defaults_to_empty_maps() {
        let descriptor = from_json_str(r#"{"content": ["./index.html"]}"#).unwrap();
        assert!(descriptor.theme.font_family.is_empty());
        assert!(descriptor.theme.extend.is_empty());
    }

    #[test]
    fn serialized_descriptor_reparses_identically() {
        let descriptor = from_json_str(REFERENCE).unwrap();
        let json = serde_json::to_string(&descriptor).unwrap();
        let reparsed = from_json_str(&json).unwrap();
        assert_eq!(descriptor, reparsed);
    }

    #[test]
    fn json_file_loads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weft.config.json");
        fs::write(&path, REFERENCE).unwrap();

        let descriptor = load(&path).unwrap();
        assert_eq!(descriptor.content.len(), 2);
        assert_eq!(descriptor.theme.font_family["sans"].len(), 2);
    }

    #[test]
    fn toml_file_loads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weft.config.toml");
        fs::write(
            &path,
            r#"
content = ["./index.html"]

[theme.font_family]
sans = ['"Roboto Mono"', "monospace"]

[theme.extend.height]
screen = "100dvh"

[theme.extend.opacity]
"15" = 0.15
"#,
        )
        .unwrap();

        let descriptor = load(&path).unwrap();
        assert_eq!(descriptor.content, vec!["./index.html"]);
        assert_eq!(descriptor.theme.font_family["sans"][1], "monospace");
        assert_eq!(
            descriptor.theme.extend["height"]["screen"],
            TokenValue::String("100dvh".to_string())
        );
        assert!(matches!(
            descriptor.theme.extend["opacity"]["15"],
            TokenValue::Number(_)
        ));
    }

    #[test]
    fn missing_file_is_malformed() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.key, "descriptor");
    }
}

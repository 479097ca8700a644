//! libshuangpin-core
//!
//! Scheme-agnostic pieces shared by double pinyin (shuangpin) crates such as
//! `libxiaohe`.
//!
//! Public API:
//! - `split_keys` / `HighlightSet` - turn key code strings into keys to press
//! - `KeyboardDiagram` / `KeyHighlighter` - recolor keys in an SVG keyboard template
//! - `to_data_uri` / `markdown_image` - embeddable payloads for rendered diagrams
//! - `normalize_pinyin` - fold tone marks and tone numbers into plain pinyin
//! - `Config` - diagram, palette and logging configuration
//! - `DiagramError` - loader errors
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod error;
pub use error::{DiagramError, Result};

pub mod key_code;
pub use key_code::{is_key, split_keys, HighlightSet, UNKNOWN_KEY};

pub mod diagram;
pub use diagram::{highlight, DiagramClasses, KeyHighlighter, KeyboardDiagram, Palette};

pub mod data_uri;
pub use data_uri::{markdown_image, to_data_uri, SVG_DATA_URI_PREFIX};

pub mod tone;
pub use tone::normalize_pinyin;

/// Generic configuration for keyboard rendering.
///
/// Scheme crates extend this with their own options by flattening it into
/// their config struct (see `libxiaohe::XiaoheConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Keyboard template on disk. `None` uses the template bundled with the
    /// scheme crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram_path: Option<PathBuf>,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Neutral and highlight fills
    pub palette: Palette,

    /// Class names of the background, label and annotation elements
    pub classes: DiagramClasses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diagram_path: None,
            log_filter: "warn".to_string(),
            palette: Palette::default(),
            classes: DiagramClasses::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid TOML for this type.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DiagramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    ///
    /// # Errors
    /// Fails when serialization or the write fails.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| DiagramError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Highlighter built from this config's palette and class names.
    pub fn highlighter(&self) -> KeyHighlighter {
        KeyHighlighter::new(self.palette.clone(), self.classes.clone())
    }

    /// Load the configured template, if one is configured.
    ///
    /// # Errors
    /// Propagates [`KeyboardDiagram::load`] failures.
    pub fn load_diagram(&self) -> Result<Option<KeyboardDiagram>> {
        self.diagram_path
            .as_ref()
            .map(KeyboardDiagram::load)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.diagram_path.is_none());
    }

    #[test]
    fn partial_palette_keeps_other_defaults() {
        let cfg = Config::from_toml_str(
            r##"
            [palette]
            key_highlight_fill = "#00aa00"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.palette.key_highlight_fill, "#00aa00");
        assert_eq!(cfg.palette.key_fill, Palette::default().key_fill);
        assert_eq!(cfg.classes, DiagramClasses::default());
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = Config::default();
        cfg.diagram_path = Some(PathBuf::from("/tmp/keyboard.svg"));
        cfg.log_filter = "libxiaohe=debug".to_string();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = Config::from_toml_str("palette = 3").unwrap_err();
        assert!(matches!(err, DiagramError::Config(_)));
    }

    #[test]
    fn no_diagram_path_loads_nothing() {
        assert!(Config::default().load_diagram().unwrap().is_none());
    }
}

//! Xiaohe-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libshuangpin_core::Config` (flattened via serde)
//! - Tone-mark normalization of the input
//! - How zero-initial syllables are typed
//!
//! # Example
//!
//! ```rust
//! use libxiaohe::XiaoheConfig;
//!
//! let config = XiaoheConfig::from_toml_str(r#"
//!     zero_initial = "doubled"
//!     log_filter = "libxiaohe=debug"
//! "#).unwrap();
//! assert_eq!(config.converter().convert("ang"), "ah");
//! ```
use serde::{Deserialize, Serialize};

use libshuangpin_core::{DiagramError, Result};

use crate::converter::{XiaoheConverter, ZeroInitialStyle};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct XiaoheConfig {
    /// Strip tone marks / tone numbers before converting
    pub normalize_tones: bool,

    /// Typing convention for syllables without an initial
    pub zero_initial: ZeroInitialStyle,

    /// Base configuration fields (diagram, palette, classes, logging)
    #[serde(flatten)]
    pub base: libshuangpin_core::Config,
}

impl Default for XiaoheConfig {
    fn default() -> Self {
        Self {
            normalize_tones: true,
            zero_initial: ZeroInitialStyle::Bare,
            base: libshuangpin_core::Config::default(),
        }
    }
}

impl XiaoheConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or does not parse.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DiagramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Converter configured from this config.
    pub fn converter(&self) -> XiaoheConverter {
        XiaoheConverter::new()
            .with_tone_normalization(self.normalize_tones)
            .with_zero_initial(self.zero_initial)
    }

    /// Convert this config into the base config
    pub fn into_base(self) -> libshuangpin_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libshuangpin_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libshuangpin_core::Config {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = XiaoheConfig::default();
        assert!(cfg.normalize_tones);
        assert_eq!(cfg.zero_initial, ZeroInitialStyle::Bare);
        assert_eq!(cfg.base().log_filter, "warn");
    }

    #[test]
    fn flattened_base_fields_parse() {
        let cfg = XiaoheConfig::from_toml_str(
            r##"
            normalize_tones = false
            diagram_path = "keyboard.svg"

            [palette]
            key_highlight_fill = "#123456"
            "##,
        )
        .unwrap();
        assert!(!cfg.normalize_tones);
        assert_eq!(
            cfg.base.diagram_path.as_deref(),
            Some(std::path::Path::new("keyboard.svg"))
        );
        assert_eq!(cfg.base.palette.key_highlight_fill, "#123456");
        assert_eq!(cfg.base.palette.key_fill, "#f4f4f5");
    }

    #[test]
    fn round_trip() {
        let mut cfg = XiaoheConfig::default();
        cfg.zero_initial = ZeroInitialStyle::Doubled;
        cfg.base_mut().log_filter = "debug".to_string();
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("zero_initial = \"doubled\""));
        assert_eq!(XiaoheConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn converter_follows_config() {
        let cfg = XiaoheConfig::default();
        assert_eq!(cfg.converter().convert("zhōng"), "vs");
        let raw = XiaoheConfig {
            normalize_tones: false,
            ..XiaoheConfig::default()
        };
        assert_eq!(raw.converter().convert("zhōng"), "zhōng");
    }
}

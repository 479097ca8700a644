//! Xiaohe keyboard: converter + highlighted diagram in one place.
//!
//! `XiaoheKeyboard` is what a UI holds on to. It owns a validated template
//! (the bundled one by default), a highlighter and a converter, and turns a
//! pinyin string into key codes plus a highlighted SVG in a single call.

use std::sync::Arc;

use libshuangpin_core::{
    markdown_image, split_keys, to_data_uri, HighlightSet, KeyHighlighter, KeyboardDiagram,
    Result,
};
use once_cell::sync::Lazy;

use crate::config::XiaoheConfig;
use crate::converter::XiaoheConverter;

/// The keyboard template shipped with the crate.
pub const BUNDLED_KEYBOARD_SVG: &str = include_str!("../assets/xiaohe-keyboard.svg");

static BUNDLED: Lazy<Arc<KeyboardDiagram>> = Lazy::new(|| {
    let diagram =
        KeyboardDiagram::from_svg(BUNDLED_KEYBOARD_SVG).expect("bundled keyboard template is valid");
    Arc::new(diagram)
});

/// Every key a Xiaohe code can contain.
pub fn xiaohe_keys() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Result of rendering one pinyin string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Space separated key codes
    pub codes: String,
    /// Keys to press, in typing order (`?` and whitespace removed)
    pub keys: Vec<char>,
    /// Highlighted SVG document
    pub svg: String,
}

impl Rendering {
    pub fn highlight_set(&self) -> HighlightSet {
        self.keys.iter().collect()
    }

    pub fn data_uri(&self) -> String {
        to_data_uri(&self.svg)
    }

    /// Markdown image with the key codes as alt text.
    pub fn markdown(&self) -> String {
        let alt = if self.codes.trim().is_empty() {
            "Xiaohe keyboard"
        } else {
            self.codes.as_str()
        };
        markdown_image(alt, &self.svg)
    }
}

#[derive(Debug, Clone)]
pub struct XiaoheKeyboard {
    diagram: Arc<KeyboardDiagram>,
    highlighter: KeyHighlighter,
    converter: XiaoheConverter,
}

impl Default for XiaoheKeyboard {
    fn default() -> Self {
        Self::bundled()
    }
}

impl XiaoheKeyboard {
    /// Keyboard backed by the bundled template and the same settings as
    /// `XiaoheConfig::default()` (tone marks and numbers are folded).
    pub fn bundled() -> Self {
        Self {
            diagram: Arc::clone(&BUNDLED),
            highlighter: KeyHighlighter::default(),
            converter: XiaoheConfig::default().converter(),
        }
    }

    pub fn with_diagram(diagram: KeyboardDiagram) -> Self {
        Self {
            diagram: Arc::new(diagram),
            ..Self::bundled()
        }
    }

    /// Build a keyboard from configuration, loading the configured template
    /// (or the bundled one) up front.
    ///
    /// # Errors
    /// Fails when a configured template cannot be read or is not a usable
    /// keyboard template.
    pub fn from_config(config: &XiaoheConfig) -> Result<Self> {
        let diagram = match config.base.load_diagram()? {
            Some(diagram) => {
                let missing: String = diagram.missing_keys(xiaohe_keys()).into_iter().collect();
                if !missing.is_empty() {
                    tracing::warn!(missing = %missing, "keyboard template has no group for some keys");
                }
                Arc::new(diagram)
            }
            None => Arc::clone(&BUNDLED),
        };
        Ok(Self {
            diagram,
            highlighter: config.base.highlighter(),
            converter: config.converter(),
        })
    }

    #[must_use]
    pub fn with_converter(mut self, converter: XiaoheConverter) -> Self {
        self.converter = converter;
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: KeyHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn diagram(&self) -> &KeyboardDiagram {
        &self.diagram
    }

    pub fn converter(&self) -> &XiaoheConverter {
        &self.converter
    }

    pub fn highlighter(&self) -> &KeyHighlighter {
        &self.highlighter
    }

    /// Highlight the keys of already converted codes.
    pub fn highlight_codes(&self, codes: &str) -> String {
        self.diagram.render(&self.highlighter, split_keys(codes))
    }

    /// Convert `pinyin` and highlight the resulting keys.
    pub fn render(&self, pinyin: &str) -> Rendering {
        let codes = self.converter.convert(pinyin);
        let keys = split_keys(&codes);
        let svg = self.diagram.render(&self.highlighter, keys.iter().copied());
        Rendering { codes, keys, svg }
    }
}

/// Highlighted bundled keyboard for `pinyin`, with default settings.
pub fn highlight_pinyin(pinyin: &str) -> String {
    XiaoheKeyboard::bundled().render(pinyin).svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_template_has_every_key() {
        let kb = XiaoheKeyboard::bundled();
        assert!(kb.diagram().missing_keys(xiaohe_keys()).is_empty());
        assert_eq!(kb.diagram().key_ids().count(), 26);
    }

    #[test]
    fn render_collects_codes_and_keys() {
        let r = XiaoheKeyboard::bundled().render("ni h");
        assert_eq!(r.codes, "ni h?");
        assert_eq!(r.keys, vec!['n', 'i', 'h']);
        assert_ne!(r.svg, BUNDLED_KEYBOARD_SVG);
        assert!(r.data_uri().starts_with("data:image/svg+xml"));
        assert!(r.markdown().starts_with("![ni h?](data:image/svg+xml"));
    }

    #[test]
    fn empty_input_renders_pristine_template() {
        let r = XiaoheKeyboard::bundled().render("");
        assert_eq!(r.codes, "");
        assert!(r.keys.is_empty());
        assert_eq!(r.svg, BUNDLED_KEYBOARD_SVG);
        assert!(r.markdown().starts_with("![Xiaohe keyboard]("));
    }

    #[test]
    fn highlight_codes_matches_render() {
        let kb = XiaoheKeyboard::bundled();
        assert_eq!(kb.highlight_codes("vs go"), kb.render("zhong guo").svg);
        assert_eq!(highlight_pinyin("zhong guo"), kb.render("zhong guo").svg);
    }
}

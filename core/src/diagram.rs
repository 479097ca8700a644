//! Keyboard diagram template and key highlighting.
//!
//! The template is an SVG document in which every physical key is a flat
//! (non-nested) group:
//!
//! ```text
//! <g id="n" class="key">
//!   <rect class="key-bg" ... fill="#f4f4f5"/>
//!   <text class="key-label" ... fill="#18181b">N</text>
//!   <text class="key-annotation" ... fill="#71717a">iao</text>
//! </g>
//! ```
//!
//! Highlighting never touches the template. Each call produces a fresh
//! document in which the requested groups have their pristine neutral fills
//! swapped for the highlight palette. Fills that are not the neutral value are
//! left alone, so rendering an already highlighted document is a no-op.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, Result};
use crate::key_code::HighlightSet;

/// One key group: opening tag, id, body, closing tag.
static KEY_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<g\s(?:[^>]*\s)?id="([^"]+)"[^>]*>)(.*?)(</g>)"#)
        .expect("key group pattern is valid")
});

/// Any opening (or self-closing) element tag.
static ELEMENT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][^>]*>").expect("element tag pattern is valid"));

/// An opening `<g` tag, used to spot groups nested inside a key group.
static GROUP_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<g[\s>/]").expect("group open pattern is valid"));

static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sclass="([^"]*)""#).expect("class attribute pattern is valid"));

/// Fill colors used for neutral and highlighted keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    /// Background fill of a key in the pristine template
    pub key_fill: String,
    /// Background fill of a highlighted key
    pub key_highlight_fill: String,
    /// Primary label fill in the pristine template
    pub label_fill: String,
    /// Annotation fill in the pristine template
    pub annotation_fill: String,
    /// Text fill used for both labels of a highlighted key
    pub highlight_text_fill: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            key_fill: "#f4f4f5".to_string(),
            key_highlight_fill: "#2563eb".to_string(),
            label_fill: "#18181b".to_string(),
            annotation_fill: "#71717a".to_string(),
            highlight_text_fill: "#ffffff".to_string(),
        }
    }
}

/// Class names that tag the three parts of a key group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagramClasses {
    pub background: String,
    pub label: String,
    pub annotation: String,
}

impl Default for DiagramClasses {
    fn default() -> Self {
        Self {
            background: "key-bg".to_string(),
            label: "key-label".to_string(),
            annotation: "key-annotation".to_string(),
        }
    }
}

/// Recolors key groups of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHighlighter {
    palette: Palette,
    classes: DiagramClasses,
}

impl KeyHighlighter {
    pub fn new(palette: Palette, classes: DiagramClasses) -> Self {
        Self { palette, classes }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn classes(&self) -> &DiagramClasses {
        &self.classes
    }

    /// Return a copy of `template` with every group named in `keys` recolored.
    ///
    /// Keys without a matching group are ignored, as are repeated keys.
    pub fn highlight<I>(&self, template: &str, keys: I) -> String
    where
        I: IntoIterator<Item = char>,
    {
        let keys: HighlightSet = keys.into_iter().collect();
        if keys.is_empty() {
            return template.to_string();
        }

        let mut recolored = 0usize;
        let out = KEY_GROUP.replace_all(template, |caps: &Captures<'_>| {
            let id = &caps[2];
            let mut chars = id.chars();
            let wanted = match (chars.next(), chars.next()) {
                (Some(key), None) => keys.contains(key),
                _ => false,
            };
            if !wanted {
                return caps[0].to_string();
            }
            recolored += 1;
            format!(
                "{}{}{}",
                &caps[1],
                self.recolor_group_body(&caps[3]),
                &caps[4]
            )
        });

        tracing::debug!(
            requested = %keys.to_key_string(),
            recolored,
            "highlighted keyboard diagram"
        );
        out.into_owned()
    }

    fn recolor_group_body(&self, body: &str) -> String {
        ELEMENT_TAG
            .replace_all(body, |caps: &Captures<'_>| self.recolor_tag(&caps[0]))
            .into_owned()
    }

    fn recolor_tag(&self, tag: &str) -> String {
        let Some(class_caps) = CLASS_ATTR.captures(tag) else {
            return tag.to_string();
        };
        let classes: Vec<&str> = class_caps[1].split_whitespace().collect();
        let has = |name: &str| classes.iter().any(|c| *c == name);

        let p = &self.palette;
        if has(&self.classes.background) {
            swap_fill(tag, &p.key_fill, &p.key_highlight_fill)
        } else if has(&self.classes.label) {
            swap_fill(tag, &p.label_fill, &p.highlight_text_fill)
        } else if has(&self.classes.annotation) {
            swap_fill(tag, &p.annotation_fill, &p.highlight_text_fill)
        } else {
            tag.to_string()
        }
    }
}

/// Replace `fill="<from>"` with `fill="<to>"`; anything else stays as is.
fn swap_fill(tag: &str, from: &str, to: &str) -> String {
    let needle = format!("fill=\"{from}\"");
    tag.replacen(&needle, &format!("fill=\"{to}\""), 1)
}

/// Highlight `keys` in `template` using the default palette and class names.
pub fn highlight<I>(template: &str, keys: I) -> String
where
    I: IntoIterator<Item = char>,
{
    KeyHighlighter::default().highlight(template, keys)
}

/// A validated keyboard template.
#[derive(Debug, Clone)]
pub struct KeyboardDiagram {
    template: String,
    key_ids: BTreeSet<String>,
}

impl KeyboardDiagram {
    /// Validate an SVG template.
    ///
    /// # Errors
    /// Returns [`DiagramError::InvalidTemplate`] when the document has no
    /// `<svg` root, contains no key groups, or nests a group inside a group
    /// that carries an `id` (key groups must be flat).
    pub fn from_svg(svg: impl Into<String>) -> Result<Self> {
        let template = svg.into();
        if !template.contains("<svg") {
            return Err(DiagramError::InvalidTemplate(
                "missing <svg> root element".to_string(),
            ));
        }
        let mut key_ids = BTreeSet::new();
        for caps in KEY_GROUP.captures_iter(&template) {
            if GROUP_OPEN.is_match(&caps[3]) {
                return Err(DiagramError::InvalidTemplate(format!(
                    "group \"{}\" contains nested groups",
                    &caps[2]
                )));
            }
            key_ids.insert(caps[2].to_string());
        }
        if key_ids.is_empty() {
            return Err(DiagramError::InvalidTemplate(
                "no key groups (<g id=\"...\">) found".to_string(),
            ));
        }
        Ok(Self { template, key_ids })
    }

    /// Read and validate a template from disk.
    ///
    /// Key groups must be flat `<g id="...">` elements; see [`Self::from_svg`].
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not a usable template.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let svg = std::fs::read_to_string(path).map_err(|source| DiagramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let diagram = Self::from_svg(svg)?;
        tracing::info!(
            path = %path.display(),
            keys = diagram.key_ids.len(),
            "loaded keyboard template"
        );
        Ok(diagram)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Group identifiers present in the template, sorted.
    pub fn key_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.key_ids.iter().map(String::as_str)
    }

    pub fn has_key(&self, key: char) -> bool {
        let mut buf = [0u8; 4];
        self.key_ids.contains(&*key.encode_utf8(&mut buf))
    }

    /// Keys from `expected` that have no group in this template.
    pub fn missing_keys<I>(&self, expected: I) -> Vec<char>
    where
        I: IntoIterator<Item = char>,
    {
        expected.into_iter().filter(|k| !self.has_key(*k)).collect()
    }

    /// Render a highlighted copy of this template.
    pub fn render<I>(&self, highlighter: &KeyHighlighter, keys: I) -> String
    where
        I: IntoIterator<Item = char>,
    {
        highlighter.highlight(&self.template, keys)
    }
}

// libshuangpin/libxiaohe/src/converter.rs
//
// Full pinyin -> Xiaohe key code conversion.
//
// Every whitespace separated token is split into (initial, final) by a single
// anchored pattern: one of the retroflexes zh/ch/sh is tried first, then any
// simple consonant, and whatever letters remain form the final. Both halves are
// looked up independently; a miss is written as `?` in that position.
//
// Tokens the pattern cannot split at all (digits, punctuation, non-ASCII
// letters) are passed through unchanged. Partial matches are kept as they
// are: "time" splits into "t" + "ime" and yields "t?".

use libshuangpin_core::{normalize_pinyin, UNKNOWN_KEY};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tables::{FINALS, INITIALS, ZERO_INITIAL};

static SYLLABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(zh|ch|sh|[bpmfdtnlgkhjqxrzcsyw])?([a-z]*)$").expect("syllable pattern is valid")
});

/// How syllables without an initial (`a`, `ai`, `ang`, ...) are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroInitialStyle {
    /// The empty initial types no key: `ai` -> `d`, `a` -> `a`.
    #[default]
    Bare,
    /// Conventional Xiaohe typing: `a` -> `aa`, `ai` -> `ai`, `ang` -> `ah`.
    Doubled,
}

/// How one input token was converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableBreakdown {
    /// The token after lower-casing (and tone normalization, when enabled)
    pub token: String,
    /// Matched initial; `None` when the token could not be split
    pub initial: Option<String>,
    /// Matched final; `None` when the token could not be split
    #[serde(rename = "final")]
    pub final_part: Option<String>,
    /// Resulting key code (the token itself when unparsed)
    pub code: String,
}

impl SyllableBreakdown {
    pub fn parsed(&self) -> bool {
        self.initial.is_some()
    }

    /// Whether both halves of the syllable found a key.
    pub fn is_complete(&self) -> bool {
        self.parsed() && !self.code.contains(UNKNOWN_KEY)
    }
}

/// Converter from full pinyin to Xiaohe key codes.
///
/// The default converter lower-cases its input and nothing else; see
/// [`XiaoheConverter::with_tone_normalization`] and
/// [`XiaoheConverter::with_zero_initial`] for the optional behaviours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XiaoheConverter {
    normalize_tones: bool,
    zero_initial: ZeroInitialStyle,
}

impl XiaoheConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold tone marks (`zhōng`), `ü` and tone numbers (`zhong1`) before converting.
    #[must_use]
    pub fn with_tone_normalization(mut self, enabled: bool) -> Self {
        self.normalize_tones = enabled;
        self
    }

    #[must_use]
    pub fn with_zero_initial(mut self, style: ZeroInitialStyle) -> Self {
        self.zero_initial = style;
        self
    }

    pub fn normalizes_tones(&self) -> bool {
        self.normalize_tones
    }

    pub fn zero_initial(&self) -> ZeroInitialStyle {
        self.zero_initial
    }

    /// Convert space separated pinyin into space separated key codes.
    ///
    /// Empty and whitespace-only input is returned as is.
    ///
    /// ```
    /// use libxiaohe::XiaoheConverter;
    ///
    /// let conv = XiaoheConverter::new();
    /// assert_eq!(conv.convert("zhong guo ren"), "vs go rf");
    /// assert_eq!(conv.convert("n"), "n?");
    /// ```
    pub fn convert(&self, pinyin: &str) -> String {
        if pinyin.trim().is_empty() {
            return pinyin.to_string();
        }
        let prepared = self.prepare(pinyin);
        let codes: Vec<String> = prepared
            .split_whitespace()
            .map(|token| self.convert_token(token))
            .collect();
        let out = codes.join(" ");
        tracing::debug!(input = pinyin, output = %out, "converted pinyin");
        out
    }

    /// Per-token view of [`convert`](Self::convert).
    pub fn explain(&self, pinyin: &str) -> Vec<SyllableBreakdown> {
        let prepared = self.prepare(pinyin);
        prepared
            .split_whitespace()
            .map(|token| match decompose(token) {
                Some((initial, final_part)) => SyllableBreakdown {
                    token: token.to_string(),
                    initial: Some(initial.to_string()),
                    final_part: Some(final_part.to_string()),
                    code: self.encode(initial, final_part),
                },
                None => SyllableBreakdown {
                    token: token.to_string(),
                    initial: None,
                    final_part: None,
                    code: token.to_string(),
                },
            })
            .collect()
    }

    /// Convert a single, already trimmed syllable.
    pub fn convert_token(&self, token: &str) -> String {
        match decompose(token) {
            Some((initial, final_part)) => self.encode(initial, final_part),
            None => token.to_string(),
        }
    }

    fn prepare(&self, pinyin: &str) -> String {
        if self.normalize_tones {
            normalize_pinyin(pinyin).to_lowercase()
        } else {
            pinyin.to_lowercase()
        }
    }

    fn encode(&self, initial: &str, final_part: &str) -> String {
        if initial.is_empty() && self.zero_initial == ZeroInitialStyle::Doubled {
            if let Some(code) = ZERO_INITIAL.get(final_part) {
                return (*code).to_string();
            }
        }

        let mut code = String::with_capacity(2);
        match INITIALS.get(initial) {
            Some(key) => code.push_str(key),
            None => code.push(UNKNOWN_KEY),
        }
        match FINALS.get(final_part) {
            Some(key) => code.push_str(key),
            None => code.push(UNKNOWN_KEY),
        }
        code
    }
}

/// Split a lower-case token into `(initial, final)`.
fn decompose(token: &str) -> Option<(&str, &str)> {
    let caps = SYLLABLE.captures(token)?;
    let initial = caps.get(1).map_or("", |m| m.as_str());
    let final_part = caps.get(2).map_or("", |m| m.as_str());
    Some((initial, final_part))
}

/// Convert with the default converter.
pub fn convert(pinyin: &str) -> String {
    XiaoheConverter::new().convert(pinyin)
}

//! Helpers for the key codes produced by double pinyin converters.
//!
//! A key code string is a space separated list of per-syllable codes such as
//! `"ni ui uv"`. A position the converter could not map is written as the
//! [`UNKNOWN_KEY`] sentinel, which never names a physical key.

use std::collections::BTreeSet;

/// Sentinel written in place of an initial or final with no key mapping.
pub const UNKNOWN_KEY: char = '?';

/// Whether `c` names a letter key on the keyboard.
pub fn is_key(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Split a key code string into the individual keys to press, in order.
///
/// Only letters are kept: whitespace, the `?` sentinel and anything a
/// pass-through token carried (digits, punctuation) are dropped. Duplicates
/// are kept.
///
/// ```
/// use libshuangpin_core::split_keys;
///
/// assert_eq!(split_keys("ni h?"), vec!['n', 'i', 'h']);
/// assert_eq!(split_keys("ni 2 h,"), vec!['n', 'i', 'h']);
/// ```
pub fn split_keys(codes: &str) -> Vec<char> {
    codes.chars().filter(|c| is_key(*c)).collect()
}

/// The distinct keys a rendering should highlight.
///
/// Backed by an ordered set so that iteration (and therefore logging and
/// serialization) is stable regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    keys: BTreeSet<char>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from a key code string (see [`split_keys`]).
    pub fn from_codes(codes: &str) -> Self {
        split_keys(codes).into_iter().collect()
    }

    pub fn insert(&mut self, key: char) -> bool {
        if !is_key(key) {
            return false;
        }
        self.keys.insert(key)
    }

    pub fn contains(&self, key: char) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.iter().copied()
    }

    /// Keys joined into a string, e.g. `"hin"`.
    pub fn to_key_string(&self) -> String {
        self.keys.iter().collect()
    }
}

impl FromIterator<char> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = HighlightSet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl<'a> FromIterator<&'a char> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = &'a char>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

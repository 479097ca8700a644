//! Xiaohe key code -> full pinyin.
//!
//! The Xiaohe layout shares keys between finals (`s` is both `ong` and
//! `iong`, `k` is both `ing` and `uai`), so a code can stand for more than one
//! spelling. Only combinations that are real Mandarin syllables are returned,
//! which in practice leaves a single candidate for almost every code.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

use crate::tables::{FINALS, INITIALS, PINYIN_SYLLABLES, ZERO_INITIAL};

static VALID_SYLLABLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PINYIN_SYLLABLES.iter().copied().collect());

/// Whether `syllable` is a standard toneless pinyin syllable (`ü` as `v`).
pub fn is_valid_syllable(syllable: &str) -> bool {
    VALID_SYLLABLES.contains(syllable)
}

fn initials_for(key: char) -> impl Iterator<Item = &'static str> {
    INITIALS
        .entries()
        .filter(move |(initial, k)| !initial.is_empty() && k.chars().eq(std::iter::once(key)))
        .map(|(initial, _)| *initial)
}

fn finals_for(key: char) -> impl Iterator<Item = &'static str> {
    FINALS
        .entries()
        .filter(move |(_, k)| k.chars().eq(std::iter::once(key)))
        .map(|(final_part, _)| *final_part)
}

/// All syllables a one- or two-key code can stand for, sorted.
///
/// One-key codes are read as zero-initial syllables typed in the bare style
/// (`d` -> `ai`). Two-key codes are read as initial + final, and additionally
/// as a conventionally typed zero-initial syllable (`ah` -> `ang`).
///
/// ```
/// use libxiaohe::decoder::decode_key_code;
///
/// assert_eq!(decode_key_code("vs"), vec!["zhong"]);
/// assert_eq!(decode_key_code("go"), vec!["guo"]);
/// ```
pub fn decode_key_code(code: &str) -> Vec<String> {
    let code = code.trim().to_ascii_lowercase();
    let keys: Vec<char> = code.chars().collect();
    if keys.iter().any(|c| !c.is_ascii_lowercase()) {
        return Vec::new();
    }

    let mut found: BTreeSet<&'static str> = BTreeSet::new();
    match keys.as_slice() {
        [only] => {
            found.extend(finals_for(*only).filter(|f| is_valid_syllable(f)));
        }
        [first, second] => {
            found.extend(
                ZERO_INITIAL
                    .entries()
                    .filter(|(_, typed)| **typed == code)
                    .map(|(syllable, _)| *syllable),
            );
            for initial in initials_for(*first) {
                for final_part in finals_for(*second) {
                    let syllable = format!("{initial}{final_part}");
                    if let Some(valid) = VALID_SYLLABLES.get(syllable.as_str()) {
                        found.insert(*valid);
                    }
                }
            }
        }
        _ => {}
    }

    tracing::trace!(code = %code, candidates = found.len(), "decoded key code");
    found.into_iter().map(str::to_string).collect()
}

/// Decode every whitespace separated code.
pub fn decode(codes: &str) -> Vec<Vec<String>> {
    codes.split_whitespace().map(decode_key_code).collect()
}

//! Tone-mark normalization for pinyin input.
//!
//! Converters work on plain ASCII pinyin (`zhong`, `lv`). Users often paste
//! tone-marked text (`zhōng`, `lǜ`) or numbered tones (`zhong1`); this module
//! folds both down to the plain form.

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIAERESIS: char = '\u{0308}';

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Strip tone marks and tone numbers from pinyin text.
///
/// - diacritics are removed (`ā á ǎ à` → `a`)
/// - `ü` (in any tone) becomes `v`
/// - one trailing tone digit `0`-`5` is dropped from each token
///
/// Whitespace is preserved exactly.
///
/// ```
/// use libshuangpin_core::normalize_pinyin;
///
/// assert_eq!(normalize_pinyin("zhōng guó"), "zhong guo");
/// assert_eq!(normalize_pinyin("lǜ se4"), "lv se");
/// ```
pub fn normalize_pinyin(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.nfd() {
        if c == COMBINING_DIAERESIS {
            match out.pop() {
                Some('u') => out.push('v'),
                Some('U') => out.push('V'),
                Some(prev) => out.push(prev),
                None => {}
            }
        } else if !is_combining_mark(c) {
            out.push(c);
        }
    }
    strip_tone_numbers(&out)
}

fn strip_tone_numbers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut prev_is_letter = false;
    while let Some(c) = chars.next() {
        let at_token_end = chars.peek().map_or(true, |n| n.is_whitespace());
        if prev_is_letter && at_token_end && ('0'..='5').contains(&c) {
            prev_is_letter = false;
            continue;
        }
        prev_is_letter = c.is_alphabetic();
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize_pinyin("nǐ hǎo"), "ni hao");
        assert_eq!(normalize_pinyin("Zhōng Guó"), "Zhong Guo");
    }

    #[test]
    fn maps_u_umlaut_to_v() {
        assert_eq!(normalize_pinyin("lü nǚ"), "lv nv");
        assert_eq!(normalize_pinyin("LÜ"), "LV");
    }

    #[test]
    fn strips_trailing_tone_number() {
        assert_eq!(normalize_pinyin("zhong1 guo2"), "zhong guo");
        assert_eq!(normalize_pinyin("ma5"), "ma");
    }

    #[test]
    fn keeps_other_digits() {
        assert_eq!(normalize_pinyin("2024"), "2024");
        assert_eq!(normalize_pinyin("a9"), "a9");
        assert_eq!(normalize_pinyin("a12"), "a12");
    }

    #[test]
    fn whitespace_is_untouched() {
        assert_eq!(normalize_pinyin("   "), "   ");
        assert_eq!(normalize_pinyin(""), "");
        assert_eq!(normalize_pinyin("a\t b"), "a\t b");
    }
}

//! Integration tests for decoding Xiaohe key codes back to pinyin.

use libxiaohe::{convert, decode, decode_key_code, PINYIN_SYLLABLES};

#[test]
fn test_every_encoded_syllable_decodes_to_itself() {
    for syllable in PINYIN_SYLLABLES {
        let code = convert(syllable);
        let candidates = decode_key_code(&code);
        assert!(
            candidates.iter().any(|c| c == syllable),
            "{syllable} -> {code} -> {candidates:?}"
        );
    }
}

#[test]
fn test_decode_sentence() {
    let codes = convert("zhong guo ren");
    let decoded: Vec<String> = decode(&codes).into_iter().map(|c| c.join("/")).collect();
    assert_eq!(decoded, vec!["zhong", "guo", "ren"]);
}

#[test]
fn test_unknown_codes_decode_to_nothing() {
    assert_eq!(decode("t? s?"), vec![Vec::<String>::new(), Vec::new()]);
}

//! Integration tests for pinyin -> Xiaohe key code conversion
//!
//! Reference vectors come from the Xiaohe key tables; the property tests
//! check the behaviour promised for arbitrary input.

use libxiaohe::{convert, split_keys, XiaoheConverter, PINYIN_SYLLABLES};

#[test]
fn test_reference_vectors() {
    let cases = [
        ("wo", "wo"),
        ("shi", "ui"),
        ("ni shi shui", "ni ui uv"),
        ("zhong guo", "vs go"),
        ("zhong guo ren", "vs go rf"),
        ("hao le", "hc le"),
        ("n", "n?"),
        ("long time no see", "ls t? no s?"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_empty_and_whitespace_pass_through() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("   "), "   ");
    assert_eq!(convert("\t\n"), "\t\n");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(convert("ZHONG"), convert("zhong"));
    assert_eq!(convert("Ni Hao"), "ni hc");
}

#[test]
fn test_tokens_are_independent() {
    assert_eq!(convert("a b"), format!("{} {}", convert("a"), convert("b")));
    assert_eq!(
        convert("zhuang shuang"),
        format!("{} {}", convert("zhuang"), convert("shuang"))
    );
}

#[test]
fn test_whitespace_runs_collapse_between_tokens() {
    assert_eq!(convert("  ni   hao\t"), "ni hc");
}

#[test]
fn test_every_syllable_with_initial_gets_two_keys() {
    // Syllables without an initial are typed with one key in the default
    // style, so only consonant-initial syllables are checked here.
    for syllable in PINYIN_SYLLABLES {
        if syllable.starts_with(|c: char| matches!(c, 'a' | 'e' | 'o')) {
            continue;
        }
        let code = convert(syllable);
        assert_eq!(code.chars().count(), 2, "{syllable} -> {code}");
        assert!(!code.contains('?'), "{syllable} -> {code}");
    }
}

#[test]
fn test_unknowns_mark_only_their_position() {
    // known initial, unknown final
    assert_eq!(convert("time"), "t?");
    assert_eq!(convert("bx"), "b?");
    // unknown final after a retroflex
    assert_eq!(convert("shx"), "u?");
}

#[test]
fn test_unparseable_tokens_are_returned_unchanged() {
    assert_eq!(convert("hello, world"), "hello, w?");
    assert_eq!(convert("ni 2 hao"), "ni 2 hc");
}

#[test]
fn test_split_keys_on_converter_output() {
    assert_eq!(split_keys("ni h?"), vec!['n', 'i', 'h']);
    assert_eq!(split_keys(&convert("long time")), vec!['l', 's', 't']);
}

#[test]
fn test_split_keys_ignores_passed_through_symbols() {
    let codes = convert("ni 2 ?!");
    assert_eq!(codes, "ni 2 ?!");
    assert_eq!(split_keys(&codes), vec!['n', 'i']);
    assert_eq!(split_keys("ni 2 h,"), vec!['n', 'i', 'h']);
}

#[test]
fn test_converter_is_deterministic() {
    let conv = XiaoheConverter::new().with_tone_normalization(true);
    let first = conv.convert("wǒ ài nǐ");
    for _ in 0..10 {
        assert_eq!(conv.convert("wǒ ài nǐ"), first);
    }
    assert_eq!(first, "wo d ni");
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let conv = XiaoheConverter::new();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || conv.convert("zhong guo ren")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "vs go rf");
    }
}

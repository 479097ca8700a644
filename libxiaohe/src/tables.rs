//! Xiaohe (小鹤双拼) key tables.
//!
//! Every syllable is typed as (at most) two keys: the first for the
//! shengmu (声母, initial) and the second for the yunmu (韵母, final).
//! Simple consonants keep their own key; the three retroflexes take the keys
//! of vowels that never start a syllable on their own.
//!
//! ```text
//!  Q iu   W ei   E e    R uan  T ue   Y un   U sh/u  I ch/i  O uo/o  P ie
//!  A a    S ong  D ai   F en   G eng  H ang  J an    K ing   L iang
//!  Z ou   X ia   C ao   V zh/ui B in  N iao  M ian
//! ```

use phf::phf_map;

/// Initial -> key. The empty initial (vowel-only syllable) types no key.
pub static INITIALS: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "",
    "b" => "b", "p" => "p", "m" => "m", "f" => "f",
    "d" => "d", "t" => "t", "n" => "n", "l" => "l",
    "g" => "g", "k" => "k", "h" => "h",
    "j" => "j", "q" => "q", "x" => "x",
    "r" => "r", "z" => "z", "c" => "c", "s" => "s",
    "y" => "y", "w" => "w",
    "zh" => "v", "ch" => "i", "sh" => "u",
};

/// Final -> key. Lookup is by exact match on the whole final.
pub static FINALS: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "a", "o" => "o", "e" => "e", "i" => "i", "u" => "u", "v" => "v",
    "ai" => "d", "ei" => "w", "ui" => "v",
    "ao" => "c", "ou" => "z", "iu" => "q",
    "ie" => "p", "ue" => "t", "ve" => "t", "er" => "r",
    "an" => "j", "en" => "f", "in" => "b", "un" => "y", "vn" => "y",
    "ang" => "h", "eng" => "g", "ing" => "k", "ong" => "s",
    "ia" => "x", "ua" => "x", "uo" => "o",
    "uai" => "k", "iao" => "n", "ian" => "m",
    "iang" => "l", "uang" => "l", "iong" => "s",
    "uan" => "r", "van" => "r",
};

/// Zero-initial syllables as conventionally typed in Xiaohe: single vowels
/// are doubled, two-letter finals are typed as spelled, and the two nasal
/// finals use their first letter plus the final key.
pub static ZERO_INITIAL: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "aa", "o" => "oo", "e" => "ee",
    "ai" => "ai", "ei" => "ei", "ao" => "ao", "ou" => "ou",
    "an" => "an", "en" => "en", "er" => "er",
    "ang" => "ah", "eng" => "eg",
};

/// All standard pinyin syllables (without tone markers), `ü` written as `v`.
pub const PINYIN_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "ba", "bai", "ban", "bang", "bao", "bei", "ben", "beng", "bi",
    "bian", "biao", "bie", "bin", "bing", "bo", "bu", "ca", "cai", "can", "cang", "cao", "ce",
    "cen", "ceng", "cha", "chai", "chan", "chang", "chao", "che", "chen", "cheng", "chi", "chong",
    "chou", "chu", "chuai", "chuan", "chuang", "chui", "chun", "chuo", "ci", "cong", "cou", "cu",
    "cuan", "cui", "cun", "cuo", "da", "dai", "dan", "dang", "dao", "de", "dei", "deng", "di",
    "dia", "dian", "diao", "die", "ding", "diu", "dong", "dou", "du", "duan", "dui", "dun", "duo",
    "e", "ei", "en", "er", "fa", "fan", "fang", "fei", "fen", "feng", "fo", "fou", "fu", "ga",
    "gai", "gan", "gang", "gao", "ge", "gei", "gen", "geng", "gong", "gou", "gu", "gua", "guai",
    "guan", "guang", "gui", "gun", "guo", "ha", "hai", "han", "hang", "hao", "he", "hei", "hen",
    "heng", "hong", "hou", "hu", "hua", "huai", "huan", "huang", "hui", "hun", "huo", "ji", "jia",
    "jian", "jiang", "jiao", "jie", "jin", "jing", "jiong", "jiu", "ju", "juan", "jue", "jun",
    "ka", "kai", "kan", "kang", "kao", "ke", "ken", "keng", "kong", "kou", "ku", "kua", "kuai",
    "kuan", "kuang", "kui", "kun", "kuo", "la", "lai", "lan", "lang", "lao", "le", "lei", "leng",
    "li", "lia", "lian", "liang", "liao", "lie", "lin", "ling", "liu", "lo", "long", "lou", "lu",
    "luan", "lun", "luo", "lv", "lve", "ma", "mai", "man", "mang", "mao", "me", "mei", "men",
    "meng", "mi", "mian", "miao", "mie", "min", "ming", "miu", "mo", "mou", "mu", "na", "nai",
    "nan", "nang", "nao", "ne", "nei", "nen", "neng", "ni", "nian", "niang", "niao", "nie",
    "nin", "ning", "niu", "nong", "nou", "nu", "nuan", "nuo", "nv", "nve", "o", "ou", "pa", "pai",
    "pan", "pang", "pao", "pei", "pen", "peng", "pi", "pian", "piao", "pie", "pin", "ping", "po",
    "pou", "pu", "qi", "qia", "qian", "qiang", "qiao", "qie", "qin", "qing", "qiong", "qiu", "qu",
    "quan", "que", "qun", "ran", "rang", "rao", "re", "ren", "reng", "ri", "rong", "rou", "ru",
    "ruan", "rui", "run", "ruo", "sa", "sai", "san", "sang", "sao", "se", "sen", "seng", "sha",
    "shai", "shan", "shang", "shao", "she", "shei", "shen", "sheng", "shi", "shou", "shu", "shua",
    "shuai", "shuan", "shuang", "shui", "shun", "shuo", "si", "song", "sou", "su", "suan", "sui",
    "sun", "suo", "ta", "tai", "tan", "tang", "tao", "te", "teng", "ti", "tian", "tiao", "tie",
    "ting", "tong", "tou", "tu", "tuan", "tui", "tun", "tuo", "wa", "wai", "wan", "wang", "wei",
    "wen", "weng", "wo", "wu", "xi", "xia", "xian", "xiang", "xiao", "xie", "xin", "xing", "xiong",
    "xiu", "xu", "xuan", "xue", "xun", "ya", "yan", "yang", "yao", "ye", "yi", "yin", "ying", "yo",
    "yong", "you", "yu", "yuan", "yue", "yun", "za", "zai", "zan", "zang", "zao", "ze", "zei",
    "zen", "zeng", "zha", "zhai", "zhan", "zhang", "zhao", "zhe", "zhen", "zheng", "zhi", "zhong",
    "zhou", "zhu", "zhua", "zhuai", "zhuan", "zhuang", "zhui", "zhun", "zhuo", "zi", "zong", "zou",
    "zu", "zuan", "zui", "zun", "zuo",
];

/// Short legend for each key: what it stands for as initial and as final.
///
/// Used for annotation text and by `libxiaohe keys --legend`.
pub fn key_legend(key: char) -> Option<String> {
    let mut key_buf = [0u8; 4];
    let key_str: &str = key.encode_utf8(&mut key_buf);

    let mut initials: Vec<&str> = INITIALS
        .entries()
        .filter(|(i, k)| **k == key_str && !i.is_empty() && **i != key_str)
        .map(|(i, _)| *i)
        .collect();
    let mut finals: Vec<&str> = FINALS
        .entries()
        .filter(|(f, k)| **k == key_str && **f != key_str)
        .map(|(f, _)| *f)
        .collect();
    if initials.is_empty() && finals.is_empty() {
        return None;
    }
    initials.sort_unstable();
    finals.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
    initials.extend(finals);
    Some(initials.join(" "))
}

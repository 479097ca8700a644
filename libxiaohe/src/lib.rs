//! libxiaohe crate root
//!
//! Xiaohe (小鹤双拼) double pinyin support built on `libshuangpin-core`:
//! full pinyin is turned into the two-key Xiaohe codes, and the keys to press
//! are highlighted on a keyboard diagram.
//!
//! Public API exported here:
//! - `convert` / `XiaoheConverter` from `converter`
//! - `decode_key_code` from `decoder`
//! - `XiaoheKeyboard` / `Rendering` from `keyboard`
//! - `XiaoheConfig` from `config`
//!
//! ```
//! use libxiaohe::{convert, XiaoheKeyboard};
//!
//! assert_eq!(convert("ni shi shui"), "ni ui uv");
//!
//! let rendering = XiaoheKeyboard::bundled().render("ni hao");
//! assert_eq!(rendering.codes, "ni hc");
//! assert!(rendering.data_uri().starts_with("data:image/svg+xml"));
//! ```

pub mod config;
pub mod converter;
pub mod decoder;
pub mod keyboard;
pub mod tables;

// Re-export the core pieces callers need next to the converter.
pub use libshuangpin_core::{split_keys, DiagramError, HighlightSet, KeyboardDiagram};

// Convenience re-exports for common types used by callers.
pub use config::XiaoheConfig;
pub use converter::{convert, SyllableBreakdown, XiaoheConverter, ZeroInitialStyle};
pub use decoder::{decode, decode_key_code};
pub use keyboard::{highlight_pinyin, Rendering, XiaoheKeyboard, BUNDLED_KEYBOARD_SVG};
pub use tables::PINYIN_SYLLABLES;

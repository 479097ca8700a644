//! File-backed configuration and keyboard template loading.

use std::io::Write;

use libshuangpin_core::{Config, DiagramError, KeyboardDiagram};

const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
<g id="a" class="key"><rect class="key-bg" fill="#f4f4f5"/><text class="key-label" fill="#18181b">A</text><text class="key-annotation" fill="#71717a">a</text></g>
<g id="s" class="key"><rect class="key-bg" fill="#f4f4f5"/><text class="key-label" fill="#18181b">S</text><text class="key-annotation" fill="#71717a">ong</text></g>
</svg>"##;

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shuangpin.toml");

    let mut cfg = Config::default();
    cfg.palette.key_highlight_fill = "#abcdef".to_string();
    cfg.save_toml(&path).unwrap();

    let loaded = Config::load_toml(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_config_missing_file() {
    let err = Config::load_toml("/no/such/dir/shuangpin.toml").unwrap_err();
    assert!(matches!(err, DiagramError::Io { .. }));
    assert!(err.to_string().contains("/no/such/dir/shuangpin.toml"));
}

#[test]
fn test_configured_template_is_loaded_and_rendered() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TEMPLATE.as_bytes()).unwrap();

    let cfg = Config {
        diagram_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let diagram = cfg.load_diagram().unwrap().expect("template configured");
    assert_eq!(diagram.key_ids().collect::<Vec<_>>(), vec!["a", "s"]);

    let out = diagram.render(&cfg.highlighter(), "s".chars());
    assert!(out.contains(r##"<rect class="key-bg" fill="#2563eb"/><text class="key-label" fill="#ffffff">S</text>"##));
    assert!(out.contains(r##"<rect class="key-bg" fill="#f4f4f5"/><text class="key-label" fill="#18181b">A</text>"##));
}

#[test]
fn test_template_is_reusable_across_renders() {
    let diagram = KeyboardDiagram::from_svg(TEMPLATE).unwrap();
    let hl = Config::default().highlighter();
    let a = diagram.render(&hl, ['a']);
    let s = diagram.render(&hl, ['s']);
    assert_ne!(a, s);
    assert_eq!(diagram.template(), TEMPLATE);
    assert_eq!(diagram.render(&hl, ['a']), a);
}

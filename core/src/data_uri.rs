//! Serialization of rendered diagrams into embeddable payloads.

/// Prefix of every SVG data URI produced by this crate.
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

/// Percent-encode an SVG document into a self-contained data URI.
pub fn to_data_uri(svg: &str) -> String {
    let encoded = urlencoding::encode(svg);
    let mut uri = String::with_capacity(SVG_DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(SVG_DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}

/// Wrap an SVG document as a Markdown image, for hosts that render Markdown.
///
/// Backslashes and brackets in `alt` are escaped.
pub fn markdown_image(alt: &str, svg: &str) -> String {
    format!("![{}]({})", escape_alt(alt), to_data_uri(svg))
}

fn escape_alt(alt: &str) -> String {
    let mut out = String::with_capacity(alt.len());
    for c in alt.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

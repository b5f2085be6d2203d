//! Untrusted HTML handling for question, solution and description text.
//!
//! Input is split into tags and text. Only bare formatting tags from
//! [`ALLOWED_TAGS`] survive as markup; every other tag is escaped whole, so
//! `href`, `src`, `style` and `on*` handlers never reach the renderer. Text
//! is escaped too, except that well-formed entities such as `&nbsp;` or
//! `&#8211;` are kept as they are.

use std::sync::OnceLock;

use regex::{Captures, Regex};

pub const ALLOWED_TAGS: &[&str] = &[
    "b", "i", "u", "em", "strong", "sub", "sup", "p", "br", "ul", "ol", "li",
];

const ENTITY: &str = r"&(?:[a-zA-Z][a-zA-Z0-9]{1,31}|#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6});";

fn bare_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^<(/?)([a-zA-Z]+)\s*(/?)>$").expect("static tag pattern"))
}

fn any_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("static tag pattern"))
}

fn script_block() -> &'static Regex {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    BLOCK.get_or_init(|| {
        Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("static pattern")
    })
}

fn leading_entity() -> &'static Regex {
    static ENTITY_AT_START: OnceLock<Regex> = OnceLock::new();
    ENTITY_AT_START.get_or_init(|| Regex::new(&format!("^{ENTITY}")).expect("static entity pattern"))
}

fn entity_capture() -> &'static Regex {
    static CAPTURE: OnceLock<Regex> = OnceLock::new();
    CAPTURE.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z][a-zA-Z0-9]{1,31});")
            .expect("static entity pattern")
    })
}

/// Escapes every markup-significant character, `&` included.
pub fn escape_html(raw: &str) -> String {
    escape(raw, false)
}

fn escape(raw: &str, keep_entities: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for (at, ch) in raw.char_indices() {
        match ch {
            '&' if keep_entities && leading_entity().is_match(&raw[at..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn allowed_tag(tag: &str) -> Option<String> {
    let caps = bare_tag().captures(tag)?;
    let name = caps[2].to_ascii_lowercase();
    ALLOWED_TAGS
        .contains(&name.as_str())
        .then(|| format!("<{}{}{}>", &caps[1], name, &caps[3]))
}

/// Markup safe to hand to an HTML renderer.
pub fn sanitize_html(raw: &str) -> String {
    let source = script_block().replace_all(raw, "");
    let mut out = String::with_capacity(source.len());
    let mut text_start = 0;
    for tag in any_tag().find_iter(&source) {
        out.push_str(&escape(&source[text_start..tag.start()], true));
        match allowed_tag(tag.as_str()) {
            Some(kept) => out.push_str(&kept),
            None => out.push_str(&escape_html(tag.as_str())),
        }
        text_start = tag.end();
    }
    out.push_str(&escape(&source[text_start..], true));
    out
}

fn decode_entity(caps: &Captures<'_>) -> String {
    let body = &caps[1];
    let named = match body {
        "nbsp" => Some(' '),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => None,
    };
    let numeric = || {
        let digits = body.strip_prefix('#')?;
        let code = match digits.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => digits.parse().ok()?,
        };
        char::from_u32(code)
    };
    named
        .or_else(numeric)
        .map_or_else(|| caps[0].to_string(), String::from)
}

/// Text content with every tag removed and entities decoded once.
pub fn plain_text(raw: &str) -> String {
    let without_scripts = script_block().replace_all(raw, "");
    let stripped = any_tag().replace_all(&without_scripts, " ");
    let decoded = entity_capture().replace_all(&stripped, decode_entity);
    decoded
        .split(|c: char| c.is_whitespace() || c == '\u{a0}')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

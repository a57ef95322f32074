use std::sync::OnceLock;

use regex::Regex;

fn script_style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>").expect("static regex")
    })
}

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("static regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]+>").expect("static regex"))
}

/// Extract readable article text from an HTML document.
///
/// Script and style blocks are dropped, paragraph contents are preferred
/// over the raw body, remaining tags are stripped, and the common HTML
/// entities are decoded. Returns an empty string when the document holds
/// no visible text.
pub fn extract_text(html: &str) -> String {
    let without_scripts = script_style_re().replace_all(html, " ");

    // Prefer <p> contents; fall back to the whole document for pages that
    // put their prose elsewhere.
    let paragraphs: Vec<String> = paragraph_re()
        .captures_iter(&without_scripts)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();
    let body = if paragraphs.is_empty() {
        without_scripts.to_string()
    } else {
        paragraphs.join("\n\n")
    };

    let stripped = tag_re().replace_all(&body, " ");
    let decoded = decode_entities(&stripped);

    // Collapse runs of whitespace while keeping paragraph breaks.
    decoded
        .split("\n\n")
        .map(|para| para.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|para| !para.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

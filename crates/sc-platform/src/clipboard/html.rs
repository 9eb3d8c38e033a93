//! Minimal start-tag scanner for clipboard HTML.
//!
//! Clipboard HTML only needs two questions answered: what attributes the
//! root element carries and which element holds the native payload. Both are
//! answered from start tags, so no DOM is built.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static START_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<([A-Za-z][A-Za-z0-9:_-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*/?>"#,
    )
    .unwrap()
});

static ATTRIBUTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#).unwrap()
});

static ENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z]+);").unwrap());

/// An opening tag with its attributes, names lowercased and values decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Every start tag of `html` in document order, comments skipped.
pub(crate) fn start_tags(html: &str) -> Vec<StartTag> {
    let html = COMMENT_REGEX.replace_all(html, "");
    START_TAG_REGEX
        .captures_iter(&html)
        .map(|caps| StartTag {
            name: caps[1].to_ascii_lowercase(),
            attributes: parse_attributes(caps.get(2).map_or("", |m| m.as_str())),
        })
        .collect()
}

fn parse_attributes(source: &str) -> Vec<(String, String)> {
    ATTRIBUTE_REGEX
        .captures_iter(source)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            (caps[1].to_ascii_lowercase(), decode_entities(value))
        })
        .collect()
}

/// Decodes character references. Unknown named references are kept as is.
pub(crate) fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    ENTITY_REGEX
        .replace_all(value, |caps: &regex::Captures<'_>| {
            let reference = &caps[1];
            let decoded = match reference {
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "nbsp" => Some('\u{a0}'),
                _ if reference.starts_with("#x") || reference.starts_with("#X") => {
                    u32::from_str_radix(&reference[2..], 16)
                        .ok()
                        .and_then(char::from_u32)
                }
                _ if reference.starts_with('#') => {
                    reference[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

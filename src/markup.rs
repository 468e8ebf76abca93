//! Non-validating markup scanner.
//!
//! Flattens document body markup to plain text in three steps:
//! paragraph tags become newlines, every other tag is dropped, and
//! optionally XML entities are decoded. No structure is validated; text
//! containing a stray `<` is handled on a best-effort basis.

use crate::extract::{ExtractOptions, TagMatch};
use std::borrow::Cow;

/// Flatten document body markup to plain text according to `options`.
pub fn flatten(xml: &str, options: &ExtractOptions) -> String {
    let text = paragraphs_to_newlines(xml, &options.paragraph_tag, options.paragraph_match);
    let text = strip_tags(&text);

    if options.decode_entities {
        decode_entities(&text).into_owned()
    } else {
        text
    }
}

/// Replace every opening tag whose name matches `tag` with a single newline.
///
/// With [`TagMatch::Prefix`] any tag name starting with `tag` counts, so
/// `<w:pPr>` and `<w:proofErr/>` are markers just like `<w:p>`. With
/// [`TagMatch::Exact`] only `<w:p>`, `<w:p attr="..">` and `<w:p/>` are.
/// Closing tags never count. An empty tag name disables the replacement.
pub fn paragraphs_to_newlines(xml: &str, tag: &str, mode: TagMatch) -> String {
    if tag.is_empty() {
        return xml.to_string();
    }

    let mut output = String::with_capacity(xml.len());
    let mut rest = xml;

    while let Some(start) = rest.find('<') {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match paragraph_tag_len(candidate, tag, mode) {
            Some(len) => {
                output.push('\n');
                rest = &candidate[len..];
            }
            None => {
                output.push('<');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Byte length of the paragraph tag at the start of `s`, if there is one.
fn paragraph_tag_len(s: &str, tag: &str, mode: TagMatch) -> Option<usize> {
    let after_name = s[1..].strip_prefix(tag)?;

    if mode == TagMatch::Exact {
        let boundary = after_name.chars().next()?;
        if boundary != '>' && boundary != '/' && !boundary.is_whitespace() {
            return None;
        }
    }

    let end = after_name.find('>')?;
    Some(1 + tag.len() + end + 1)
}

/// Remove every `<...>` span from `text`.
///
/// A span opens at `<`, holds at least one character and closes at the first
/// following `>`, with no other `<` inside. Removal repeats until no span
/// is left, so the result never contains one.
pub fn strip_tags(text: &str) -> String {
    let mut output = match strip_pass(text) {
        Some(stripped) => stripped,
        None => return text.to_string(),
    };

    while let Some(stripped) = strip_pass(&output) {
        output = stripped;
    }

    output
}

/// One left-to-right removal pass. Returns `None` when nothing was removed.
fn strip_pass(text: &str) -> Option<String> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut removed = false;

    while let Some(start) = rest.find('<') {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match tag_len(candidate) {
            Some(len) => {
                rest = &candidate[len..];
                removed = true;
            }
            None => {
                // stray '<', kept as text
                output.push('<');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    removed.then_some(output)
}

/// Byte length of the tag at the start of `s`, which begins with `<`.
fn tag_len(s: &str) -> Option<usize> {
    let first = s[1..].chars().next().filter(|&c| c != '<')?;
    let from = 1 + first.len_utf8();

    let end = s[from..].find(['<', '>'])?;
    (s.as_bytes()[from + end] == b'>').then_some(from + end + 1)
}

/// Decode XML character and entity references.
///
/// Text with an unknown or malformed reference is returned unchanged.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    match quick_xml::escape::unescape(text) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::debug!("leaving entities undecoded: {}", e);
            Cow::Borrowed(text)
        }
    }
}

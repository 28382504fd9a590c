//! Raw-text scanner locating the markup construct under a cursor offset.

use crate::base::{TextRange, TextSize};

use super::{AttributeContext, CursorContext, TagContext};

/// Classify the construct enclosing `offset` in `text`.
///
/// Returns `None` when the offset falls in text content, comments, doctype
/// or processing instructions, or past the end of the input. Inside a tag
/// region, an offset on an attribute name or value classifies as
/// [`CursorContext::Attribute`]; anywhere else in the region (including the
/// tag name and inter-attribute whitespace) classifies as
/// [`CursorContext::Tag`].
pub fn context_at(text: &str, offset: usize) -> Option<CursorContext<'_>> {
    if offset >= text.len() {
        return None;
    }

    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        if text[i..].starts_with("<!--") {
            i = match text[i..].find("-->") {
                Some(close) => i + close + 3,
                None => bytes.len(),
            };
            if offset < i {
                return None;
            }
            continue;
        }

        if matches!(bytes.get(i + 1).copied(), Some(b'!') | Some(b'?')) {
            i = skip_past(bytes, i, b'>');
            if offset < i {
                return None;
            }
            continue;
        }

        let Some(tag) = scan_tag(text, i) else {
            // A stray `<` that opens no tag is text content.
            i += 1;
            continue;
        };

        if offset >= tag.end {
            i = tag.end;
            continue;
        }
        if offset < tag.start {
            return None;
        }
        return Some(classify(text, &tag, offset));
    }

    None
}

/// One scanned `<...>` region.
struct ScannedTag {
    start: usize,
    /// Byte after the closing `>`, or end of input when unterminated.
    end: usize,
    name_start: usize,
    name_end: usize,
    closing: bool,
    attrs: Vec<AttrSpan>,
}

struct AttrSpan {
    name_start: usize,
    name_end: usize,
    /// End of the value (past the closing quote), when a value is present.
    value_end: Option<usize>,
}

fn classify<'a>(text: &'a str, tag: &ScannedTag, offset: usize) -> CursorContext<'a> {
    let tag_name = &text[tag.name_start..tag.name_end];
    let name_range = range(tag.name_start, tag.name_end);

    if !tag.closing {
        for attr in &tag.attrs {
            let attr_end = attr.value_end.unwrap_or(attr.name_end);
            if offset >= attr.name_start && offset < attr_end {
                return CursorContext::Attribute(AttributeContext {
                    tag: tag_name,
                    name: &text[attr.name_start..attr.name_end],
                    range: range(attr.name_start, attr.name_end),
                });
            }
        }
    }

    CursorContext::Tag(TagContext {
        name: tag_name,
        range: name_range,
    })
}

fn scan_tag(text: &str, lt: usize) -> Option<ScannedTag> {
    let bytes = text.as_bytes();
    let mut i = lt + 1;

    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    let name_start = i;
    if !bytes.get(i).is_some_and(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    while bytes
        .get(i)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
    {
        i += 1;
    }
    let name_end = i;

    let mut attrs = Vec::new();

    let end = loop {
        while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
            i += 1;
        }
        match bytes.get(i).copied() {
            None => break bytes.len(),
            Some(b'>') => break i + 1,
            Some(b'/') => {
                i += 1;
            }
            _ if closing => {
                // Closing tags carry no attributes; scan to `>`.
                i += 1;
            }
            _ => {
                let attr_start = i;
                while bytes.get(i).is_some_and(|b| is_attr_name_byte(*b)) {
                    i += 1;
                }
                if i == attr_start {
                    // Unscannable byte; step over it.
                    i += 1;
                    continue;
                }
                let attr_name_end = i;

                let value_end = if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    Some(scan_value(bytes, &mut i))
                } else {
                    None
                };

                attrs.push(AttrSpan {
                    name_start: attr_start,
                    name_end: attr_name_end,
                    value_end,
                });
            }
        }
    };

    Some(ScannedTag {
        start: lt,
        end,
        name_start,
        name_end,
        closing,
        attrs,
    })
}

/// Scan an attribute value starting at `*i` (just past `=`); returns the
/// end offset past the value.
fn scan_value(bytes: &[u8], i: &mut usize) -> usize {
    match bytes.get(*i).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            *i += 1;
            while bytes.get(*i).is_some_and(|b| *b != quote) {
                *i += 1;
            }
            if *i < bytes.len() {
                *i += 1; // closing quote
            }
        }
        _ => {
            while bytes
                .get(*i)
                .is_some_and(|b| !b.is_ascii_whitespace() && *b != b'>')
            {
                *i += 1;
            }
        }
    }
    *i
}

/// Index just past the next `needle` byte, or end of input.
fn skip_past(bytes: &[u8], from: usize, needle: u8) -> usize {
    bytes[from..]
        .iter()
        .position(|b| *b == needle)
        .map(|j| from + j + 1)
        .unwrap_or(bytes.len())
}

fn is_attr_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/' | b'<' | b'"' | b'\'')
}

fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

//! Character-level splitting of container bodies.
//!
//! Both scanners are small state machines over a byte index into the
//! borrowed input: a pending-escape flag, a quote-open flag, and a signed
//! nesting depth driven by `(`/`{` and `)`/`}`. Structural bytes are all
//! ASCII, so byte positions are safe split points in UTF-8 input, and the
//! returned pieces are verbatim slices of the original text.

/// Split the body of a parenthesized list at top-level commas. Empty
/// pieces are kept; the caller drops them after trimming, which is how
/// trailing commas and doubled separators are tolerated.
pub(crate) fn split_list_elements(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut elements = Vec::new();
    let mut start = 0;
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    let mut escape = false;

    for (i, &b) in bytes.iter().enumerate() {
        if escape {
            escape = false;
            continue;
        }
        match b {
            b'\\' => escape = true,
            b'"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            b'(' | b'{' => depth += 1,
            b')' | b'}' => depth -= 1,
            b',' if depth == 0 => {
                elements.push(&content[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    elements.push(&content[start..]);
    elements
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PairMode {
    Key,
    Value,
}

/// Split the body of a braced dictionary into `(key, value)` pairs.
///
/// A key ends at the first unquoted `= ` sequence; a value ends at an
/// unquoted `;` at depth zero. A trailing pair whose `;` is missing is
/// still committed when both a key and a non-empty value remain, which
/// covers the last entry of a dictionary omitting its separator before
/// the closing brace.
pub(crate) fn split_dict_pairs(content: &str) -> Vec<(&str, &str)> {
    let bytes = content.as_bytes();
    let mut pairs = Vec::new();
    let mut mode = PairMode::Key;
    let mut key = "";
    let mut start = 0;
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    let mut escape = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if escape {
            escape = false;
            i += 1;
            continue;
        }

        match b {
            b'\\' => escape = true,
            b'"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            b'=' if mode == PairMode::Key && i + 2 < bytes.len() && bytes[i + 1] == b' ' => {
                key = content[start..i].trim();
                mode = PairMode::Value;
                i += 2;
                start = i;
                continue;
            }
            b'{' | b'(' if mode == PairMode::Value => depth += 1,
            b'}' | b')' if mode == PairMode::Value => depth -= 1,
            b';' if mode == PairMode::Value && depth == 0 => {
                pairs.push((key, content[start..i].trim()));
                mode = PairMode::Key;
                key = "";
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                start = i;
                continue;
            }
            _ => {}
        }

        i += 1;
    }

    if mode == PairMode::Value {
        let rest = &content[start..];
        if !key.is_empty() && !rest.is_empty() {
            pairs.push((key, rest.trim()));
        }
    }

    pairs
}

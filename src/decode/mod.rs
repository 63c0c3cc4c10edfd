//! Recursive-descent parsing of `defaults read` output.
//!
//! The parser is forgiving by contract: malformed input never raises an
//! error. Unbalanced delimiters, missing separators, and dangling
//! fragments degrade to partial structures (or to a single scalar holding
//! the raw text) rather than failing the conversion.

mod scanner;

use crate::classify;
use crate::options::ConvertOptions;
use crate::value::{Dict, Value};

use scanner::{split_dict_pairs, split_list_elements};

/// Parse a whole document: trims the input and produces exactly one value.
pub fn parse_str(input: &str, options: &ConvertOptions) -> Value {
    parse_value(input, options)
}

pub(crate) fn parse_value(input: &str, options: &ConvertOptions) -> Value {
    let input = input.trim();

    if input.len() > 1 && input.starts_with('(') && input.ends_with(')') {
        return parse_array(input, options);
    }

    if input.len() > 1 && input.starts_with('{') && input.ends_with('}') {
        if classify::is_binary_blob(input) {
            return Value::Skip;
        }
        return parse_dict(input, options);
    }

    if input.len() > 1 && input.starts_with('"') && input.ends_with('"') {
        let unescaped = input[1..input.len() - 1]
            .replace("\\\"", "\"")
            .replace("\\\\", "\\");
        return filtered_scalar(unescaped, options);
    }

    filtered_scalar(input.to_string(), options)
}

/// Apply the value-level filters before wrapping a token as a scalar.
fn filtered_scalar(text: String, options: &ConvertOptions) -> Value {
    if options.skip_dates && classify::is_date_string(&text) {
        return Value::Skip;
    }
    if options.skip_ui_state && classify::is_ui_state_value(&text) {
        return Value::Skip;
    }
    if options.skip_identifiers
        && (classify::is_uuid_string(&text) || classify::is_hashed_id_string(&text))
    {
        return Value::Skip;
    }
    Value::Scalar(text)
}

fn parse_array(input: &str, options: &ConvertOptions) -> Value {
    let content = input[1..input.len() - 1].trim();
    if content.is_empty() {
        return Value::Array(Vec::new());
    }

    let mut values = Vec::new();
    for element in split_list_elements(content) {
        let element = element.trim();
        let element = element.strip_suffix(';').unwrap_or(element);
        if !element.is_empty() {
            values.push(parse_value(element, options));
        }
    }
    Value::Array(values)
}

fn parse_dict(input: &str, options: &ConvertOptions) -> Value {
    let content = input[1..input.len() - 1].trim();
    if content.is_empty() {
        return Value::Dict(Dict::new());
    }

    let mut entries = Dict::new();
    for (key, raw_value) in split_dict_pairs(content) {
        // Last write wins for a repeated key; its first position is kept.
        entries.insert(key.to_string(), parse_value(raw_value, options));
    }
    Value::Dict(entries)
}

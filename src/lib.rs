pub mod classify;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

use std::io::Read;

pub use crate::error::Error;
pub use crate::options::ConvertOptions;
pub use crate::value::{Dict, Value};

pub use decode::parse_str;
pub use encode::to_nix;

pub type Result<T> = std::result::Result<T, Error>;

/// Convert `defaults read` output into Nix attribute-set text.
///
/// # Examples
/// ```
/// use defaults_nix::{convert_str, ConvertOptions};
///
/// let nix = convert_str("{Enabled = 1;}", &ConvertOptions::new());
/// assert_eq!(nix, "{\n  Enabled = true;\n}");
/// ```
pub fn convert_str(input: &str, options: &ConvertOptions) -> String {
    let value = parse_str(input.trim(), options);
    to_nix(&value, options)
}

/// Like [`convert_str`], but also returns the parsed tree so callers can
/// re-render individual top-level entries without re-parsing.
pub fn convert_str_with_value(input: &str, options: &ConvertOptions) -> (String, Value) {
    let value = parse_str(input.trim(), options);
    let rendered = to_nix(&value, options);
    (rendered, value)
}

/// Read the whole input, then convert it. Failing to read the input is
/// the only error the pipeline can return.
pub fn convert_reader<R: Read>(mut reader: R, options: &ConvertOptions) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(convert_str(&input, options))
}

/// The top-level entries of a parsed document with Skip values removed;
/// empty for anything that is not a dictionary.
pub fn top_level_entries(value: &Value) -> Dict {
    match value {
        Value::Dict(entries) => entries
            .iter()
            .filter(|(_, value)| !value.is_skip())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Dict::new(),
    }
}

/// Turn a domain key into a safe file stem: surrounding quotes are
/// stripped, dots become hyphens, spaces and slashes become underscores.
pub fn sanitize_filename(key: &str) -> String {
    key.trim_matches('"')
        .replace('.', "-")
        .replace(' ', "_")
        .replace('/', "_")
}

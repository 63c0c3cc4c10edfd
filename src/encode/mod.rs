//! Rendering of parsed values as Nix attribute-set text.
//!
//! Scalars are typed here, not at parse time: `"1"`/`"0"` collapse to
//! booleans, integer and float tokens become canonical numbers, and
//! everything else becomes a quoted string. Skip values vanish without
//! leaving separators behind, and the key-level filters are re-applied to
//! every dictionary entry at render time.

mod number;
mod writer;

use crate::classify;
use crate::constants::is_nix_keyword;
use crate::options::ConvertOptions;
use crate::value::Value;

use number::{push_float, push_integer};
use writer::Writer;

/// Render one value at depth zero.
pub fn to_nix(value: &Value, options: &ConvertOptions) -> String {
    let mut out = Writer::new();
    write_value(&mut out, value, options, 0);
    out.finish()
}

fn write_value(out: &mut Writer, value: &Value, options: &ConvertOptions, depth: usize) {
    match value {
        Value::Skip => {}
        Value::Scalar(text) => write_scalar(out, text),
        Value::Array(items) => write_array(out, items, options, depth),
        Value::Dict(entries) => write_dict(out, entries, options, depth),
    }
}

fn write_scalar(out: &mut Writer, text: &str) {
    if text == "1" {
        out.push_str("true");
        return;
    }
    if text == "0" {
        out.push_str("false");
        return;
    }

    if let Ok(int) = text.parse::<i64>() {
        push_integer(out, int);
        return;
    }
    if let Ok(float) = text.parse::<f64>() {
        if float.is_finite() {
            push_float(out, float);
            return;
        }
    }

    // Bare identifiers become quoted strings verbatim.
    if !text.is_empty()
        && !text.contains([' ', '/', '.', ':'])
        && text != "true"
        && text != "false"
    {
        out.push_char('"');
        out.push_str(text);
        out.push_char('"');
        return;
    }

    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("${", "$''{");
    out.push_char('"');
    out.push_str(&escaped);
    out.push_char('"');
}

fn write_array(out: &mut Writer, items: &[Value], options: &ConvertOptions, depth: usize) {
    let visible: Vec<&Value> = items.iter().filter(|item| !item.is_skip()).collect();

    if visible.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push_char('[');
    for item in visible {
        out.push_newline();
        out.push_indent(depth + 1);
        write_value(out, item, options, depth + 1);
    }
    out.push_newline();
    out.push_indent(depth);
    out.push_char(']');
}

fn write_dict(
    out: &mut Writer,
    entries: &crate::value::Dict,
    options: &ConvertOptions,
    depth: usize,
) {
    let retained: Vec<(&String, &Value)> = entries
        .iter()
        .filter(|(key, value)| !value.is_skip() && !key_is_filtered(key, options))
        .collect();

    if retained.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_char('{');
    for (key, value) in retained {
        out.push_newline();
        out.push_indent(depth + 1);
        write_key(out, key);
        out.push_str(" = ");
        write_value(out, value, options, depth + 1);
        out.push_char(';');
    }
    out.push_newline();
    out.push_indent(depth);
    out.push_char('}');
}

/// Key-level suppression. The date check is unconditional: any entry
/// under a timestamp-shaped key is dropped, numeric or not.
fn key_is_filtered(key: &str, options: &ConvertOptions) -> bool {
    if options.skip_ui_state && classify::is_ui_state_key(key) {
        return true;
    }
    if options.skip_identifiers && classify::is_uuid_key(key) {
        return true;
    }
    options.skip_dates && classify::is_timestamp_key(key)
}

fn key_needs_quoting(key: &str) -> bool {
    if key.parse::<i64>().is_ok() {
        return true;
    }
    if key.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return true;
    }
    if is_nix_keyword(key) {
        return true;
    }
    key.contains(' ') || key.contains('-') || key.contains('.') || key.starts_with('"')
}

fn write_key(out: &mut Writer, key: &str) {
    // Keys that arrived quoted are emitted as-is, quotes and all.
    if key_needs_quoting(key) && !key.starts_with('"') {
        out.push_char('"');
        out.push_str(&key.replace('"', "\\\""));
        out.push_char('"');
    } else {
        out.push_str(key);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::options::ConvertOptions;
    use crate::value::{Dict, Value};

    use super::to_nix;

    fn render(value: &Value) -> String {
        to_nix(value, &ConvertOptions::new())
    }

    fn scalar(text: &str) -> Value {
        Value::from(text)
    }

    #[rstest]
    #[case("1", "true")]
    #[case("0", "false")]
    #[case("2", "2")]
    #[case("42", "42")]
    #[case("-42", "-42")]
    #[case("00123", "123")]
    #[case("3.14", "3.14")]
    #[case("3.14159265358979323846", "3.14159265358979")]
    #[case("1.23e10", "12300000000")]
    #[case("hello", "\"hello\"")]
    #[case("Dark", "\"Dark\"")]
    #[case("LinkedIn", "\"LinkedIn\"")]
    #[case("https://www.apple.com/startpage/", "\"https://www.apple.com/startpage/\"")]
    #[case("hello world", "\"hello world\"")]
    #[case("com.example.app", "\"com.example.app\"")]
    #[case("2025-06-07 12:01:44 +0000", "\"2025-06-07 12:01:44 +0000\"")]
    #[case("", "\"\"")]
    #[case("   ", "\"   \"")]
    fn test_scalar_rendering(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render(&scalar(input)), expected);
    }

    #[rstest]
    fn test_scalar_escaping() {
        assert_eq!(render(&scalar("say \"hello\"")), "\"say \\\"hello\\\"\"");
        assert_eq!(
            render(&scalar("path\\\\to\\\\file")),
            "\"path\\\\to\\\\file\""
        );
        assert_eq!(render(&scalar("prefix ${interp}")), "\"prefix $''{interp}\"");
    }

    #[rstest]
    fn test_true_false_words_take_the_escaped_path() {
        assert_eq!(render(&scalar("true")), "\"true\"");
        assert_eq!(render(&scalar("false")), "\"false\"");
    }

    #[rstest]
    fn test_non_finite_tokens_stay_strings() {
        assert_eq!(render(&scalar("inf")), "\"inf\"");
        assert_eq!(render(&scalar("NaN")), "\"NaN\"");
    }

    #[rstest]
    fn test_skip_renders_empty() {
        assert_eq!(render(&Value::Skip), "");
    }

    #[rstest]
    fn test_array_rendering() {
        assert_eq!(render(&Value::Array(Vec::new())), "[]");
        assert_eq!(
            render(&Value::Array(vec![scalar("hello")])),
            "[\n  \"hello\"\n]"
        );
        assert_eq!(
            render(&Value::Array(vec![
                scalar("1"),
                scalar("hello"),
                scalar("https://example.com"),
            ])),
            "[\n  true\n  \"hello\"\n  \"https://example.com\"\n]"
        );
    }

    #[rstest]
    fn test_array_skip_transparency() {
        assert_eq!(
            render(&Value::Array(vec![Value::Skip, Value::Skip])),
            "[]"
        );
        assert_eq!(
            render(&Value::Array(vec![scalar("a"), Value::Skip, scalar("b")])),
            "[\n  \"a\"\n  \"b\"\n]"
        );
    }

    fn dict(pairs: &[(&str, Value)]) -> Value {
        let mut entries = Dict::new();
        for (key, value) in pairs {
            entries.insert((*key).to_string(), value.clone());
        }
        Value::Dict(entries)
    }

    #[rstest]
    fn test_dict_rendering() {
        assert_eq!(render(&dict(&[])), "{}");
        assert_eq!(
            render(&dict(&[("key1", scalar("1")), ("key2", scalar("hello"))])),
            "{\n  key1 = true;\n  key2 = \"hello\";\n}"
        );
    }

    #[rstest]
    fn test_dict_key_quoting() {
        assert_eq!(
            render(&dict(&[
                ("0", scalar("numeric key")),
                ("with-dash", scalar("dashed key")),
                ("with space", scalar("spaced key")),
            ])),
            "{\n  \"0\" = \"numeric key\";\n  \"with-dash\" = \"dashed key\";\n  \"with space\" = \"spaced key\";\n}"
        );
        assert_eq!(
            render(&dict(&[("123", scalar("x"))])),
            "{\n  \"123\" = \"x\";\n}"
        );
        assert_eq!(
            render(&dict(&[("9lives", scalar("x"))])),
            "{\n  \"9lives\" = \"x\";\n}"
        );
        assert_eq!(
            render(&dict(&[("with", scalar("x"))])),
            "{\n  \"with\" = \"x\";\n}"
        );
        assert_eq!(
            render(&dict(&[("com.apple.Safari", scalar("x"))])),
            "{\n  \"com.apple.Safari\" = \"x\";\n}"
        );
        assert_eq!(
            render(&dict(&[("simpleKey", scalar("x"))])),
            "{\n  simpleKey = \"x\";\n}"
        );
    }

    #[rstest]
    fn test_already_quoted_key_is_emitted_verbatim() {
        assert_eq!(
            render(&dict(&[("\"com.apple.Safari\"", scalar("x"))])),
            "{\n  \"com.apple.Safari\" = \"x\";\n}"
        );
    }

    #[rstest]
    fn test_dict_skip_transparency() {
        assert_eq!(
            render(&dict(&[
                ("key1", scalar("hello")),
                ("skip", Value::Skip),
                ("key2", scalar("world")),
            ])),
            "{\n  key1 = \"hello\";\n  key2 = \"world\";\n}"
        );
        assert_eq!(render(&dict(&[("only", Value::Skip)])), "{}");
    }

    #[rstest]
    fn test_nested_dict_indentation() {
        let inner = dict(&[("inner", scalar("nested"))]);
        assert_eq!(
            render(&dict(&[("outer", inner)])),
            "{\n  outer = {\n    inner = \"nested\";\n  };\n}"
        );
    }

    #[rstest]
    fn test_date_key_filter_is_unconditional() {
        let options = ConvertOptions::new().with_skip_dates(true);
        let value = dict(&[
            ("CKStartupTime", scalar("1753218075")),
            ("UpdateDate", scalar("some text")),
            ("Username", scalar("testuser")),
        ]);
        let rendered = to_nix(&value, &options);
        assert!(!rendered.contains("CKStartupTime"));
        assert!(!rendered.contains("UpdateDate"));
        assert!(rendered.contains("Username"));
    }

    #[rstest]
    fn test_uuid_key_filter() {
        let options = ConvertOptions::new().with_skip_identifiers(true);
        let value = dict(&[
            ("3906CAB3-0BD4-41A9-8C1E-80F806043E7D", scalar("x")),
            ("Name", scalar("kept")),
        ]);
        let rendered = to_nix(&value, &options);
        assert!(!rendered.contains("3906CAB3"));
        assert!(rendered.contains("Name"));
    }

    #[rstest]
    fn test_ui_state_key_filter() {
        let options = ConvertOptions::new().with_skip_ui_state(true);
        let value = dict(&[
            ("NSWindow Frame Main", scalar("x")),
            ("HomePage", scalar("kept")),
        ]);
        let rendered = to_nix(&value, &options);
        assert!(!rendered.contains("NSWindow Frame"));
        assert!(rendered.contains("HomePage"));
    }

    #[rstest]
    fn test_dict_with_all_entries_filtered_renders_empty() {
        let options = ConvertOptions::new().with_skip_dates(true);
        let value = dict(&[("UpdateDate", scalar("x")), ("StartTime", scalar("y"))]);
        assert_eq!(to_nix(&value, &options), "{}");
    }
}

/// Recognize the brace-delimited rendering of opaque binary data:
/// a dictionary carrying exactly a `length = N` entry and a
/// `bytes = 0x...` entry, in either order, separated by `;` or `,`.
/// Anything with more, fewer, or different keys is an ordinary dict.
pub fn is_binary_blob(input: &str) -> bool {
    if !input.contains("length =") || !input.contains("bytes =") {
        return false;
    }
    if !input.contains("bytes = 0x") {
        return false;
    }

    let Some(content) = input
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return false;
    };
    let content = content.trim();

    // Semicolon-separated form takes precedence over the comma form.
    let parts: Vec<&str> = if content.contains(';') {
        content.split(';').collect()
    } else {
        content.split(',').collect()
    };

    let mut valid_keys = 0;
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.starts_with("length =") || part.starts_with("bytes = 0x") {
            valid_keys += 1;
        } else {
            return false;
        }
    }

    valid_keys == 2
}

/// Canonical UUID form: `8-4-4-4-12` hex groups, 36 bytes total,
/// case-insensitive.
pub fn is_uuid_string(s: &str) -> bool {
    is_uuid_bytes(s.as_bytes())
}

fn is_uuid_bytes(b: &[u8]) -> bool {
    if b.len() != 36 {
        return false;
    }

    for (i, &c) in b.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if c != b'-' {
                    return false;
                }
            }
            _ => {
                if !c.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }

    true
}

/// Underscore followed by exactly 32 hex characters, the shape of a
/// content hash used as a pseudo-identifier.
pub fn is_hashed_id_string(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 2 || b[0] != b'_' {
        return false;
    }

    let hex = &b[1..];
    hex.len() == 32 && hex.iter().all(u8::is_ascii_hexdigit)
}

/// True when the key is a UUID outright, or when any 36-byte window of a
/// longer key is one (covers `prefix-UUID-suffix` compound keys).
pub fn is_uuid_key(key: &str) -> bool {
    let b = key.as_bytes();
    if is_uuid_bytes(b) {
        return true;
    }

    b.len() > 36 && b.windows(36).any(is_uuid_bytes)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("A8604994-4D31-471E-B7F1-D60AC97A287C", true)]
    #[case("a8604994-4d31-471e-b7f1-d60ac97a287c", true)]
    #[case("A8604994-4d31-471E-b7f1-D60AC97A287C", true)]
    #[case("A8604994-4D31-471E-B7F1", false)]
    #[case("A8604994-4D31-471E-B7F1-D60AC97A287C-EXTRA", false)]
    #[case("A86049944D31471EB7F1D60AC97A287C", false)]
    #[case("A860-4994-4D31-471E-B7F1-D60AC97A287C", false)]
    #[case("G8604994-4D31-471E-B7F1-D60AC97A287C", false)]
    #[case("", false)]
    #[case("hello-world-this-is-not-a-uuid", false)]
    fn test_is_uuid_string(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_uuid_string(input), expected);
    }

    #[rstest]
    #[case("_19a3bc4999bddb89e1a44f4b87bdc37c", true)]
    #[case("_19A3BC4999BDDB89E1A44F4B87BDC37C", true)]
    #[case("_fb0549aa0c42c3c83c03adc64ff6c300", true)]
    #[case("19a3bc4999bddb89e1a44f4b87bdc37c", false)]
    #[case("_19a3bc4999bddb89", false)]
    #[case("_19a3bc4999bddb89e1a44f4b87bdc37c00", false)]
    #[case("_19a3bc4999bddb89e1a44f4b87bdc37g", false)]
    #[case("", false)]
    #[case("_", false)]
    #[case("_abc123", false)]
    fn test_is_hashed_id_string(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_hashed_id_string(input), expected);
    }

    #[rstest]
    #[case("A8604994-4D31-471E-B7F1-D60AC97A287C", true)]
    #[case(
        "001704-05-0990211b-baa3-496b-a477-18acf2584b74-com.apple.systempreferences",
        true
    )]
    #[case("prefix-A8604994-4D31-471E-B7F1-D60AC97A287C-suffix", true)]
    #[case("AccountUUID-3906CAB3-0BD4-41A9-8C1E-80F806043E7D", true)]
    #[case("com.apple.finder", false)]
    #[case("not-a-uuid-4D31-471E-B7F1-D60AC97A287C", false)]
    #[case("", false)]
    #[case("key", false)]
    fn test_is_uuid_key(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_uuid_key(key), expected);
    }
}

/// Key substrings that mark an entry as carrying a timestamp.
const TIMESTAMP_KEY_PATTERNS: &[&str] = &[
    "time",
    "timestamp",
    "date",
    "epoch",
    "updated",
    "created",
    "modified",
    "changed",
    "lastused",
    "lastseen",
    "lastaccess",
    "lastconnected",
    "lastunseen",
    "lastvisit",
    "lastopen",
    "lastlaunch",
    "accessed",
    "visited",
    "opened",
    "launched",
    "expiry",
    "expires",
    "expired",
    "expiration",
    "checkedat",
    "setat",
    "startedat",
    "endedat",
    "since",
    "until",
    "when",
    "at",
];

/// Recognize `YYYY-MM-DD`, optionally followed by ` HH:MM:SS ...` or
/// `T...`. Bounds are validated (year 1900..=2100, month 1..=12, day
/// 1..=31, and the time fields when a full `HH:MM:SS` is present); no
/// month-length or leap-year checking is attempted.
pub fn is_date_string(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 10 {
        return false;
    }

    if b[4] != b'-' || b[7] != b'-' {
        return false;
    }

    if !b[..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let year: u32 = b[..4]
        .iter()
        .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'));
    if !(1900..=2100).contains(&year) {
        return false;
    }

    if !b[5].is_ascii_digit() || !b[6].is_ascii_digit() {
        return false;
    }
    let month = (b[5] - b'0') * 10 + (b[6] - b'0');
    if !(1..=12).contains(&month) {
        return false;
    }

    if !b[8].is_ascii_digit() || !b[9].is_ascii_digit() {
        return false;
    }
    let day = (b[8] - b'0') * 10 + (b[9] - b'0');
    if !(1..=31).contains(&day) {
        return false;
    }

    if b.len() == 10 {
        return true;
    }

    if b[10] == b' ' || b[10] == b'T' {
        if b[10] == b' ' && b.len() >= 19 {
            let time = &b[11..19];
            if time[2] == b':' && time[5] == b':' {
                for pos in [0, 1, 3, 4, 6, 7] {
                    if !time[pos].is_ascii_digit() {
                        return false;
                    }
                }
                let hours = (time[0] - b'0') * 10 + (time[1] - b'0');
                let minutes = (time[3] - b'0') * 10 + (time[4] - b'0');
                let seconds = (time[6] - b'0') * 10 + (time[7] - b'0');
                if hours > 23 || minutes > 59 || seconds > 59 {
                    return false;
                }
            }
        }
        return true;
    }

    false
}

/// Case-insensitive vocabulary match against the key name, plus the
/// `name@target` convention used for per-display connection records
/// (`lastConnected@Display:2` and friends).
pub fn is_timestamp_key(key: &str) -> bool {
    let lower = key.to_lowercase();

    if TIMESTAMP_KEY_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
    {
        return true;
    }

    key.contains('@')
        && (lower.contains("connected") || lower.contains("seen") || lower.contains("accessed"))
}

/// Seconds since 1970-01-01, bounded to the years 2000 through 2040.
pub fn is_unix_timestamp(value: f64) -> bool {
    (946_684_800.0..=2_208_988_800.0).contains(&value)
}

/// Seconds since 2001-01-01, bounded to roughly 2004 through 2040; the
/// lower bound keeps small counters from matching.
pub fn is_cf_absolute_time(value: f64) -> bool {
    (100_000_000.0..=1_230_768_000.0).contains(&value)
}

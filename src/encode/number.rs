use itoa::Buffer as ItoaBuffer;
use ryu::Buffer as RyuBuffer;

use super::writer::Writer;

pub(crate) fn push_integer(out: &mut Writer, value: i64) {
    let mut buf = ItoaBuffer::new();
    out.push_str(buf.format(value));
}

/// Render a float at up to 15 significant digits, never in exponent
/// notation, with trailing zeros trimmed. Integer-valued results collapse
/// to plain integers.
pub(crate) fn push_float(out: &mut Writer, value: f64) {
    let rounded = round_to_15_significant(value);

    if rounded.fract() == 0.0 && rounded.abs() <= i64::MAX as f64 {
        push_integer(out, rounded as i64);
        return;
    }

    let mut buf = RyuBuffer::new();
    let formatted = buf.format(rounded);

    if formatted.contains('e') || formatted.contains('E') {
        // Expand with high precision, then trim.
        push_trimmed_decimal(out, &format!("{rounded:.17}"));
    } else {
        push_trimmed_decimal(out, formatted);
    }
}

fn round_to_15_significant(value: f64) -> f64 {
    // 1 leading digit + 14 fraction digits of mantissa.
    format!("{value:.14e}").parse().unwrap_or(value)
}

fn push_trimmed_decimal(out: &mut Writer, s: &str) {
    if let Some((int_part, frac_part)) = s.split_once('.') {
        let trimmed = frac_part.trim_end_matches('0');
        if trimmed.is_empty() {
            out.push_str(int_part);
        } else {
            out.push_str(int_part);
            out.push_char('.');
            out.push_str(trimmed);
        }
    } else {
        out.push_str(s);
    }
}

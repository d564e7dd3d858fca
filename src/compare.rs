use std::cmp::Ordering;

use bstr::ByteSlice;

use crate::config::Config;

/// Order two records for `dynsort`.
///
/// Bytewise by default, by leading number with `-n`, flipped with `-r`.
/// Records that compare equal keep their input order because the merge
/// sort is stable; there is no last-resort tie break.
pub fn compare_records(a: &[u8], b: &[u8], config: &Config) -> Ordering {
    let ord = if config.numeric {
        compare_numeric(a, b)
    } else {
        a.cmp(b)
    };
    if config.reverse { ord.reverse() } else { ord }
}

/// Compare by leading numeric value. Records without one count as zero.
pub fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    leading_number(a)
        .partial_cmp(&leading_number(b))
        .unwrap_or(Ordering::Equal)
}

/// Parse `[ \t]*[+-]?digits[.digits]` from the front of a record.
///
/// No exponent form. Stops at the first byte that does not fit, so invalid
/// UTF-8 after the number is harmless.
fn leading_number(record: &[u8]) -> f64 {
    let text = record.trim_start_with(|c| c == ' ' || c == '\t');

    let sign_len = usize::from(matches!(text.first(), Some(b'+' | b'-')));
    let mut seen_dot = false;
    let body_len = text[sign_len..]
        .iter()
        .take_while(|&&c| match c {
            b'0'..=b'9' => true,
            b'.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .count();

    std::str::from_utf8(&text[..sign_len + body_len])
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

//! Textual rendering of peak values.
//!
//! Values are printed in their shortest round-trip form. Integral values keep
//! a trailing `.0`, and scientific notation (used below `1e-4` and from
//! `1e16` upward) always carries a signed exponent of at least two digits,
//! e.g. `1e-05` or `1.5e+16`.

use std::fmt::Write;

/// Render a float the way MGF peak lists from this tool are written
pub fn format_value(value: f64) -> String {
    let mut out = String::new();
    push_value(&mut out, value);
    out
}

/// Append a rendered float to `out`
pub fn push_value(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("nan");
        return;
    }

    // `{:?}` already picks the shortest representation and switches to
    // exponent form at the same thresholds; only the exponent differs.
    let start = out.len();
    let _ = write!(out, "{:?}", value);
    let Some(e_pos) = out[start..].find('e').map(|i| i + start) else {
        return;
    };

    let exponent = out.split_off(e_pos + 1);
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent.as_str()),
    };
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
}

//! Textual representation helpers.
//!
//! Coordinates are rendered in the C `%g` style (6 significant digits,
//! trailing zeros stripped, exponent form outside `[1e-4, 1e6)`), so
//! `Seq2([(0.25, 3.5), (1.3, 4.25)])` is stable across platforms.

use std::fmt::Write;

use super::Vec2;

const SIG_DIGITS: i32 = 6;

/// Format a float like C's `%g`.
pub fn fmt_g(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let sci = format!("{:.*e}", (SIG_DIGITS - 1) as usize, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..SIG_DIGITS).contains(&exp) {
        let fixed = format!("{:.*}", (SIG_DIGITS - 1 - exp) as usize, v);
        strip_zeros(&fixed).to_string()
    } else {
        format!(
            "{}e{}{:02}",
            strip_zeros(mantissa),
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `(x, y)`; signed zeros print as `0`.
pub(crate) fn fmt_point(p: Vec2) -> String {
    format!("({}, {})", fmt_g(p.x + 0.0), fmt_g(p.y + 0.0))
}

/// `Name([(x, y), (x, y), ...])`
pub(crate) fn fmt_points(name: &str, pts: &[Vec2]) -> String {
    let mut out = String::with_capacity(name.len() + 4 + pts.len() * 12);
    out.push_str(name);
    out.push_str("([");
    for (i, p) in pts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", fmt_point(*p));
    }
    out.push_str("])");
    out
}

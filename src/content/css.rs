//! CSS value generators
//!
//! Each function returns one randomized string that is valid for the
//! corresponding CSS grammar production: `<integer>`, `<number>`,
//! `<length>`, `<color>`, `<opacity-value>`.

use crate::source::UniformSource;

/// CSS length units
const UNITS: [&str; 9] = ["em", "ex", "px", "in", "cm", "mm", "pt", "pc", "%"];

/// Named colors the generator may emit
const NAMED_COLORS: [&str; 3] = ["red", "green", "blue"];

/// Random CSS `<integer>` string
///
/// An optionally signed integer in [0, 10]; the sign slot may also be a
/// space, which trims away.
pub fn integer(src: &mut UniformSource) -> String {
    let sign = src.char_of("+- ").unwrap_or(' ');
    format!("{}{}", sign, src.int_in(0, 10)).trim().to_string()
}

/// Random CSS `<number>` string
///
/// Either an `<integer>` or an optionally signed decimal fraction.
pub fn number(src: &mut UniformSource) -> String {
    if src.coin(0.5) {
        return integer(src);
    }

    let sign = src.char_of("+- ").unwrap_or(' ');
    let whole = if src.coin(0.5) {
        src.int_in(0, 100).to_string()
    } else {
        String::new()
    };
    format!("{}{}.{}", sign, whole, src.int_in(0, 100))
        .trim()
        .to_string()
}

/// Random CSS `<length>` string
///
/// A `<number>` followed by a unit. With `positive` set, a leading minus
/// sign is stripped.
pub fn length(src: &mut UniformSource, positive: bool) -> String {
    let unit = UNITS[src.index(UNITS.len())];
    let value = format!("{}{}", number(src), unit);
    if positive && value.starts_with('-') {
        value.replacen('-', "", 1)
    } else {
        value
    }
}

/// Random CSS `<color>` string
///
/// One of: 3-digit hex, 6-digit hex, a named color, or an `rgb()` form
/// with byte or percentage components, optionally carrying an alpha
/// channel.
pub fn color(src: &mut UniformSource) -> String {
    if src.coin(1.0 / 7.0) {
        return format!("#{}", hex_digits(src, 3));
    }
    if src.coin(1.0 / 6.0) {
        return format!("#{}", hex_digits(src, 6));
    }
    if src.coin(1.0 / 5.0) {
        return NAMED_COLORS[src.index(NAMED_COLORS.len())].to_string();
    }
    if src.coin(1.0 / 4.0) {
        return format!("rgb({})", join_ints(src, 0, 255, 3, ","));
    }
    if src.coin(1.0 / 3.0) {
        return format!("rgb({},{})", join_ints(src, 0, 255, 3, ","), src.float());
    }
    if src.coin(1.0 / 2.0) {
        return format!("rgb({}%)", join_ints(src, 0, 100, 3, "%,"));
    }
    format!("rgb({}%,{})", join_ints(src, 0, 100, 3, "%,"), src.float())
}

/// Random CSS `<opacity-value>` string
pub fn opacity_value(src: &mut UniformSource) -> String {
    src.float().to_string()
}

fn hex_digits(src: &mut UniformSource, k: usize) -> String {
    src.chars_of("0123456789abcdef", k).into_iter().collect()
}

fn join_ints(src: &mut UniformSource, min: i64, max: i64, k: usize, sep: &str) -> String {
    (0..k)
        .map(|_| src.int_in(min, max).to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

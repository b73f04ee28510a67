//! SVG value generators
//!
//! Randomized strings for the SVG attribute grammars: `<integer>`,
//! `<number>`, `<length>`, `<coordinate>`, `<color>`, `<opacity-value>`,
//! `<transform-list>`, `<point>`.
//!
//! SVG numbers extend the CSS forms with an optional exponent part, and
//! SVG lengths allow a unitless form.

use super::css;
use crate::source::UniformSource;

/// SVG length units (the empty string is the unitless form)
const UNITS: [&str; 10] = ["", "em", "ex", "px", "in", "cm", "mm", "pt", "pc", "%"];

/// Transform function names, in emission order
const TRANSFORMS: [&str; 6] = ["matrix", "translate", "scale", "rotate", "skewX", "skewY"];

/// Random SVG `<integer>` string
pub fn integer(src: &mut UniformSource) -> String {
    css::integer(src)
}

/// Random SVG `<number>` string
///
/// An integer or decimal fraction, either optionally followed by an
/// exponent part.
pub fn number(src: &mut UniformSource) -> String {
    if src.coin(0.5) {
        let mut s = integer(src);
        if src.coin(0.5) {
            s.push(src.char_of("Ee").unwrap_or('e'));
            s.push_str(&integer(src));
        }
        return s;
    }

    let sign = src.char_of("+- ").unwrap_or(' ');
    let whole = if src.coin(0.5) {
        src.int_in(0, 100).to_string()
    } else {
        String::new()
    };
    let mut s = format!("{}{}.{}", sign, whole, src.int_in(0, 100));
    if src.coin(0.5) {
        s.push(src.char_of("Ee").unwrap_or('e'));
        s.push_str(&integer(src));
    }
    s.trim().to_string()
}

/// Random SVG `<length>` string
///
/// A `<number>` with an optional unit. With `positive` set, a leading
/// minus sign is stripped.
pub fn length(src: &mut UniformSource, positive: bool) -> String {
    let unit = UNITS[src.index(UNITS.len())];
    let value = format!("{}{}", number(src), unit);
    if positive && value.starts_with('-') {
        value.replacen('-', "", 1)
    } else {
        value
    }
}

/// Random SVG `<coordinate>` string
pub fn coordinate(src: &mut UniformSource) -> String {
    length(src, false)
}

/// Random SVG `<color>` string
pub fn color(src: &mut UniformSource) -> String {
    css::color(src)
}

/// Random SVG `<opacity-value>` string
pub fn opacity_value(src: &mut UniformSource) -> String {
    css::opacity_value(src)
}

/// Random SVG `<transform-list>` string
///
/// A non-empty, space-separated sequence over matrix/translate/scale/
/// rotate/skewX/skewY, each included with probability 1/2 per pass;
/// passes repeat until at least one entry lands.
pub fn transform_list(src: &mut UniformSource) -> String {
    let mut out = String::new();

    while out.is_empty() {
        for &t in &TRANSFORMS {
            if src.coin(0.5) {
                continue;
            }

            out.push_str(t);
            out.push('(');
            match t {
                "matrix" => out.push_str(&join_floats(src, -10.0, 10.0, 6)),
                "translate" => {
                    out.push_str(&src.float_in(-10.0, 10.0).to_string());
                    if src.coin(0.5) {
                        out.push(',');
                        out.push_str(&src.float_in(-10.0, 10.0).to_string());
                    }
                }
                "scale" => {
                    out.push_str(&src.float_in(0.0, 10.0).to_string());
                    if src.coin(0.5) {
                        out.push(',');
                        out.push_str(&src.float_in(0.0, 10.0).to_string());
                    }
                }
                "rotate" => {
                    out.push_str(&src.float_in(-10.0, 10.0).to_string());
                    if src.coin(0.5) {
                        out.push(',');
                        out.push_str(&join_floats(src, -10.0, 10.0, 2));
                    }
                }
                // skewX, skewY
                _ => out.push_str(&src.float_in(-10.0, 10.0).to_string()),
            }
            out.push_str(") ");
        }
    }

    out.trim_end().to_string()
}

/// Random SVG `<point>` string: an "x,y" pair in [-10, 10]
pub fn point(src: &mut UniformSource) -> String {
    join_floats(src, -10.0, 10.0, 2)
}

fn join_floats(src: &mut UniformSource, min: f64, max: f64, k: usize) -> String {
    (0..k)
        .map(|_| src.float_in(min, max).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

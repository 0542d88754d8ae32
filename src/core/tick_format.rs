//! Translation from column display formats to axis tick formats.
//!
//! Columns carry a display format written as a replacement field, e.g.
//! `{:,.2f}`. The chart grammar labels axis ticks with d3-format specifiers,
//! which use the same mini-language minus the braces, so translation is mostly
//! extraction. The one difference: a specifier without a type code makes
//! d3-format pick its own precision (`format(30) == "3e+1"`), so those get the
//! `r` (rounded significant digits) type appended.

/// Type codes d3-format understands as-is.
const NUMERIC_TYPE_CODES: &str = "bcdoxXneEfFgG%";

/// Converts a `{:...}` display format into a d3-format tick specifier.
///
/// `{:,.2f}` becomes `,.2f`; `{:,}` becomes `,r`. A format without any
/// replacement field translates as an empty specifier, i.e. `r`.
#[must_use]
pub fn d3_tick_format(display_format: &str) -> String {
    let mut specifier = first_format_spec(display_format).unwrap_or_default();
    if !specifier
        .chars()
        .last()
        .is_some_and(|code| NUMERIC_TYPE_CODES.contains(code))
    {
        specifier.push('r');
    }
    specifier
}

/// Whether ticks rendered with `tick_format` can only show whole numbers.
#[must_use]
pub fn is_integer_tick_format(tick_format: &str) -> bool {
    tick_format.ends_with('d')
}

/// Returns the format spec (text after the field's `:`) of the first
/// replacement field, or `None` when the string has no field.
///
/// `{{` and `}}` are literal braces. Nested fields inside the spec are kept
/// verbatim.
fn first_format_spec(display_format: &str) -> Option<String> {
    let mut chars = display_format.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().is_some_and(|(_, next)| *next == '{') => {
                chars.next();
            }
            '{' => {
                let field = matched_field(&display_format[index + 1..])?;
                return Some(spec_of_field(field).to_owned());
            }
            _ => {}
        }
    }
    None
}

/// Body of a replacement field up to its matching `}`.
fn matched_field(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (index, ch) in rest.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..index]);
                }
            }
            _ => {}
        }
    }
    None
}

fn spec_of_field(field: &str) -> &str {
    // Index brackets in the field name may contain `:` or `!`.
    let mut in_brackets = false;
    for (index, ch) in field.char_indices() {
        match ch {
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            ':' if !in_brackets => return &field[index + 1..],
            _ => {}
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_specifiers_with_a_type_code() {
        assert_eq!(d3_tick_format("{:,.2f}"), ",.2f");
        assert_eq!(d3_tick_format("{:d}"), "d");
        assert_eq!(d3_tick_format("{:.1%}"), ".1%");
        assert_eq!(d3_tick_format("{:x}"), "x");
    }

    #[test]
    fn appends_round_type_when_code_is_missing() {
        assert_eq!(d3_tick_format("{:,}"), ",r");
        assert_eq!(d3_tick_format("{}"), "r");
        assert_eq!(d3_tick_format("{:.3}"), ".3r");
    }

    #[test]
    fn ignores_literal_text_and_escaped_braces() {
        assert_eq!(d3_tick_format("${:,.2f}"), ",.2f");
        assert_eq!(d3_tick_format("{{}} {:,d} units"), ",d");
        assert_eq!(d3_tick_format("no field"), "r");
    }

    #[test]
    fn field_names_and_conversions_are_skipped() {
        assert_eq!(d3_tick_format("{0:,.1f}"), ",.1f");
        assert_eq!(d3_tick_format("{value!s:>10}"), ">10r");
        assert_eq!(d3_tick_format("{row[a:b]:e}"), "e");
    }

    #[test]
    fn integer_formats_are_detected_by_trailing_d() {
        assert!(is_integer_tick_format(",d"));
        assert!(!is_integer_tick_format(",.2f"));
        assert!(!is_integer_tick_format(""));
    }
}

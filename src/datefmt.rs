//! Moment-style date format translation
//!
//! Planner settings carry filename date formats in moment.js token syntax
//! (`YYYY-MM-DD`, `ddd DD MMM`), the convention users know from note-taking
//! tools. This module rewrites those tokens to chrono `format` specifiers.

use chrono::{DateTime, Local};

/// Token table, ordered longest-first per letter so the scanner can take
/// the first prefix match.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate a moment-style format string to a chrono format string.
///
/// Bracketed segments (`[literal]`) pass through untranslated, matching
/// moment's escaping rules. A literal `%` is escaped for chrono.
pub fn to_chrono_format(moment: &str) -> String {
    let mut out = String::with_capacity(moment.len() * 2);
    let mut i = 0;

    while i < moment.len() {
        let rest = &moment[i..];

        if let Some(stripped) = rest.strip_prefix('[') {
            match stripped.find(']') {
                Some(end) => {
                    push_literal(&mut out, &stripped[..end]);
                    i += end + 2;
                }
                None => {
                    // Unterminated bracket: treat the remainder as literal
                    push_literal(&mut out, stripped);
                    i = moment.len();
                }
            }
            continue;
        }

        if let Some(&(token, spec)) = TOKENS.iter().find(|&&(token, _)| rest.starts_with(token)) {
            out.push_str(spec);
            i += token.len();
            continue;
        }

        let ch = rest.chars().next().unwrap();
        push_literal(&mut out, &rest[..ch.len_utf8()]);
        i += ch.len_utf8();
    }

    out
}

fn push_literal(out: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}

/// Format a moment with a moment-style format string.
pub fn format_moment(now: &DateTime<Local>, moment_format: &str) -> String {
    now.format(&to_chrono_format(moment_format)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn moment() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap()
    }

    #[test]
    fn test_iso_date_tokens() {
        assert_eq!(to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(format_moment(&moment(), "YYYY-MM-DD"), "2024-03-05");
    }

    #[test]
    fn test_unpadded_tokens() {
        assert_eq!(format_moment(&moment(), "D/M/YYYY"), "5/3/2024");
    }

    #[test]
    fn test_name_tokens() {
        assert_eq!(format_moment(&moment(), "ddd DD MMM"), "Tue 05 Mar");
        assert_eq!(format_moment(&moment(), "dddd, MMMM D"), "Tuesday, March 5");
    }

    #[test]
    fn test_time_tokens() {
        assert_eq!(format_moment(&moment(), "HH-mm-ss"), "09-07-03");
    }

    #[test]
    fn test_bracketed_literal() {
        assert_eq!(to_chrono_format("[Day] YYYY"), "Day %Y");
        assert_eq!(format_moment(&moment(), "[Plan for] YYYY-MM-DD"), "Plan for 2024-03-05");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(to_chrono_format("YYYY %"), "%Y %%");
    }

    #[test]
    fn test_token_letters_outside_brackets_are_tokens() {
        // Unbracketed letters translate like moment does; literals need brackets
        assert_eq!(to_chrono_format("YYYY.MM.DD"), "%Y.%m.%d");
        assert_eq!(format_moment(&moment(), "[W]WW"), "WWW");
    }
}

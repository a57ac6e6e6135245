//! Character-level markup within a single line

use regex::Regex;

// The passes run in this order. Bold must consume `**` pairs before the
// italic pass sees single asterisks.
static BOLD_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static CODE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

const CODE_REPLACEMENT: &str = "<code style=\"background-color: #f4f4f4; padding: 2px 4px; \
                                border-radius: 3px;\">${1}</code>";

/// Apply bold, italic and inline-code markup to one line.
///
/// Unmatched delimiters are left as literal characters. A stray `**` that has
/// no partner is picked up by the italic pass as an empty `<em></em>`.
///
/// The input is **not** HTML-escaped: `<` and `&` pass through untouched, so
/// untrusted text must be escaped before it reaches this function.
#[must_use]
pub fn style(line: &str) -> String {
    let bold = BOLD_REGEX.replace_all(line, "<strong>${1}</strong>");
    let italic = ITALIC_REGEX.replace_all(&bold, "<em>${1}</em>");
    CODE_REGEX.replace_all(&italic, CODE_REPLACEMENT).into_owned()
}

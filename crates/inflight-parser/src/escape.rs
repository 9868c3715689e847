use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Real ANSI control sequences (colors, cursor movement)
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap());

/// What a color code looks like once the ESC byte is lost in a copy/paste,
/// e.g. "[0m10:03:09" from the dbt Cloud console
static PASTED_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d{1,3}(?:;\d{1,3})*m").unwrap());

/// Remove terminal color escapes and their pasted remnants from a line
pub fn strip_escapes(line: &str) -> Cow<'_, str> {
    let without_ansi = ANSI_REGEX.replace_all(line, "");
    match without_ansi {
        Cow::Borrowed(s) => PASTED_COLOR_REGEX.replace_all(s, ""),
        Cow::Owned(s) => Cow::Owned(PASTED_COLOR_REGEX.replace_all(&s, "").into_owned()),
    }
}

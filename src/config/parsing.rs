//! Line-level helpers for `key = value` configuration files.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`.
/// - Inline comments are stripped from the value.
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim()).to_string()))
}

/// What: Remove a trailing `# ...` or `// ...` comment from a value.
///
/// Details:
/// - `//` preceded by `:` (as in `http://`) is kept so URLs survive.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s.as_bytes()[i - 1] == b':' {
            search_from = i + 2;
            continue;
        }
        end = i;
        break;
    }
    if let Some(i) = s[..end].find(" #") {
        end = i;
    } else if s[..end].starts_with('#') {
        end = 0;
    }
    s[..end].trim()
}

/// What: Interpret a config value as a boolean.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (case-insensitive); `false` otherwise.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

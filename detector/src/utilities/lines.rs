/// Returns the trimmed, non-blank lines of `text` in order.
///
/// Any of `\n`, `\r\n` or `\r` ends a line. Blank lines are dropped entirely, so the
/// position of a line in the returned vector (plus one) is its number among non-blank lines.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

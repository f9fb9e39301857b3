// src/processing/counter.rs

/// Counts the line segments in `content`.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. The text after the final
/// break counts as a line only if it is non-empty, so a trailing newline does
/// not add a line and empty content has zero lines.
///
/// # Examples
///
/// ```
/// use treecat::processing::count_lines;
///
/// assert_eq!(count_lines("a\nb\nc"), 3);
/// assert_eq!(count_lines("a\nb\nc\n"), 3);
/// assert_eq!(count_lines("x\ry\rz"), 3);
/// assert_eq!(count_lines(""), 0);
/// ```
pub fn count_lines(content: &str) -> usize {
    let bytes = content.as_bytes();
    let breaks = bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count();
    let unterminated = !matches!(bytes.last(), None | Some(b'\n' | b'\r'));
    breaks + usize::from(unterminated)
}

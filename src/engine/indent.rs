//! Indent width measurement and the insertion computation.
//!
//! Pure functions: no host dependencies, no error conditions. A tab counts
//! as `tab_size` columns, a space as one column.

use super::fibonacci;

/// True when `text` is a non-empty run of tabs and spaces only.
pub fn is_whitespace_run(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == ' ' || c == '\t')
}

/// Column width of the leading whitespace in `text`, scanning at most
/// `cursor_col` characters.
pub fn indent_width(text: &str, cursor_col: usize, tab_size: u8) -> usize {
    let mut width = 0;
    for ch in text.chars().take(cursor_col) {
        match ch {
            '\t' => width += usize::from(tab_size),
            ' ' => width += 1,
            _ => {}
        }
    }
    width
}

/// Computes the space-character string that brings the indent of a line up
/// to the next (or current) Fibonacci level.
///
/// `before_cursor` is the line text from the line start up to the cursor.
/// When it is not a pure whitespace run the line has no indentation yet and
/// the result is a flat `tab_size` spaces (bootstrap case). Otherwise the
/// width is bracketed between two ladder terms; with `force_advance` the
/// target is always the next term, without it a width sitting exactly on a
/// term stays there (zero-length result). A width strictly between two terms
/// is always rounded up, never down.
pub fn compute_insertion(
    before_cursor: &str,
    cursor_col: usize,
    tab_size: u8,
    force_advance: bool,
) -> String {
    if !is_whitespace_run(before_cursor) {
        return " ".repeat(usize::from(tab_size));
    }

    let width = indent_width(before_cursor, cursor_col, tab_size);
    let (current, next) = fibonacci::bracket(width, usize::from(tab_size));

    let target = if !force_advance && width == current {
        current
    } else {
        next
    };
    " ".repeat(target - width)
}

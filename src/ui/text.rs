//! Display sanitizing for server-provided text
//!
//! Book names, titles and chapter bodies come from the server verbatim.
//! Before they reach the terminal, control characters are removed so a
//! payload cannot inject escape sequences, move the cursor or clear the
//! screen. Newlines survive and tabs become spaces.

use std::borrow::Cow;

const TAB_WIDTH: usize = 4;

/// Make `text` safe to print on a terminal
///
/// Returns the input unchanged when nothing needed stripping.
///
/// # Examples
/// ```
/// use readr::ui::sanitize_display;
///
/// assert_eq!(sanitize_display("a\x1b[2Jb"), "a[2Jb");
/// assert_eq!(sanitize_display("line\nnext"), "line\nnext");
/// ```
#[must_use]
pub fn sanitize_display(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_rewrite) {
        return Cow::Borrowed(text);
    }

    let mut clean = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => clean.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            '\n' => clean.push('\n'),
            '\r' => {}
            c if c.is_control() => {}
            c => clean.push(c),
        }
    }
    Cow::Owned(clean)
}

/// Sanitize `text` and flatten it to a single line
#[must_use]
pub fn sanitize_line(text: &str) -> String {
    sanitize_display(text).replace('\n', " ")
}

fn needs_rewrite(c: char) -> bool {
    c != '\n' && c.is_control()
}

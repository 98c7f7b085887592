//! vCard value decoding.

/// Unescapes a vCard text value.
///
/// Reverses `\\`, `\;`, `\,` and `\n` (or `\N`). Any other backslash
/// sequence is kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

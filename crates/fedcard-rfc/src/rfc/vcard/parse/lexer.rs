//! vCard lexer for line unfolding and content line parsing.
//!
//! vCard uses the same folding/unfolding rules as iCalendar (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Unfolds a vCard document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab.
/// Also handles bare LF for lenient parsing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits unfolded input into logical lines, dropping blank ones.
#[must_use]
pub fn split_lines(input: &str) -> Vec<&str> {
    input.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    // Only look for the dot before any parameters start.
    let name_end = s.find(';').unwrap_or(s.len());
    if let Some(dot_pos) = s[..name_end].find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns the remaining string.
///
/// A bare value without `=` (vCard 2.1 style, e.g. `EMAIL;INTERNET:`) is read
/// as a TYPE value.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let name_end = s.find(['=', ';']).unwrap_or(s.len());
    let name = &s[..name_end];

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "empty parameter name",
        ));
    }

    if s[name_end..].starts_with('=') {
        let (values, remaining) = parse_param_values(&s[name_end + 1..]);
        return Ok((VCardParameter::multi(name, values), remaining));
    }

    let remaining = s[name_end..].strip_prefix(';').unwrap_or("");
    Ok((VCardParameter::type_param(name), remaining))
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.char_indices().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current_value)),
            ';' if !in_quotes => {
                values.push(current_value);
                return (values, &s[i + 1..]);
            }
            '^' => match chars.peek().map(|&(_, next)| next) {
                // RFC 6868 caret encoding
                Some('n') => {
                    chars.next();
                    current_value.push('\n');
                }
                Some('\'') => {
                    chars.next();
                    current_value.push('"');
                }
                Some('^') => {
                    chars.next();
                    current_value.push('^');
                }
                _ => current_value.push('^'),
            },
            _ => current_value.push(c),
        }
    }

    values.push(current_value);
    (values, "")
}

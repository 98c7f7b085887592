//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines, unfold};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardVersion, names};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
/// Content outside `BEGIN:VCARD`/`END:VCARD` blocks is ignored.
///
/// ## Errors
/// Returns a parse error if a block is unterminated, nested, closed with the
/// wrong marker, or contains a malformed content line.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::trace!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::trace!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
/// Additional cards after the first are ignored.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            let line_num = self.current_line();
            self.pos += 1;

            if is_marker(line, "BEGIN") {
                cards.push(self.parse_vcard(line_num)?);
            } else if is_marker(line, "END") {
                return Err(ParseError::unexpected(line_num, "BEGIN:VCARD", line));
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self, start_line: usize) -> ParseResult<VCard> {
        let mut version = VCardVersion::default();
        let mut properties = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            let line_num = self.current_line();
            self.pos += 1;

            if is_marker(line, "END") {
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            if is_marker(line, "BEGIN") {
                return Err(ParseError::unexpected(line_num, "END:VCARD", line));
            }

            let content_line = parse_content_line(line, line_num)?;

            if content_line.name == names::VERSION {
                version = VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else if content_line.name == "BEGIN" || content_line.name == "END" {
                return Err(ParseError::unexpected(line_num, "END:VCARD", line));
            } else {
                properties.push(VCardProperty::from_raw(
                    content_line.group,
                    content_line.name,
                    content_line.params,
                    content_line.value,
                ));
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }
}

/// Returns whether `line` is `BEGIN:VCARD` / `END:VCARD` for the given marker.
fn is_marker(line: &str, marker: &str) -> bool {
    line.split_once(':').is_some_and(|(name, value)| {
        name.trim().eq_ignore_ascii_case(marker) && value.trim().eq_ignore_ascii_case("VCARD")
    })
}

//! vCard parsing.
//!
//! ## Features
//!
//! - Accepts vCard 3.0 and 4.0
//! - Handles line folding/unfolding (CRLF or bare LF)
//! - Parses property groups (item1.TEL) and parameters, including
//!   quoted values and RFC 6868 caret encoding
//! - Rejects unterminated, nested or mismatched BEGIN/END blocks

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::unescape_text;

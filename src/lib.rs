#![allow(clippy::module_inception)]

use crate::lexer::tokens::Token;

pub mod constants;
pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::{
    dump::{dump, write_dump},
    lexer::{scan, Scanner},
    tokens::{match_keyword, match_symbol, TokenKind},
};

/// Returns the text of the 0-based `line`, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Builds a caret diagnostic pointing at an UNKNOWN token.
pub fn display_unknown(token: &Token, source: &str, file: &str) -> String {
    /*
        Warning: unknown token `1.2.3`
        -> file.ty
          |
        3 | x = 1.2.3
          |     ^^^^^
    */

    let line_str = (token.line + 1).to_string();
    let padding = line_str.len() + 2;
    let line_text = get_line(source, token.line).unwrap_or_default();
    let carets = "^".repeat(token.end_col.saturating_sub(token.start_col).max(1));

    let mut out = String::new();
    out.push_str(&format!(
        "Warning: unknown token `{}`\n",
        token.text.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text));
    out.push_str(&format!(
        "{:>padding$} {}{}\n",
        "|",
        " ".repeat(token.start_col),
        carets
    ));
    out
}

//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a flat
//! stream of tokens. It handles:
//!
//! - INDENT/DEDENT synthesis from leading blanks
//! - Keywords, identifiers, numeric and string literals
//! - Longest-match operators and punctuation
//! - Comments and whitespace
//! - Rendering the token stream as a text dump

pub mod dump;
pub mod lexer;
pub mod tokens;

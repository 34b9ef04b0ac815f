use tracing::{debug, trace};

use crate::{constants::TAB_SIZE, MK_TOKEN};

use super::tokens::{match_keyword, match_symbol, Token, TokenKind};

/// Scanning state for one source buffer. Nothing here outlives the scan
/// except the tokens it hands back.
#[derive(Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    cursor: usize,
    line: usize,
    col: usize,
    line_start: usize,
    level: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            source,
            tokens: vec![],
            cursor: 0,
            line: 0,
            col: 0,
            line_start: 0,
            level: 0,
        }
    }

    /// Runs the dispatch loop until the cursor reaches the end of the source.
    pub fn tokenize(&mut self) {
        while let Some(c) = self.peek() {
            if is_space(c) {
                if c == b'\n' {
                    self.scan_newline();
                } else {
                    self.cursor += 1;
                    self.col += 1;
                }
            } else if is_word(c) {
                if c.is_ascii_digit() {
                    self.scan_number();
                } else {
                    self.scan_ident();
                }
            } else if c == b'"' || c == b'\'' {
                self.scan_string(c);
            } else if c == b'#' {
                self.scan_comment();
            } else if c.is_ascii_punctuation() {
                self.scan_symbol();
            } else {
                trace!(byte = c, line = self.line, "dropping unrecognised byte");
                self.cursor += 1;
            }
        }

        debug!(
            bytes = self.source.len(),
            tokens = self.tokens.len(),
            "scan complete"
        );
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn indent_level(&self) -> usize {
        self.level
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.cursor).copied()
    }

    /// Consumes bytes while `pred` holds and returns them. `pred` must reject
    /// some ASCII byte to stop on, so the slice ends on a char boundary.
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'src str {
        let source = self.source;
        let start = self.cursor;
        while self.peek().is_some_and(&pred) {
            self.cursor += 1;
        }
        &source[start..self.cursor]
    }

    /// Pushes a token starting at the current column and moves the column
    /// past it. The cursor must already be past the lexeme.
    fn push_lexeme(&mut self, kind: TokenKind, text: Option<String>, width: usize) {
        if kind == TokenKind::Unknown {
            trace!(?text, line = self.line, col = self.col, "unknown token");
        }
        self.tokens.push(MK_TOKEN!(
            kind,
            text,
            self.line,
            self.col,
            self.col + width
        ));
        self.col += width;
    }

    fn scan_newline(&mut self) {
        self.tokens.push(MK_TOKEN!(
            TokenKind::Newline,
            None,
            self.line,
            self.col,
            self.col + 1
        ));
        self.cursor += 1;
        self.line += 1;
        self.col = 0;
        self.line_start = self.cursor;
        self.scan_indent();
    }

    fn scan_indent(&mut self) {
        debug_assert_eq!(self.col, 0);
        let blanks = self.eat_while(|c| c == b' ' || c == b'\t').len();
        self.col += blanks;

        let width = self.cursor - self.line_start;
        let new_level = (width + 1) / TAB_SIZE;
        if new_level != self.level {
            trace!(from = self.level, to = new_level, line = self.line, "indentation change");
        }

        while self.level < new_level {
            self.tokens.push(MK_TOKEN!(TokenKind::Indent, None, self.line, 0, TAB_SIZE));
            self.level += 1;
        }
        while self.level > new_level {
            self.tokens.push(MK_TOKEN!(TokenKind::Dedent, None, self.line, 0, TAB_SIZE));
            self.level -= 1;
        }
    }

    fn scan_number(&mut self) {
        let text = self.eat_while(|c| is_word(c) || c == b'.');
        let n_periods = text.bytes().filter(|&c| c == b'.').count();
        let valid = text.bytes().all(|c| c.is_ascii_digit() || c == b'.');

        let kind = if n_periods > 1 || !valid {
            TokenKind::Unknown
        } else if n_periods == 1 {
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        self.push_lexeme(kind, Some(text.to_string()), text.len());
    }

    fn scan_ident(&mut self) {
        let text = self.eat_while(is_word);

        match match_keyword(text) {
            Some(kind) => self.push_lexeme(kind, None, text.len()),
            None => self.push_lexeme(TokenKind::Ident, Some(text.to_string()), text.len()),
        }
    }

    /// Strings run to the matching quote on the same line. Hitting a newline
    /// or the end of the source first yields UNKNOWN with the partial text.
    fn scan_string(&mut self, quote: u8) {
        let source = self.source;
        let start = self.cursor;
        self.cursor += 1;
        self.eat_while(|c| c != quote && c != b'\n');

        let kind = if self.peek() == Some(quote) {
            self.cursor += 1;
            TokenKind::String
        } else {
            TokenKind::Unknown
        };

        let text = &source[start..self.cursor];
        self.push_lexeme(kind, Some(text.to_string()), text.len());
    }

    fn scan_comment(&mut self) {
        let comment = self.eat_while(|c| c != b'\n');
        self.col += comment.len();
    }

    /// Longest match with backoff: the whole punctuation run is tried first,
    /// then shorter prefixes. Whatever is not matched goes back to the input.
    fn scan_symbol(&mut self) {
        let start = self.cursor;
        let run = self.eat_while(|c| c.is_ascii_punctuation());

        let mut len = run.len();
        let kind = loop {
            if let Some(kind) = match_symbol(&run[..len]) {
                break kind;
            }
            if len == 1 {
                break TokenKind::Unknown;
            }
            len -= 1;
        };

        self.cursor = start + len;
        let text = (kind == TokenKind::Unknown).then(|| run[..len].to_string());
        self.push_lexeme(kind, text, len);
    }
}

fn is_word(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b'\x0b'
}

/// Scans `source` into its full token sequence.
pub fn scan(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    scanner.tokenize();
    scanner.into_tokens()
}

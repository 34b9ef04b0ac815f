use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("pass", TokenKind::Pass);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("return", TokenKind::Return);
        map.insert("del", TokenKind::Del);
        map.insert("type", TokenKind::Type);
        map.insert("assert", TokenKind::Assert);
        map.insert("def", TokenKind::Def);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map.insert(",", TokenKind::Comma);
        map.insert(".", TokenKind::Dot);
        map.insert(";", TokenKind::Semicolon);
        map.insert(":", TokenKind::Colon);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("/", TokenKind::Slash);
        map.insert("*", TokenKind::Star);
        map.insert("**", TokenKind::StarStar);
        map.insert("<", TokenKind::Less);
        map.insert("<<", TokenKind::LessLess);
        map.insert(">", TokenKind::Greater);
        map.insert(">>", TokenKind::GreaterGreater);
        map.insert("^", TokenKind::Caret);
        map.insert("|", TokenKind::VBar);
        map.insert("||", TokenKind::VBarVBar);
        map.insert("&", TokenKind::Amper);
        map.insert("&&", TokenKind::AmperAmper);
        map.insert("=", TokenKind::Eq);
        map.insert("+=", TokenKind::PlusEq);
        map.insert("-=", TokenKind::MinusEq);
        map.insert("/=", TokenKind::SlashEq);
        map.insert("*=", TokenKind::StarEq);
        map.insert("**=", TokenKind::StarStarEq);
        map.insert("<=", TokenKind::LessEq);
        map.insert("<<=", TokenKind::LessLessEq);
        map.insert(">=", TokenKind::GreaterEq);
        map.insert(">>=", TokenKind::GreaterGreaterEq);
        map.insert("^=", TokenKind::CaretEq);
        map.insert("|=", TokenKind::VBarEq);
        map.insert("&=", TokenKind::AmperEq);
        map.insert("->", TokenKind::RArrow);
        map.insert("...", TokenKind::Ellipsis);
        map
    };
}

/// Looks up an already-scanned identifier in the keyword table.
pub fn match_keyword(text: &str) -> Option<TokenKind> {
    KEYWORD_LOOKUP.get(text).copied()
}

/// Looks up a run of punctuation in the symbol table. Only exact matches
/// count; shortening the run is the scanner's job.
pub fn match_symbol(text: &str) -> Option<TokenKind> {
    SYMBOL_LOOKUP.get(text).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Symbols
    LParen,
    RParen,
    Comma,
    Dot,
    Semicolon,
    Colon,
    Plus,
    Minus,
    Slash,
    Star,
    StarStar,
    Less,
    LessLess,
    Greater,
    GreaterGreater,
    Caret,
    VBar,
    VBarVBar,
    Amper,
    AmperAmper,
    Eq,
    PlusEq,
    MinusEq,
    SlashEq,
    StarEq,
    StarStarEq,
    LessEq,
    LessLessEq,
    GreaterEq,
    GreaterGreaterEq,
    CaretEq,
    VBarEq,
    AmperEq,
    RArrow,   // ->
    Ellipsis, // ...

    // Literals
    Ident,
    Int,
    Float,
    String,

    // Keywords
    Pass,
    Break,
    Continue,
    Return,
    Del,
    Type,
    Assert,
    Def,
    Struct,
    Enum,
    If,
    Elif,
    Else,
    While,
    For,
    True,
    False,

    // Structural
    Newline,
    Indent,
    Dedent,
    Unknown,
    EndMarker,
}

impl TokenKind {
    /// Stable uppercase name used in rendered token streams.
    pub fn render_kind(self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::StarStar => "STAR_STAR",
            TokenKind::Less => "LESS",
            TokenKind::LessLess => "LESS_LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterGreater => "GREATER_GREATER",
            TokenKind::Caret => "CARET",
            TokenKind::VBar => "VBAR",
            TokenKind::VBarVBar => "VBAR_VBAR",
            TokenKind::Amper => "AMPER",
            TokenKind::AmperAmper => "AMPER_AMPER",
            TokenKind::Eq => "EQ",
            TokenKind::PlusEq => "PLUS_EQ",
            TokenKind::MinusEq => "MINUS_EQ",
            TokenKind::SlashEq => "SLASH_EQ",
            TokenKind::StarEq => "STAR_EQ",
            TokenKind::StarStarEq => "STAR_STAR_EQ",
            TokenKind::LessEq => "LESS_EQ",
            TokenKind::LessLessEq => "LESS_LESS_EQ",
            TokenKind::GreaterEq => "GREATER_EQ",
            TokenKind::GreaterGreaterEq => "GREATER_GREATER_EQ",
            TokenKind::CaretEq => "CARET_EQ",
            TokenKind::VBarEq => "VBAR_EQ",
            TokenKind::AmperEq => "AMPER_EQ",
            TokenKind::RArrow => "RARROW",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Pass => "PASS",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Return => "RETURN",
            TokenKind::Del => "DEL",
            TokenKind::Type => "TYPE",
            TokenKind::Assert => "ASSERT",
            TokenKind::Def => "DEF",
            TokenKind::Struct => "STRUCT",
            TokenKind::Enum => "ENUM",
            TokenKind::If => "IF",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndMarker => "ENDMARKER",
        }
    }

    /// Kinds whose lexeme is not implied by the kind and so travel with
    /// their text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Unknown
        )
    }

    /// Zero-width markers synthesized from layout rather than scanned.
    pub fn is_synthetic(self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent | TokenKind::EndMarker)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_kind())
    }
}

/// One classified lexeme. Lines and columns are 0-based; the column range
/// is half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: Option<String>,
        line: usize,
        start_col: usize,
        end_col: usize,
    ) -> Self {
        debug_assert_eq!(kind.carries_text(), text.is_some(), "text mismatch for {kind}");
        Token {
            kind,
            text,
            line,
            start_col,
            end_col,
        }
    }

    /// `(KIND [text] LINE l COL s TO e)` with 1-based positions.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.kind)?;
        if let Some(text) = &self.text {
            write!(f, " {}", text)?;
        }
        write!(
            f,
            " LINE {} COL {} TO {})",
            self.line + 1,
            self.start_col + 1,
            self.end_col + 1
        )
    }
}

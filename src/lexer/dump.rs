use std::io::{self, Write};

use super::tokens::{Token, TokenKind};

/// Renders tokens space-separated, breaking the line after every NEWLINE.
pub fn dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.render());
        out.push(' ');
        if token.kind == TokenKind::Newline {
            out.push('\n');
        }
    }
    out
}

pub fn write_dump<W: Write>(tokens: &[Token], mut writer: W) -> io::Result<()> {
    for token in tokens {
        write!(writer, "{} ", token)?;
        if token.kind == TokenKind::Newline {
            writeln!(writer)?;
        }
    }
    writer.flush()
}

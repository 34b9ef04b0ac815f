//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's text, `None` when the kind implies it
/// * `$line` - 0-based source line
/// * `$start` - 0-based start column
/// * `$end` - 0-based end column (exclusive)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, Some("42".to_string()), 0, 4, 6);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $start:expr, $end:expr) => {
        Token::new($kind, $text, $line, $start, $end)
    };
}

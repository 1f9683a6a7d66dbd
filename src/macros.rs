//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's string value
/// * `$line` - 1-based line of the first character
/// * `$col` - 1-based column of the first character
/// * `$width` - Source width in characters, defaults to the literal's
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 1, 5);
/// let string = MK_TOKEN!(TokenKind::String, "a\tb".to_string(), 1, 9, 6);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $col:expr) => {
        Token::new($kind, $literal, $line, $col)
    };
    ($kind:expr, $literal:expr, $line:expr, $col:expr, $width:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            col: $col,
            width: $width,
        }
    };
}

/// Creates a default lexer handler for tokens with a single fixed spelling.
///
/// The generated handler emits a token at the lexer's current line and
/// column and advances past the spelling.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _len: usize| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.line(),
                lexer.col()
            ));
            lexer.advance_n($value.len());
        }
    };
}

use logos::Logos;

pub type Lexer<'a> = logos::Lexer<'a, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s)
}

/// `+` and `-` only ever separate terms; everything between them is one
/// opaque run of text that the classifier inspects later.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[^+\-]+")]
    Text,

    #[error]
    Error,
}

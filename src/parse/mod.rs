pub mod ast;
mod classify;
mod lexer;
mod parser;

pub use ast::{Segment, TermSpec};
pub use classify::classify;
pub use parser::Parser;

/// Splits `s` into its signed, non-empty terms.
pub fn segment(s: &str) -> Vec<Segment<'_>> {
    Parser::new(s).parse()
}

use super::ast::Segment;
use super::lexer::{lexer, Lexer, TokenKind};
use crate::common::Sign;

/// Splits an expression into signed segments in a single left-to-right pass.
///
/// The sign in effect for a segment is the last operator seen before it, so
/// `"2 - + 3"` yields `+3` and a leading operator applies to the first term.
/// Segments that are empty after trimming are skipped without error.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s.trim()) }
    }

    pub fn parse(self) -> Vec<Segment<'a>> {
        self.collect()
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut sign = Sign::Positive;
        loop {
            match self.lexer.next()? {
                TokenKind::Plus => sign = Sign::Positive,
                TokenKind::Minus => sign = Sign::Negative,
                // `Text` matches every other char, so `Error` is never produced
                TokenKind::Text | TokenKind::Error => {
                    let text = self.lexer.slice().trim();
                    if !text.is_empty() {
                        tracing::trace!(%sign, text, "segment");
                        return Some(Segment::new(sign, text));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Sign::*;

    fn check(s: &str, expected: &[(Sign, &str)]) {
        let actual: Vec<_> = Parser::new(s)
            .parse()
            .into_iter()
            .map(|seg| (seg.sign, seg.text))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_segment_single() {
        check("2d6", &[(Positive, "2d6")]);
        check("  d20  ", &[(Positive, "d20")]);
    }

    #[test]
    fn test_segment_signs() {
        check(
            "2d6 + d4 - 3 + 5",
            &[(Positive, "2d6"), (Positive, "d4"), (Negative, "3"), (Positive, "5")],
        );
        check("4d6 - 2 + d4", &[(Positive, "4d6"), (Negative, "2"), (Positive, "d4")]);
    }

    #[test]
    fn test_segment_leading_operator() {
        check("-d4 + 1", &[(Negative, "d4"), (Positive, "1")]);
        check("+3", &[(Positive, "3")]);
    }

    #[test]
    fn test_segment_doubled_operators() {
        check("2 - - 3", &[(Positive, "2"), (Negative, "3")]);
        check("2 - + 3", &[(Positive, "2"), (Positive, "3")]);
        check("2 +", &[(Positive, "2")]);
    }

    #[test]
    fn test_segment_empty() {
        check("", &[]);
        check("   \t ", &[]);
        check("+ - +", &[]);
    }

    #[test]
    fn test_segment_keeps_garbage_whole() {
        check("2d6f * 3", &[(Positive, "2d6f * 3")]);
    }
}

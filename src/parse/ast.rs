use crate::common::*;
use crate::error::TermError;

/// A sign-delimited slice of the input, paired with the operator that
/// immediately precedes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment<'a> {
    pub sign: Sign,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn new(sign: Sign, text: &'a str) -> Self {
        Self { sign, text }
    }
}

/// What a segment turned out to be, before any dice are rolled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TermSpec {
    Dice { count: NonZeroUInt, faces: NonZeroUInt },
    Modifier { value: Int },
    Invalid(TermError),
}

impl TermSpec {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

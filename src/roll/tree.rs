use crate::common::*;
use crate::error::TermError;
use chrono::{DateTime, Utc};
use std::ops::RangeInclusive;

/// How much a term moves the total, after its sign is applied.
#[enum_dispatch::enum_dispatch]
pub trait Contribution {
    fn sign(&self) -> Sign;

    fn signed_sum(&self) -> Int;
}

#[enum_dispatch::enum_dispatch(Contribution)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Term {
    Dice(DiceTerm),
    Modifier(ModifierTerm),
    Invalid(InvalidTerm),
}

impl Term {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DiceTerm {
    count: NonZeroUInt,
    faces: NonZeroUInt,
    zero_based: bool,
    outcomes: NonEmpty<UInt>,
    sign: Sign,
}

impl DiceTerm {
    pub(crate) fn new(
        count: NonZeroUInt,
        faces: NonZeroUInt,
        zero_based: bool,
        outcomes: NonEmpty<UInt>,
        sign: Sign,
    ) -> Self {
        debug_assert_eq!(outcomes.len(), count.get() as usize);
        Self {
            count,
            faces,
            zero_based,
            outcomes,
            sign,
        }
    }

    pub fn count(&self) -> UInt {
        self.count.get()
    }

    pub fn faces(&self) -> UInt {
        self.faces.get()
    }

    pub fn outcomes(&self) -> &[UInt] {
        self.outcomes.as_slice()
    }

    /// The range every outcome was drawn from.
    pub fn range(&self) -> RangeInclusive<UInt> {
        let low = UInt::from(!self.zero_based);
        low..=(self.faces.get() - 1 + low)
    }

    pub fn sum(&self) -> Int {
        self.outcomes.iter().copied().map(Int::from).sum()
    }
}

impl Contribution for DiceTerm {
    fn sign(&self) -> Sign {
        self.sign
    }

    fn signed_sum(&self) -> Int {
        self.sign.apply(self.sum())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModifierTerm {
    value: Int,
    sign: Sign,
}

impl ModifierTerm {
    pub(crate) fn new(value: Int, sign: Sign) -> Self {
        debug_assert!(value >= 0);
        Self { value, sign }
    }

    /// Magnitude of the modifier; never negative.
    pub fn value(&self) -> Int {
        self.value
    }
}

impl Contribution for ModifierTerm {
    fn sign(&self) -> Sign {
        self.sign
    }

    fn signed_sum(&self) -> Int {
        self.sign.apply(self.value)
    }
}

/// A term that could not be rolled. It never counts toward the total.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidTerm {
    raw: String,
    sign: Sign,
    error: TermError,
}

impl InvalidTerm {
    pub(crate) fn new(raw: impl Into<String>, sign: Sign, error: TermError) -> Self {
        Self {
            raw: raw.into(),
            sign,
            error,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn error(&self) -> &TermError {
        &self.error
    }
}

impl Contribution for InvalidTerm {
    fn sign(&self) -> Sign {
        self.sign
    }

    fn signed_sum(&self) -> Int {
        0
    }
}

/// Everything produced by rolling one expression.
///
/// Terms are kept in the order they appeared in the input; the typed
/// accessors filter that sequence without reordering it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollOutcome {
    input: String,
    terms: Vec<Term>,
    created_at: DateTime<Utc>,
}

impl RollOutcome {
    pub(crate) fn new(input: impl Into<String>, terms: Vec<Term>, created_at: DateTime<Utc>) -> Self {
        Self {
            input: input.into(),
            terms,
            created_at,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn dice_terms(&self) -> impl Iterator<Item = &DiceTerm> + '_ {
        self.terms.iter().filter_map(|term| match term {
            Term::Dice(dice) => Some(dice),
            _ => None,
        })
    }

    pub fn modifier_terms(&self) -> impl Iterator<Item = &ModifierTerm> + '_ {
        self.terms.iter().filter_map(|term| match term {
            Term::Modifier(modifier) => Some(modifier),
            _ => None,
        })
    }

    pub fn invalid_terms(&self) -> impl Iterator<Item = &InvalidTerm> + '_ {
        self.terms.iter().filter_map(|term| match term {
            Term::Invalid(invalid) => Some(invalid),
            _ => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.terms.iter().any(Term::is_invalid)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn total(&self) -> Int {
        self.terms
            .iter()
            .map(Contribution::signed_sum)
            .fold(0, Int::saturating_add)
    }
}

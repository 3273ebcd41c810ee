use super::numbering::NumberingPolicy;
use super::roller::{roll_dice, Roller};
use super::tree::*;
use crate::parse::{self, Segment, TermSpec};
use chrono::Utc;
use tracing::debug;

pub type DefaultRoller = rand::rngs::ThreadRng;

pub const DEFAULT_MAX_DICE: usize = 1000;
/// Upper bound on what a saved `max_dice` preference may be set to.
pub const MAX_DICE_CEILING: usize = 100_000;

/// Per-call knobs for evaluating an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollOptions {
    pub numbering: NumberingPolicy,
    /// Largest dice count accepted in a single term.
    pub max_dice: usize,
}

impl RollOptions {
    pub fn zero_based_d10(mut self, yes: bool) -> Self {
        self.numbering.zero_based_d10 = yes;
        self
    }

    pub fn zero_based_d100(mut self, yes: bool) -> Self {
        self.numbering.zero_based_d100 = yes;
        self
    }

    pub fn max_dice(mut self, max_dice: usize) -> Self {
        self.max_dice = max_dice;
        self
    }
}

impl Default for RollOptions {
    fn default() -> Self {
        Self {
            numbering: NumberingPolicy::default(),
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

/// Evaluates expressions with a fixed set of options and one source of
/// randomness. Evaluation never fails; malformed terms become
/// [`InvalidTerm`]s in the outcome.
pub struct RollContext<R = DefaultRoller> {
    options: RollOptions,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(options: RollOptions, roller: R) -> Self {
        Self { options, roller }
    }

    pub fn options(&self) -> &RollOptions {
        &self.options
    }

    pub fn eval(&mut self, input: &str) -> RollOutcome {
        let terms: Vec<Term> = parse::segment(input)
            .into_iter()
            .map(|segment| self.eval_segment(segment))
            .collect();
        let outcome = RollOutcome::new(input, terms, Utc::now());
        debug!(
            input,
            terms = outcome.terms().len(),
            total = outcome.total(),
            "rolled expression"
        );
        outcome
    }

    fn eval_segment(&mut self, segment: Segment<'_>) -> Term {
        let Segment { sign, text } = segment;
        match parse::classify(text, self.options.max_dice) {
            TermSpec::Dice { count, faces } => {
                let numbering = &self.options.numbering;
                let outcomes = roll_dice(&mut self.roller, count, faces, numbering);
                DiceTerm::new(count, faces, numbering.is_zero_based(faces), outcomes, sign).into()
            }
            TermSpec::Modifier { value } => ModifierTerm::new(value, sign).into(),
            TermSpec::Invalid(error) => {
                debug!(term = text, %error, "invalid term");
                InvalidTerm::new(text, sign, error).into()
            }
        }
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(RollOptions::default(), rand::thread_rng())
    }
}

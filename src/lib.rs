//! Parse and roll tabletop dice notation such as `"2d20 + 1"` or `"4d6 - 2 + d4"`.
//!
//! An expression is a run of dice terms (`NdM`, `dM`) and flat numbers joined
//! by `+` and `-`. Rolling never fails: each term that cannot be understood
//! is reported as an [`InvalidTerm`] next to the terms that could.
//!
//! ```
//! let outcome = dice_notation::roll("2d6 + d4 - 3 + 5");
//! assert_eq!(outcome.dice_terms().count(), 2);
//! assert_eq!(outcome.modifier_terms().count(), 2);
//! assert!(!outcome.has_errors());
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod history;
pub mod parse;
pub mod roll;

#[cfg(test)]
mod test_strategies;

pub use common::{Int, Sign, UInt};
pub use config::Settings;
pub use error::{ConfigError, TermError, TermErrorKind};
pub use history::History;
pub use roll::{
    Contribution, CopyFormat, DiceTerm, InvalidTerm, MarkdownStringifier, ModifierTerm,
    NumberingPolicy, RollContext, RollOptions, RollOutcome, Roller, SimpleStringifier,
    Stringify, Term,
};

use rand::{rngs::StdRng, SeedableRng};

/// Rolls `input` with one-based dice and the thread-local generator.
pub fn roll(input: &str) -> RollOutcome {
    RollContext::new(RollOptions::default(), rand::thread_rng()).eval(input)
}

/// Parses and rolls `input`, optionally reading d10s and d100s from zero.
///
/// This is the plain three-argument entry point for callers that hold the
/// two numbering preferences; [`RollContext`] covers everything else.
pub fn roll_with(input: &str, zero_based_d10: bool, zero_based_d100: bool) -> RollOutcome {
    let options = RollOptions::default()
        .zero_based_d10(zero_based_d10)
        .zero_based_d100(zero_based_d100);
    RollContext::new(options, rand::thread_rng()).eval(input)
}

/// Rolls `input` from a fixed seed. The same seed and options always give the
/// same dice.
pub fn roll_seeded(input: &str, options: RollOptions, seed: u64) -> RollOutcome {
    RollContext::new(options, StdRng::seed_from_u64(seed)).eval(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_strategies::*;
    use proptest::prelude::*;

    fn shape(outcome: &RollOutcome) -> Vec<String> {
        outcome
            .terms()
            .iter()
            .map(|term| match term {
                Term::Dice(d) => format!("{}{}d{}", d.sign(), d.count(), d.faces()),
                Term::Modifier(m) => format!("{}{}", m.sign(), m.value()),
                Term::Invalid(i) => format!("{}{}: {}", i.sign(), i.raw(), i.error()),
            })
            .collect()
    }

    #[test]
    fn test_scenarios() {
        let outcome = roll("2d6");
        assert_eq!(shape(&outcome), vec!["+2d6"]);
        assert_eq!(shape(&roll("d20")), vec!["+1d20"]);
        assert_eq!(
            shape(&roll("2d6 + d4 - 3 + 5")),
            vec!["+2d6", "+1d4", "-3", "+5"]
        );
        assert_eq!(shape(&roll("2d6d4")), vec!["+2d6d4: multiple die markers"]);
        assert_eq!(shape(&roll("2d6f")), vec!["+2d6f: invalid character: f"]);
        assert_eq!(shape(&roll("0d6")), vec!["+0d6: invalid number of dice"]);
        assert_eq!(shape(&roll("2d0")), vec!["+2d0: invalid die size"]);
        assert!(shape(&roll("")).is_empty());
    }

    #[test]
    fn test_roll_with_numbering() {
        let outcome = roll_with("100d10", true, false);
        let dice = outcome.dice_terms().next().unwrap();
        assert!(dice.outcomes().iter().all(|x| (0..=9).contains(x)));
    }

    #[test]
    fn test_roll_seeded_is_reproducible() {
        let options = RollOptions::default();
        let a = roll_seeded("3d20 + 2d8 - 1", options, 99);
        let b = roll_seeded("3d20 + 2d8 - 1", options, 99);
        assert_eq!(a.terms(), b.terms());
        assert_eq!(a.total(), b.total());
    }

    proptest! {
        #[test]
        fn outcomes_stay_in_range(
            (expr, _) in expression_strategy(),
            d10 in any::<bool>(),
            d100 in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let options = RollOptions::default().zero_based_d10(d10).zero_based_d100(d100);
            let outcome = roll_seeded(&expr, options, seed);
            for dice in outcome.dice_terms() {
                prop_assert_eq!(dice.outcomes().len(), dice.count() as usize);
                let zero_based = (dice.faces() == 10 && d10) || (dice.faces() == 100 && d100);
                let low = if zero_based { 0 } else { 1 };
                let high = dice.faces() - 1 + low;
                prop_assert!(dice.outcomes().iter().all(|&x| x >= low && x <= high));
            }
        }

        #[test]
        fn total_is_sum_of_valid_terms((expr, _) in expression_strategy(), seed in any::<u64>()) {
            let outcome = roll_seeded(&expr, RollOptions::default(), seed);
            let dice: Int = outcome.dice_terms().map(|d| d.sign().apply(d.sum())).sum();
            let mods: Int = outcome.modifier_terms().map(|m| m.sign().apply(m.value())).sum();
            prop_assert_eq!(outcome.total(), dice + mods);
        }

        #[test]
        fn every_term_is_classified_once((expr, terms) in expression_strategy(), seed in any::<u64>()) {
            let outcome = roll_seeded(&expr, RollOptions::default(), seed);
            prop_assert_eq!(outcome.terms().len(), terms);
            let counted = outcome.dice_terms().count()
                + outcome.modifier_terms().count()
                + outcome.invalid_terms().count();
            prop_assert_eq!(counted, terms);
        }

        #[test]
        fn classification_is_stable((expr, _) in expression_strategy(), a in any::<u64>(), b in any::<u64>()) {
            let first = roll_seeded(&expr, RollOptions::default(), a);
            let second = roll_seeded(&expr, RollOptions::default(), b);
            prop_assert_eq!(shape(&first), shape(&second));
        }

        #[test]
        fn whitespace_only_is_empty(s in "[ \t\r\n]*") {
            let outcome = roll(&s);
            prop_assert!(outcome.is_empty());
            prop_assert_eq!(outcome.total(), 0);
        }
    }
}

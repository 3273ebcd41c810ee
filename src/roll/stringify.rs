use super::tree::*;
use crate::common::*;
use serde::Deserialize;
use std::fmt::Write;

/// Renders an outcome as text, one piece at a time. Implementors override
/// only the pieces they want to look different.
pub trait Stringify {
    fn stringify(&mut self, outcome: &RollOutcome) -> String {
        let total = self.str_total(outcome.total());
        if outcome.is_empty() {
            total
        } else {
            format!("{} = {}", self.str_terms(outcome.terms()), total)
        }
    }

    fn str_terms(&mut self, terms: &[Term]) -> String {
        let mut ret = String::new();
        for (i, term) in terms.iter().enumerate() {
            let sign = term.sign();
            if i > 0 {
                let _ = write!(ret, " {} ", sign);
            } else if sign.is_negative() {
                ret.push('-');
            }
            ret.push_str(&self.str_term(term));
        }
        ret
    }

    fn str_term(&mut self, term: &Term) -> String {
        match term {
            Term::Dice(dice) => self.str_dice(dice),
            Term::Modifier(modifier) => self.str_modifier(modifier),
            Term::Invalid(invalid) => self.str_invalid(invalid),
        }
    }

    fn str_dice(&mut self, dice: &DiceTerm) -> String {
        let rolls = dice
            .outcomes()
            .iter()
            .map(|&x| self.str_die(dice, x))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}d{} ({})", dice.count(), dice.faces(), rolls)
    }

    fn str_die(&mut self, _dice: &DiceTerm, value: UInt) -> String {
        value.to_string()
    }

    fn str_modifier(&mut self, modifier: &ModifierTerm) -> String {
        modifier.value().to_string()
    }

    fn str_invalid(&mut self, invalid: &InvalidTerm) -> String {
        invalid.raw().to_string()
    }

    fn str_total(&mut self, total: Int) -> String {
        total.to_string()
    }
}

#[derive(Debug, Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Bolds dice that landed on either end of their range, strikes through
/// terms that could not be rolled, and puts the total in backticks.
#[derive(Debug, Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_die(&mut self, dice: &DiceTerm, value: UInt) -> String {
        let range = dice.range();
        if dice.faces() > 1 && (value == *range.start() || value == *range.end()) {
            format!("**{}**", value)
        } else {
            value.to_string()
        }
    }

    fn str_invalid(&mut self, invalid: &InvalidTerm) -> String {
        format!("~~{}~~", invalid.raw())
    }

    fn str_total(&mut self, total: Int) -> String {
        format!("`{}`", total)
    }
}

/// What gets produced when a roll is copied out.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    Total,
    #[default]
    Breakdown,
    Markdown,
}

impl CopyFormat {
    pub fn render(self, outcome: &RollOutcome) -> String {
        match self {
            Self::Total => outcome.total().to_string(),
            Self::Breakdown => SimpleStringifier.stringify(outcome),
            Self::Markdown => MarkdownStringifier.stringify(outcome),
        }
    }
}

mod ctx;
mod numbering;
mod roller;
mod stringify;
mod tree;

pub use ctx::{DefaultRoller, RollContext, RollOptions, DEFAULT_MAX_DICE, MAX_DICE_CEILING};
pub use numbering::NumberingPolicy;
pub use roller::Roller;
pub use stringify::{CopyFormat, MarkdownStringifier, SimpleStringifier, Stringify};
pub use tree::{Contribution, DiceTerm, InvalidTerm, ModifierTerm, RollOutcome, Term};

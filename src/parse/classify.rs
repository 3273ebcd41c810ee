use super::ast::TermSpec;
use crate::common::*;
use crate::error::TermError;

/// Decides what a single trimmed term is.
///
/// Disqualifying conditions are checked before any number is read: a term
/// with two die markers is rejected even if both halves look numeric.
pub fn classify(text: &str, max_dice: usize) -> TermSpec {
    match text.chars().filter(|&c| is_die_marker(c)).count() {
        0 => match text.parse::<Int>() {
            Ok(value) if value >= 0 => TermSpec::Modifier { value },
            _ => TermSpec::Invalid(TermError::Unrecognized),
        },
        1 => classify_dice(text, max_dice),
        _ => TermSpec::Invalid(TermError::MultipleDieMarkers),
    }
}

fn classify_dice(text: &str, max_dice: usize) -> TermSpec {
    let bad: Vec<char> = text
        .chars()
        .filter(|&c| !(c.is_ascii_digit() || is_die_marker(c) || c.is_whitespace()))
        .collect();
    if !bad.is_empty() {
        return TermSpec::Invalid(TermError::InvalidCharacters(bad));
    }

    // one marker is guaranteed by the caller
    let (num, faces) = match text.split_once(is_die_marker) {
        Some(parts) => parts,
        None => return TermSpec::Invalid(TermError::Unrecognized),
    };
    let (num, faces) = (num.trim(), faces.trim());

    let count = if num.is_empty() { 1 } else { num.parse().unwrap_or(0) };
    let faces = faces.parse().unwrap_or(0);

    let count = match NonZeroUInt::new(count) {
        Some(count) => count,
        None => return TermSpec::Invalid(TermError::InvalidDiceCount),
    };
    let faces = match NonZeroUInt::new(faces) {
        Some(faces) => faces,
        None => return TermSpec::Invalid(TermError::InvalidDieSize),
    };
    if count.get() as usize > max_dice {
        return TermSpec::Invalid(TermError::TooManyDice { limit: max_dice });
    }

    TermSpec::Dice { count, faces }
}

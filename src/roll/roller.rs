use super::numbering::NumberingPolicy;
use crate::common::{NonEmpty, NonZeroUInt, UInt};
use rand::Rng;

/// A source of die faces. Every outcome is in `1..=faces`.
pub trait Roller {
    fn roll(&mut self, faces: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, faces: NonZeroUInt) -> UInt {
        self.gen_range(1..=faces.get())
    }
}

/// Rolls `count` independent dice, shifted down by one when the numbering
/// policy makes this face count zero-based.
pub(crate) fn roll_dice<R: Roller + ?Sized>(
    roller: &mut R,
    count: NonZeroUInt,
    faces: NonZeroUInt,
    numbering: &NumberingPolicy,
) -> NonEmpty<UInt> {
    let offset = numbering.offset(faces);
    let mut outcomes = NonEmpty::with_capacity(roller.roll(faces) - offset, count.get() as usize);
    for _ in 1..count.get() {
        outcomes.push(roller.roll(faces) - offset);
    }
    outcomes
}

#[cfg(test)]
pub(crate) use step::StepRoller;

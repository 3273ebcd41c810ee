use crate::common::{NonZeroUInt, UInt};
use std::ops::RangeInclusive;

/// Which dice are numbered from zero. Only ten- and hundred-sided dice can be.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct NumberingPolicy {
    pub zero_based_d10: bool,
    pub zero_based_d100: bool,
}

impl NumberingPolicy {
    pub const fn new(zero_based_d10: bool, zero_based_d100: bool) -> Self {
        Self {
            zero_based_d10,
            zero_based_d100,
        }
    }

    pub const fn is_zero_based(&self, faces: NonZeroUInt) -> bool {
        match faces.get() {
            10 => self.zero_based_d10,
            100 => self.zero_based_d100,
            _ => false,
        }
    }

    pub fn range(&self, faces: NonZeroUInt) -> RangeInclusive<UInt> {
        let low = self.offset(faces);
        (1 - low)..=(faces.get() - low)
    }

    pub(crate) const fn offset(&self, faces: NonZeroUInt) -> UInt {
        self.is_zero_based(faces) as UInt
    }
}

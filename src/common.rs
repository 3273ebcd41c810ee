use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The letter separating the dice count from the face count, in either case.
pub(crate) const fn is_die_marker(c: char) -> bool {
    matches!(c, 'd' | 'D')
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub const fn from_operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Positive),
            '-' => Some(Self::Negative),
            _ => None,
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    pub const fn apply(self, x: Int) -> Int {
        match self {
            Self::Positive => x,
            Self::Negative => -x,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Positive => '+',
            Self::Negative => '-',
        };
        f.write_char(c)
    }
}

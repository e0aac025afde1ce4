//! Fixed-width bit patterns for light states and button toggles.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};

/// Maximum number of lights a single machine may declare.
pub const MAX_LIGHTS: usize = 64;

/// A set of light positions packed into a `u64`.
///
/// Bit `i` corresponds to light `i` of the machine diagram. Values are
/// immutable; combining two masks always produces a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitmask(u64);

impl Bitmask {
    /// The all-off state.
    pub const ZERO: Bitmask = Bitmask(0);

    /// Wrap raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Build a mask with exactly the given positions set.
    ///
    /// Returns `None` if any index does not fit in [`MAX_LIGHTS`].
    pub fn from_indices<I>(indices: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .try_fold(Self::ZERO, |acc, idx| acc.with_bit(idx))
    }

    /// Raw bits.
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether light `idx` is set. Out-of-range indices read as unset.
    pub fn contains(self, idx: usize) -> bool {
        idx < MAX_LIGHTS && (self.0 >> idx) & 1 == 1
    }

    /// Copy of this mask with light `idx` set, or `None` if `idx` is out of range.
    pub fn with_bit(self, idx: usize) -> Option<Self> {
        (idx < MAX_LIGHTS).then(|| Self(self.0 | (1u64 << idx)))
    }

    /// Indices of all set lights, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..MAX_LIGHTS).filter(move |&idx| self.contains(idx))
    }
}

impl BitXor for Bitmask {
    type Output = Bitmask;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitmask(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitmask {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitmask {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

//! Problem instances: a target light pattern plus the buttons that toggle it.

use crate::bitmask::Bitmask;

/// A button flips every light in its mask when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Button(Bitmask);

impl Button {
    pub const fn new(mask: Bitmask) -> Self {
        Self(mask)
    }

    /// Button wired to the given light indices.
    pub fn from_indices<I>(indices: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        Bitmask::from_indices(indices).map(Self)
    }

    pub const fn mask(self) -> Bitmask {
        self.0
    }
}

impl From<Bitmask> for Button {
    fn from(mask: Bitmask) -> Self {
        Self(mask)
    }
}

impl From<u64> for Button {
    fn from(bits: u64) -> Self {
        Self(Bitmask::from_bits(bits))
    }
}

/// One self-contained instance: reach `target` from all-off using `buttons`.
///
/// Button order has no effect on the answer; it only decides which half
/// each button lands in when the search is split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    target: Bitmask,
    buttons: Vec<Button>,
}

impl Machine {
    pub fn new(target: Bitmask, buttons: Vec<Button>) -> Self {
        Self { target, buttons }
    }

    /// Convenience constructor from raw bit patterns.
    pub fn from_bits(target: u64, buttons: &[u64]) -> Self {
        Self {
            target: Bitmask::from_bits(target),
            buttons: buttons.iter().copied().map(Button::from).collect(),
        }
    }

    pub fn target(&self) -> Bitmask {
        self.target
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Default split point: the left half gets `floor(n / 2)` buttons.
    pub fn midpoint(&self) -> usize {
        self.buttons.len() / 2
    }

    /// Light state after pressing the buttons at `indices` once each.
    pub fn press(&self, indices: &[usize]) -> Option<Bitmask> {
        indices.iter().try_fold(Bitmask::ZERO, |acc, &idx| {
            self.buttons.get(idx).map(|button| acc ^ button.mask())
        })
    }
}

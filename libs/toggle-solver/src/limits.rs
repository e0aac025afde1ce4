//! Capacity limits for subset enumeration.

/// Hard ceiling on buttons per half: both halves' chosen-button sets must
/// fit together in one `u64`.
pub const MAX_HALF_BUTTONS: usize = 32;

/// Resource limits for a single solve.
///
/// Each half costs `O(2^k)` time and memory for `k` buttons, so the limit
/// is expressed per half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of buttons enumerated in one half.
    pub max_half_buttons: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_half_buttons: 22,
        }
    }
}

impl Limits {
    /// Create limits with a custom half size, clamped to [`MAX_HALF_BUTTONS`].
    pub fn new(max_half_buttons: usize) -> Self {
        Self {
            max_half_buttons: max_half_buttons.min(MAX_HALF_BUTTONS),
        }
    }

    /// Generous limits for offline runs on large machines.
    pub fn permissive() -> Self {
        Self {
            max_half_buttons: 25,
        }
    }

    /// Tight limits for constrained environments.
    pub fn strict() -> Self {
        Self {
            max_half_buttons: 16,
        }
    }

    /// Whether a half of `buttons` buttons may be enumerated.
    pub fn allows(&self, buttons: usize) -> bool {
        buttons <= self.max_half_buttons.min(MAX_HALF_BUTTONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        assert!(Limits::strict().max_half_buttons < Limits::default().max_half_buttons);
        assert!(Limits::default().max_half_buttons < Limits::permissive().max_half_buttons);
    }

    #[test]
    fn test_new_clamps_to_ceiling() {
        assert_eq!(Limits::new(100).max_half_buttons, MAX_HALF_BUTTONS);
        assert_eq!(Limits::new(10).max_half_buttons, 10);
    }

    #[test]
    fn test_allows() {
        let limits = Limits::new(4);
        assert!(limits.allows(0));
        assert!(limits.allows(4));
        assert!(!limits.allows(5));

        // Fields are public; the ceiling still applies.
        let raw = Limits { max_half_buttons: 64 };
        assert!(!raw.allows(33));
    }
}

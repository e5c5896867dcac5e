//! Character classes as compact bitsets.
//!
//! A [`Grouping`] covers a contiguous code range `[min, max]` of at most 256
//! scalar values, which is enough for any Latin-1 letter class a Snowball
//! ruleset needs. Tables are built in `const` context so every language keeps
//! its classes in `static` data.

/// Bitset membership over a contiguous character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    min: u32,
    max: u32,
    bits: [u8; 32],
}

impl Grouping {
    /// Build a grouping from its members.
    ///
    /// Panics at compile time when `chars` is empty or spans more than 256
    /// code points.
    pub const fn from_chars(chars: &[char]) -> Self {
        assert!(!chars.is_empty(), "grouping needs at least one member");

        let mut min = u32::MAX;
        let mut max = 0;
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i] as u32;
            if c < min {
                min = c;
            }
            if c > max {
                max = c;
            }
            i += 1;
        }
        assert!(max - min < 256, "grouping range wider than 256 code points");

        let mut bits = [0u8; 32];
        i = 0;
        while i < chars.len() {
            let offset = (chars[i] as u32 - min) as usize;
            bits[offset >> 3] |= 1 << (offset & 7);
            i += 1;
        }

        Self { min, max, bits }
    }

    /// Is `c` a member? Codes outside `[min, max]` never are.
    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        if code < self.min || code > self.max {
            return false;
        }
        let offset = (code - self.min) as usize;
        self.bits[offset >> 3] & (1 << (offset & 7)) != 0
    }
}

//! Longest-match lookup over static suffix/prefix tables.
//!
//! An [`Among`] table is an ordered list of literal patterns, each tagged with
//! the action the calling rule runs when that pattern wins. Matching picks the
//! longest literal present at the cursor; among equal lengths the first entry
//! listed wins. An empty pattern always matches with zero width, which makes it
//! a default branch.
//!
//! Tables are scanned linearly. They are tiny (a dozen entries at most), so a
//! trie or Snowball's prefix back-links buy nothing measurable.

use crate::buffer::WordBuffer;

/// One table entry: a literal and the action it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Among<A> {
    pattern: &'static str,
    len: usize,
    action: A,
}

impl<A: Copy> Among<A> {
    pub const fn new(pattern: &'static str, action: A) -> Self {
        Self {
            pattern,
            len: char_len(pattern),
            action,
        }
    }

    /// Pattern length in characters.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

const fn char_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut n = 0;
    let mut i = 0;
    while i < bytes.len() {
        // count every byte that is not a UTF-8 continuation byte
        if bytes[i] & 0xC0 != 0x80 {
            n += 1;
        }
        i += 1;
    }
    n
}

/// Pick the winning entry: longest first, then table order.
fn longest<'t, A: Copy>(
    table: &'t [Among<A>],
    room: usize,
    matches: impl Fn(&Among<A>) -> bool,
) -> Option<&'t Among<A>> {
    let mut best: Option<&Among<A>> = None;
    for entry in table {
        if entry.len > room || best.is_some_and(|b| b.len >= entry.len) {
            continue;
        }
        if matches(entry) {
            best = Some(entry);
        }
    }
    best
}

impl WordBuffer {
    /// Match `table` forward from the cursor.
    ///
    /// On success the cursor moves past the winning literal and its action is
    /// returned. On failure the cursor does not move.
    pub fn find_among<A: Copy>(&mut self, table: &[Among<A>]) -> Option<A> {
        let cursor = self.cursor();
        let text = &self.chars()[cursor..];
        let entry = longest(table, text.len(), |e| {
            e.pattern.chars().zip(text).all(|(p, &c)| p == c)
        })?;
        let (len, action) = (entry.len, entry.action);
        self.set_cursor(cursor + len);
        Some(action)
    }

    /// Match `table` backward, ending at the cursor.
    ///
    /// On success the cursor moves to the start of the winning literal and its
    /// action is returned. On failure the cursor does not move.
    pub fn find_among_b<A: Copy>(&mut self, table: &[Among<A>]) -> Option<A> {
        let cursor = self.cursor();
        let text = &self.chars()[self.limit_backward()..cursor];
        let entry = longest(table, text.len(), |e| {
            e.pattern.chars().rev().zip(text.iter().rev()).all(|(p, &c)| p == c)
        })?;
        let (len, action) = (entry.len, entry.action);
        self.set_cursor(cursor - len);
        Some(action)
    }
}

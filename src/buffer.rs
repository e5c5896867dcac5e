//! Mutable word buffer shared by every rule of a stemming algorithm.
//!
//! The buffer is a window `[limit_backward, limit)` over a small character
//! vector, a `cursor` inside that window and the `bra`/`ket` span of the most
//! recent match. Forward scans move the cursor toward `limit`; backward scans
//! move it toward `limit_backward`. Every move is bounds-checked: a scan that
//! would leave the window simply fails.
//!
//! Nothing here rolls back on its own. Rules take a [`Mark`] (forward) or a
//! [`BackMark`] (backward) before an attempt and restore it on the failure
//! path.

use crate::grouping::Grouping;
use smallvec::SmallVec;

/// Words longer than this spill to the heap.
const INLINE_CHARS: usize = 32;

/// Absolute cursor position, for forward scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Cursor position measured from `limit`, for backward scans.
///
/// Backward rules delete text behind the cursor's original spot, which moves
/// `limit`; the distance from the end survives those edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackMark(usize);

#[derive(Debug, Clone, Default)]
pub struct WordBuffer {
    buf: SmallVec<[char; INLINE_CHARS]>,
    cursor: usize,
    limit: usize,
    limit_backward: usize,
    bra: usize,
    ket: usize,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new word and reset every position.
    pub fn set_current(&mut self, word: &str) {
        self.buf.clear();
        self.buf.extend(word.chars());
        self.cursor = 0;
        self.limit = self.buf.len();
        self.limit_backward = 0;
        self.bra = 0;
        self.ket = self.limit;
    }

    /// The text up to `limit` as an owned string.
    pub fn current(&self) -> String {
        self.chars().iter().collect()
    }

    /// The text up to `limit`.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.buf[..self.limit]
    }

    /// Does the text up to `limit` spell exactly `word`?
    pub fn eq_str(&self, word: &str) -> bool {
        let mut chars = word.chars();
        self.chars().iter().all(|&c| chars.next() == Some(c)) && chars.next().is_none()
    }

    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline(always)]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline(always)]
    pub fn limit_backward(&self) -> usize {
        self.limit_backward
    }

    #[inline(always)]
    pub fn bra(&self) -> usize {
        self.bra
    }

    #[inline(always)]
    pub fn ket(&self) -> usize {
        self.ket
    }

    /// Move the cursor, clamped into `[limit_backward, limit]`.
    #[inline]
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.clamp(self.limit_backward, self.limit);
    }

    /// Step one character toward `limit`.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step one character toward `limit_backward`.
    #[inline]
    pub fn retreat(&mut self) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Enter backward mode: the text before the cursor becomes read-only and
    /// scanning restarts from the end.
    pub fn begin_backward(&mut self) {
        self.limit_backward = self.cursor;
        self.cursor = self.limit;
    }

    /// Leave backward mode with the cursor back at the start of the window.
    pub fn end_backward(&mut self) {
        self.cursor = self.limit_backward;
    }

    // -------------------------------------------------------------------------
    // Marks
    // -------------------------------------------------------------------------

    #[inline(always)]
    pub fn mark(&self) -> Mark {
        Mark(self.cursor)
    }

    #[inline(always)]
    pub fn reset(&mut self, mark: Mark) {
        self.set_cursor(mark.0);
    }

    #[inline(always)]
    pub fn mark_back(&self) -> BackMark {
        BackMark(self.limit - self.cursor)
    }

    #[inline(always)]
    pub fn reset_back(&mut self, mark: BackMark) {
        self.set_cursor(self.limit.saturating_sub(mark.0));
    }

    /// Open the match span at the cursor.
    #[inline(always)]
    pub fn set_bra(&mut self) {
        self.bra = self.cursor;
    }

    /// Close the match span at the cursor.
    #[inline(always)]
    pub fn set_ket(&mut self) {
        self.ket = self.cursor;
    }

    // -------------------------------------------------------------------------
    // Character tests
    // -------------------------------------------------------------------------

    /// The character under the cursor, if any.
    #[inline]
    pub fn char_at_cursor(&self) -> Option<char> {
        (self.cursor < self.limit).then(|| self.buf[self.cursor])
    }

    /// The character just before the cursor, if any.
    #[inline]
    pub fn char_before(&self) -> Option<char> {
        (self.cursor > self.limit_backward).then(|| self.buf[self.cursor - 1])
    }

    /// Does `lit` start at the cursor? Does not move.
    pub fn looking_at(&self, lit: &str) -> bool {
        let mut pos = self.cursor;
        for c in lit.chars() {
            if pos >= self.limit || self.buf[pos] != c {
                return false;
            }
            pos += 1;
        }
        true
    }

    /// Does `lit` end at the cursor? Does not move.
    pub fn looking_back_at(&self, lit: &str) -> bool {
        let mut pos = self.cursor;
        for c in lit.chars().rev() {
            if pos <= self.limit_backward || self.buf[pos - 1] != c {
                return false;
            }
            pos -= 1;
        }
        true
    }

    /// Consume `lit` forward if it starts at the cursor.
    pub fn match_literal(&mut self, lit: &str) -> bool {
        if !self.looking_at(lit) {
            return false;
        }
        self.cursor += lit.chars().count();
        true
    }

    /// Consume `lit` backward if it ends at the cursor.
    pub fn match_literal_back(&mut self, lit: &str) -> bool {
        if !self.looking_back_at(lit) {
            return false;
        }
        self.cursor -= lit.chars().count();
        true
    }

    #[inline]
    pub fn in_grouping(&mut self, g: &Grouping) -> bool {
        match self.char_at_cursor() {
            Some(c) if g.contains(c) => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn out_grouping(&mut self, g: &Grouping) -> bool {
        match self.char_at_cursor() {
            Some(c) if !g.contains(c) => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn out_grouping_b(&mut self, g: &Grouping) -> bool {
        match self.char_before() {
            Some(c) if !g.contains(c) => {
                self.cursor -= 1;
                true
            }
            _ => false,
        }
    }

    /// Scan forward until a member of `g` has been consumed.
    pub fn go_past_grouping(&mut self, g: &Grouping) -> bool {
        loop {
            if self.in_grouping(g) {
                return true;
            }
            if !self.advance() {
                return false;
            }
        }
    }

    /// Scan forward until a non-member of `g` has been consumed.
    pub fn go_past_non_grouping(&mut self, g: &Grouping) -> bool {
        loop {
            if self.out_grouping(g) {
                return true;
            }
            if !self.advance() {
                return false;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Replace `[bra, ket)` with `lit`.
    ///
    /// `limit` moves by the length delta. A cursor at or after `ket` moves by
    /// the same delta; a cursor strictly inside the span snaps to `bra`.
    /// Afterwards `ket` is `bra + lit.len()`.
    pub fn slice_from(&mut self, lit: &str) {
        let bra = self.bra.clamp(self.limit_backward, self.limit);
        let ket = self.ket.clamp(bra, self.limit);

        let new_len = lit.chars().count();
        let old_len = ket - bra;

        self.buf.drain(bra..ket);
        self.buf.insert_many(bra, lit.chars());

        self.limit = self.limit + new_len - old_len;
        if self.cursor >= ket {
            self.cursor = self.cursor + new_len - old_len;
        } else if self.cursor > bra {
            self.cursor = bra;
        }
        self.bra = bra;
        self.ket = bra + new_len;
    }

    /// Delete `[bra, ket)`.
    #[inline]
    pub fn slice_del(&mut self) {
        self.slice_from("");
    }
}

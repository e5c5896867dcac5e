//! Text stages run by a [`Pipeline`](crate::pipeline::Pipeline).
//!
//! A stage gets the whole text as a `Cow<str>` and hands back either the same
//! borrow (nothing changed) or a new owned string. `needs_apply` is the cheap
//! pre-check: the pipeline skips `apply` entirely when it returns `false`, so
//! an accurate answer keeps clean input zero-copy through every stage.
//!
//! A stage whose only accurate pre-check is doing the work (stemming every
//! token) reports `needs_apply_is_cheap() == false`; the pipeline then goes
//! straight to `apply`, which already borrows when nothing changes.

pub mod lower_case;
pub mod stem;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("stage `{0}` does not support language `{1}`")]
    UnsupportedLang(&'static str, &'static str),
}

/// A single text transformation.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must return `text` untouched when
    /// there is nothing to do.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Whether `needs_apply` costs much less than `apply`. When `false`, the
    /// pipeline skips the pre-check and calls `apply` directly.
    #[inline]
    fn needs_apply_is_cheap(&self) -> bool {
        true
    }
}

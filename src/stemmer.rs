//! Stemming algorithms.
//!
//! Every algorithm is a small program over a [`WordBuffer`](crate::buffer::WordBuffer):
//! static [`Among`](crate::among::Among) tables and
//! [`Grouping`](crate::grouping::Grouping)s describe the language, plain Rust
//! functions describe the rule order. The set of algorithms is closed, so
//! dispatch goes through the [`Algorithm`] enum rather than trait objects.

pub mod dutch;

use std::borrow::Cow;

pub use dutch::DutchStemmer;

/// A reusable stemmer instance.
///
/// Instances carry per-call scratch state and are meant for one caller at a
/// time; give every thread its own. Each call to [`Stemmer::stem`] starts from
/// a clean state.
pub trait Stemmer {
    /// Algorithm name, used in logs.
    fn name(&self) -> &'static str;

    /// Stem a single token. Returns the input unchanged (borrowed) when no
    /// rule fires.
    fn stem<'a>(&mut self, word: &'a str) -> Cow<'a, str>;
}

/// The algorithms this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Snowball Dutch (Porter variant).
    Dutch,
}

impl Algorithm {
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dutch => "dutch",
        }
    }

    /// A fresh instance of this algorithm.
    pub fn stemmer(self) -> AlgorithmStemmer {
        match self {
            Algorithm::Dutch => AlgorithmStemmer::Dutch(DutchStemmer::new()),
        }
    }
}

/// A stemmer for any [`Algorithm`].
#[derive(Debug, Clone)]
pub enum AlgorithmStemmer {
    Dutch(DutchStemmer),
}

impl Stemmer for AlgorithmStemmer {
    fn name(&self) -> &'static str {
        match self {
            AlgorithmStemmer::Dutch(s) => s.name(),
        }
    }

    #[inline]
    fn stem<'a>(&mut self, word: &'a str) -> Cow<'a, str> {
        match self {
            AlgorithmStemmer::Dutch(s) => s.stem(word),
        }
    }
}

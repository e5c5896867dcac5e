pub mod data;

use crate::{NLD, stemmer::Algorithm};
use data::LANG_TABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Parse an ISO 639-3 code, ignoring case.
    pub fn from_code(code: &str) -> Option<Lang> {
        data::from_code(code)
    }
}

pub const DEFAULT_LANG: Lang = NLD;

/// Per-language settings looked up from [`LANG_TABLE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LangEntry {
    /// Stemming algorithm for this language, if the crate ships one.
    pub algorithm: Option<Algorithm>,
}

impl LangEntry {
    #[inline]
    pub fn has_stemmer(&self) -> bool {
        self.algorithm.is_some()
    }
}

#[inline]
pub fn get_lang_entry_by_code(code: &str) -> Option<LangEntry> {
    LANG_TABLE.get(code).copied()
}

/// Every language in the table, in declaration order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    data::ALL_LANGS
}

// src/context.rs
// Language configuration for hot paths. Copy, 'static data only.

use crate::lang::{DEFAULT_LANG, Lang, LangEntry, get_lang_entry_by_code};
use log::debug;

/// Runtime context passed to every stage.
///
/// - `lang`: identifier, for logs and errors
/// - `lang_entry`: the settings stages actually read
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Context with the table entry for `lang`.
    ///
    /// A language missing from the table gets an empty entry, so stages that
    /// need an algorithm report it as unsupported.
    #[inline]
    pub fn new(lang: Lang) -> Self {
        Self::with_modified(lang, |_| {})
    }

    /// Like [`Context::new`], but lets the caller adjust the entry first.
    /// Backs [`StemmyBuilder::modify_lang`](crate::stemmy::StemmyBuilder::modify_lang).
    #[inline]
    pub fn with_modified(lang: Lang, f: impl FnOnce(&mut LangEntry)) -> Self {
        let mut lang_entry = get_lang_entry_by_code(lang.code()).unwrap_or_else(|| {
            debug!("context: {} not in language table, using empty entry", lang.code());
            LangEntry::default()
        });
        f(&mut lang_entry);
        Self { lang, lang_entry }
    }
}

use thiserror::Error;

use crate::{
    context::Context,
    lang::{DEFAULT_LANG, Lang, LangEntry, get_lang_entry_by_code},
    pipeline::Pipeline,
    stage::{Stage, StageError},
    stemmer::{AlgorithmStemmer, Stemmer},
};
use log::debug;
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StemmyError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("unknown language code `{0}`")]
    UnknownLang(&'static str),
    #[error("no stemming algorithm for language `{0}`")]
    NoStemmer(&'static str),
}

/// A configured language plus a stage pipeline.
///
/// ```
/// use stemmy::{LowerCase, NLD, Stem, Stemmy};
///
/// let stemmy = Stemmy::builder()
///     .lang(NLD)
///     .add_stage(LowerCase)
///     .add_stage(Stem)
///     .build()?;
///
/// assert_eq!(stemmy.normalize("Mooie KATTEN")?, "mooi kat");
/// assert_eq!(stemmy.stem("lichamelijk")?, "licham");
/// # Ok::<(), stemmy::StemmyError>(())
/// ```
pub struct Stemmy {
    ctx: Context,
    pipeline: Pipeline,
}

impl Stemmy {
    pub fn builder() -> StemmyBuilder {
        StemmyBuilder::default()
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, StemmyError> {
        let results = self.pipeline.process(text.into(), &self.ctx)?;
        Ok(results)
    }

    /// Stem one token with the configured language's algorithm, bypassing
    /// the pipeline.
    pub fn stem<'a>(&self, word: &'a str) -> Result<Cow<'a, str>, StemmyError> {
        Ok(self.stemmer()?.stem(word))
    }

    /// A fresh stemmer instance for repeated single-word calls.
    pub fn stemmer(&self) -> Result<AlgorithmStemmer, StemmyError> {
        self.ctx
            .lang_entry
            .algorithm
            .map(|a| a.stemmer())
            .ok_or(StemmyError::NoStemmer(self.ctx.lang.code()))
    }
}

pub struct StemmyBuilder {
    lang: Lang,
    modify: Option<Box<dyn FnOnce(&mut LangEntry)>>,
    stages: Vec<Arc<dyn Stage>>,
}

impl Default for StemmyBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            modify: None,
            stages: Default::default(),
        }
    }
}

impl StemmyBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Adjust the language's table entry for this instance only.
    pub fn modify_lang(mut self, f: impl FnOnce(&mut LangEntry) + 'static) -> Self {
        self.modify = Some(Box::new(f));
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Result<Stemmy, StemmyError> {
        if get_lang_entry_by_code(self.lang.code()).is_none() {
            return Err(StemmyError::UnknownLang(self.lang.code()));
        }
        let ctx = match self.modify {
            Some(f) => Context::with_modified(self.lang, f),
            None => Context::new(self.lang),
        };
        let pipeline = Pipeline::new(self.stages);
        debug!(
            "stemmy: built {} pipeline [{}] (algorithm: {:?})",
            ctx.lang.name(),
            pipeline.stage_names().collect::<Vec<_>>().join(", "),
            ctx.lang_entry.algorithm.map(|a| a.name())
        );
        Ok(Stemmy { ctx, pipeline })
    }
}

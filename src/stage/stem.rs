use crate::{
    context::Context,
    stage::{Stage, StageError},
    stemmer::{Algorithm, Stemmer},
};
use std::borrow::Cow;

/// Stems every whitespace-delimited token with the context language's
/// algorithm. Separators are kept byte for byte.
///
/// Input is expected to be tokenized and lower-cased already; anything between
/// two whitespace runs is handed to the stemmer as one word.
pub struct Stem;

impl Stem {
    #[inline]
    fn algorithm(&self, ctx: &Context) -> Result<Algorithm, StageError> {
        ctx.lang_entry
            .algorithm
            .ok_or(StageError::UnsupportedLang(self.name(), ctx.lang.code()))
    }
}

impl Stage for Stem {
    fn name(&self) -> &'static str {
        "stem"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        let mut stemmer = self.algorithm(ctx)?.stemmer();
        Ok(Tokens::new(text).any(|(_, token)| matches!(stemmer.stem(token), Cow::Owned(_))))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut stemmer = self.algorithm(ctx)?.stemmer();
        Ok(match stem_tokens(&text, &mut stemmer) {
            Some(stemmed) => Cow::Owned(stemmed),
            None => text,
        })
    }

    /// Answering `needs_apply` means stemming tokens until one changes.
    #[inline]
    fn needs_apply_is_cheap(&self) -> bool {
        false
    }
}

/// Stem each token of `text`; `None` when no token changed.
fn stem_tokens(text: &str, stemmer: &mut impl Stemmer) -> Option<String> {
    let mut out: Option<String> = None;
    let mut copied = 0;
    for (start, token) in Tokens::new(text) {
        if let Cow::Owned(stemmed) = stemmer.stem(token) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
            buf.push_str(&text[copied..start]);
            buf.push_str(&stemmed);
            copied = start + token.len();
        }
    }
    out.map(|mut buf| {
        buf.push_str(&text[copied..]);
        buf
    })
}

/// Non-empty whitespace-separated tokens with their byte offsets.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, &self.text[start..self.pos]))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{Lang, NLD, assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Stem {
        const IDEMPOTENT: bool = false;

        fn languages() -> &'static [Lang] {
            &[NLD]
        }

        fn samples(_lang: Lang) -> &'static [&'static str] {
            &["katten lopen", " mooie  bomen ", "auto", "", "\tkaas\n"]
        }

        fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
            &["auto", "heerlijk ogen", "kat", "  ", ""]
        }

        fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
            &[
                ("katten", "kat"),
                ("de katten lopen", "de kat lop"),
                ("  maan\tkaas ", "  man\tkas "),
                ("auto katten", "auto kat"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Stem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEU, ENG, NLD, lang::LangEntry};

    #[test]
    fn tokens_report_offsets() {
        let toks: Vec<_> = Tokens::new(" ab  c\td ").collect();
        assert_eq!(toks, vec![(1, "ab"), (5, "c"), (7, "d")]);
        assert_eq!(Tokens::new("   ").count(), 0);
        assert_eq!(Tokens::new("").count(), 0);
    }

    #[test]
    fn unicode_separators_survive() {
        let ctx = Context::new(NLD);
        let out = Stem.apply(Cow::Borrowed("katten\u{3000}bomen"), &ctx).unwrap();
        assert_eq!(out, "kat\u{3000}bom");
    }

    #[test]
    fn unchanged_text_is_borrowed() {
        let ctx = Context::new(NLD);
        let input = "heerlijk auto";
        let out = Stem.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn language_without_algorithm_is_rejected() {
        for lang in [ENG, DEU] {
            let ctx = Context::new(lang);
            let err = Stem.needs_apply("cats", &ctx).unwrap_err();
            assert_eq!(err, StageError::UnsupportedLang("stem", lang.code()));
            assert!(Stem.apply(Cow::Borrowed("cats"), &ctx).is_err());
        }
    }

    #[test]
    fn pipeline_skips_the_precheck() {
        assert!(!Stem.needs_apply_is_cheap());
    }

    #[test]
    fn modified_entry_enables_stemming() {
        let ctx = Context::with_modified(ENG, |e: &mut LangEntry| {
            e.algorithm = Some(Algorithm::Dutch)
        });
        assert_eq!(Stem.apply(Cow::Borrowed("katten"), &ctx).unwrap(), "kat");
    }
}

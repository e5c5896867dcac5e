#[cfg(test)]
mod unit_tests {

    use crate::{
        Algorithm, DEU, DutchStemmer, ENG, FRA, Lang, LowerCase, NLD, Stem, Stemmer, Stemmy,
        StemmyError, stage::StageError,
    };
    use std::borrow::Cow;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn default_language_is_dutch() {
        let stemmy = Stemmy::builder().build().unwrap();
        assert_eq!(stemmy.lang(), NLD);
        assert_eq!(stemmy.stem("katten").unwrap(), "kat");
    }

    #[test]
    fn stem_is_zero_copy_when_unchanged() {
        let stemmy = Stemmy::builder().lang(NLD).build().unwrap();
        let input = "auto";
        let result = stemmy.stem(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn stem_without_algorithm() {
        for lang in [ENG, DEU, FRA] {
            let stemmy = Stemmy::builder().lang(lang).build().unwrap();
            assert_eq!(
                stemmy.stem("cats").unwrap_err(),
                StemmyError::NoStemmer(lang.code())
            );
        }
    }

    #[test]
    fn unknown_language_fails_to_build() {
        let bogus = Lang {
            code: "XXX",
            name: "Nowhere",
        };
        assert_eq!(
            Stemmy::builder().lang(bogus).build().err(),
            Some(StemmyError::UnknownLang("XXX"))
        );
    }

    #[test]
    fn modify_lang_attaches_algorithm() {
        let stemmy = Stemmy::builder()
            .lang(ENG)
            .modify_lang(|e| e.algorithm = Some(Algorithm::Dutch))
            .add_stage(Stem)
            .build()
            .unwrap();
        assert_eq!(stemmy.normalize("katten").unwrap(), "kat");
    }

    #[test]
    fn stage_error_converts() {
        let stemmy = Stemmy::builder().lang(FRA).add_stage(Stem).build().unwrap();
        assert_eq!(
            stemmy.normalize("chats").unwrap_err(),
            StemmyError::Stage(StageError::UnsupportedLang("stem", "FRA"))
        );
    }

    #[test]
    fn lower_case_then_stem() {
        let stemmy = Stemmy::builder()
            .lang(NLD)
            .add_stage(LowerCase)
            .add_stage(Stem)
            .build()
            .unwrap();
        assert_eq!(stemmy.normalize("Mooie BOMEN").unwrap(), "mooi bom");
    }

    #[test]
    fn lang_from_code() {
        assert_eq!(Lang::from_code("nld"), Some(NLD));
        assert_eq!(Lang::from_code("NLD").map(|l| l.name()), Some("Dutch"));
        assert_eq!(Lang::from_code("tlh"), None);
    }

    #[test]
    fn reusable_stemmer_from_facade() {
        let stemmy = Stemmy::builder().build().unwrap();
        let mut s = stemmy.stemmer().unwrap();
        assert_eq!(s.name(), "dutch");
        assert_eq!(s.stem("maan"), "man");
        assert_eq!(s.stem("bomen"), "bom");
    }

    #[test]
    fn accent_folding_matches_nfd_base_letter() {
        let mut s = DutchStemmer::new();
        for accented in ['á', 'ä', 'é', 'ë', 'í', 'ï', 'ó', 'ö', 'ú', 'ü'] {
            let base = accented.to_string().nfd().next().unwrap();
            let word = format!("p{accented}p");
            let plain = format!("p{base}p");
            assert_eq!(s.stem(&word), plain, "{word}");
        }
    }

    #[test]
    fn grave_e_is_a_vowel_not_folded() {
        // è is in the vowel class and survives the prelude
        let mut s = DutchStemmer::new();
        assert_eq!(s.stem("pèp"), "pèp");
        assert!(s.regions().is_none());
    }
}

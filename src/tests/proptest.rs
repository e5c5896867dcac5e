#[cfg(test)]
mod prop_tests {
    use crate::{DutchStemmer, LowerCase, NLD, Stem, Stemmer, Stemmy};
    use proptest::prelude::*;
    use std::borrow::Cow;

    proptest! {
        #[test]
        fn never_panics(s in ".{0,64}") {
            let mut stemmer = DutchStemmer::new();
            let _ = stemmer.stem(&s);
        }

        #[test]
        fn never_grows(s in "[a-zèéëïöüIY]{0,40}") {
            let mut stemmer = DutchStemmer::new();
            let out = stemmer.stem(&s);
            prop_assert!(out.chars().count() <= s.chars().count());
        }

        #[test]
        fn regions_are_ordered(s in "[a-z]{0,40}") {
            let mut stemmer = DutchStemmer::new();
            stemmer.stem(&s);
            if let Some(r) = stemmer.regions() {
                prop_assert!(r.r1 >= 3);
                prop_assert!(r.r1 <= r.r2);
                prop_assert!(r.r2 <= s.chars().count());
            }
        }

        #[test]
        fn unchanged_means_borrowed(s in "[a-z]{0,40}") {
            let mut stemmer = DutchStemmer::new();
            match stemmer.stem(&s) {
                Cow::Borrowed(b) => prop_assert_eq!(b.as_ptr(), s.as_ptr()),
                Cow::Owned(o) => prop_assert_ne!(o, s),
            }
        }

        #[test]
        fn reuse_matches_fresh_instance(words in prop::collection::vec("[a-zé]{0,16}", 1..16)) {
            let mut reused = DutchStemmer::new();
            for w in &words {
                let fresh = DutchStemmer::new().stem(w).into_owned();
                prop_assert_eq!(reused.stem(w).into_owned(), fresh);
            }
        }

        #[test]
        fn accents_fold_like_plain_vowels(
            head in "[bdfkmprstvz]{1,3}",
            vowel in "[aou]",
            tail in "[bdfkmprstvz]{1,3}",
        ) {
            let accented = match vowel.as_str() {
                "a" => "á",
                "o" => "ó",
                _ => "ú",
            };
            let mut stemmer = DutchStemmer::new();
            let plain = stemmer.stem(&format!("{head}{vowel}{tail}")).into_owned();
            let folded = stemmer.stem(&format!("{head}{accented}{tail}")).into_owned();
            prop_assert_eq!(folded, plain);
        }

        #[test]
        fn pipeline_preserves_token_count(words in prop::collection::vec("[A-Za-z]{1,12}", 0..12)) {
            let stemmy = Stemmy::builder()
                .lang(NLD)
                .add_stage(LowerCase)
                .add_stage(Stem)
                .build()
                .unwrap();
            let text = words.join(" ");
            let out = stemmy.normalize(text.as_str()).unwrap();
            prop_assert_eq!(out.split(' ').count(), text.split(' ').count());
            prop_assert!(!out.chars().any(char::is_uppercase));
        }
    }
}

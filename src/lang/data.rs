use crate::lang::{Lang, LangEntry};
use crate::stemmer::Algorithm;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates constants, lookup table and parser from one list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        stemmer: $algorithm:expr
    ),* $(,)?) => {
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
            $(
                $code_str => LangEntry { algorithm: $algorithm },
            )*
        };

        pub static ALL_LANGS: &[Lang] = &[$($code),*];

        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions
//    Only Dutch has an algorithm so far; the others resolve but refuse to stem.
// ---------------------------------------------------------------------------
define_languages! {
    NLD, "NLD", "Dutch",
        stemmer: Some(Algorithm::Dutch),

    ENG, "ENG", "English",
        stemmer: None,

    DEU, "DEU", "German",
        stemmer: None,

    FRA, "FRA", "French",
        stemmer: None,
}

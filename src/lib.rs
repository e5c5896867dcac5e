pub mod among;
pub mod buffer;
pub mod context;
pub mod grouping;
pub mod lang;
pub mod pipeline;
pub mod stage;
pub mod stemmer;
pub mod stemmy;

#[doc(hidden)]
pub mod testing {
    pub mod stage_contract;
}

pub use lang::Lang;
pub use lang::all_langs;
pub use lang::data::{DEU, ENG, FRA, NLD};
pub use stage::lower_case::LowerCase;
pub use stage::stem::Stem;
pub use stemmer::{Algorithm, AlgorithmStemmer, DutchStemmer, Stemmer};
pub use stemmy::{Stemmy, StemmyError};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}

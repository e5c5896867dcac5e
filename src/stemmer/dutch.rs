//! Snowball Dutch stemmer.
//!
//! Four phases run in order over one [`WordBuffer`]:
//!
//! 1. **prelude** folds accented vowels to their base letter and marks a
//!    consonantal `i`/`y` as `I`/`Y`, so the vowel classes below never see it;
//! 2. **mark regions** computes R1 and R2 from vowel/non-vowel transitions;
//! 3. **standard suffix** strips noun, `-e`, `-heid` and derivational endings
//!    in a single backward pass, degeminating what the stripping exposes;
//! 4. **postlude** turns the `I`/`Y` markers back into lowercase letters.
//!
//! Rules return `bool`. A rule that fails restores nothing by itself; every
//! step of the backward pass runs between a [`BackMark`](crate::buffer::BackMark)
//! and its reset, so later steps always start at the current end of the word.
//! Text already deleted inside a failing step stays deleted.
//!
//! ```
//! use stemmy::stemmer::dutch;
//!
//! assert_eq!(dutch::stem("katten"), "kat");
//! assert_eq!(dutch::stem("mogelijkheden"), "mogelijk");
//! assert_eq!(dutch::stem("auto"), "auto");
//! ```

use crate::{among::Among, buffer::WordBuffer, grouping::Grouping, stemmer::Stemmer};
use log::trace;
use std::borrow::Cow;

// ============================================================================
// Rule tables
// ============================================================================

/// Vowels.
static V: Grouping = Grouping::from_chars(&['a', 'e', 'i', 'o', 'u', 'y', 'è']);

/// Vowels plus the consonantal-`i` marker.
static V_I: Grouping = Grouping::from_chars(&['I', 'a', 'e', 'i', 'o', 'u', 'y', 'è']);

/// Vowels plus `j`; `-s`/`-se` is kept after either.
static V_J: Grouping = Grouping::from_chars(&['a', 'e', 'i', 'j', 'o', 'u', 'y', 'è']);

/// Forward rewrite used by the prelude and postlude scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rewrite {
    Replace(&'static str),
    Skip,
}

static UNACCENT: [Among<Rewrite>; 11] = [
    Among::new("", Rewrite::Skip),
    Among::new("á", Rewrite::Replace("a")),
    Among::new("ä", Rewrite::Replace("a")),
    Among::new("é", Rewrite::Replace("e")),
    Among::new("ë", Rewrite::Replace("e")),
    Among::new("í", Rewrite::Replace("i")),
    Among::new("ï", Rewrite::Replace("i")),
    Among::new("ó", Rewrite::Replace("o")),
    Among::new("ö", Rewrite::Replace("o")),
    Among::new("ú", Rewrite::Replace("u")),
    Among::new("ü", Rewrite::Replace("u")),
];

static UNMARK: [Among<Rewrite>; 3] = [
    Among::new("", Rewrite::Skip),
    Among::new("I", Rewrite::Replace("i")),
    Among::new("Y", Rewrite::Replace("y")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NounSuffix {
    /// `-heden` → `-heid`
    Heden,
    /// `-en`, `-ene`
    En,
    /// `-s`, `-se`
    S,
}

static NOUN_SUFFIXES: [Among<NounSuffix>; 5] = [
    Among::new("ene", NounSuffix::En),
    Among::new("se", NounSuffix::S),
    Among::new("en", NounSuffix::En),
    Among::new("heden", NounSuffix::Heden),
    Among::new("s", NounSuffix::S),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DerivationalSuffix {
    EndIng,
    Ig,
    Lijk,
    Baar,
    Bar,
}

static DERIVATIONAL_SUFFIXES: [Among<DerivationalSuffix>; 6] = [
    Among::new("end", DerivationalSuffix::EndIng),
    Among::new("ig", DerivationalSuffix::Ig),
    Among::new("ing", DerivationalSuffix::EndIng),
    Among::new("lijk", DerivationalSuffix::Lijk),
    Among::new("baar", DerivationalSuffix::Baar),
    Among::new("bar", DerivationalSuffix::Bar),
];

static DOUBLED_CONSONANTS: [Among<()>; 3] = [
    Among::new("dd", ()),
    Among::new("kk", ()),
    Among::new("tt", ()),
];

static DOUBLED_VOWELS: [Among<()>; 4] = [
    Among::new("aa", ()),
    Among::new("ee", ()),
    Among::new("oo", ()),
    Among::new("uu", ()),
];

/// `-en` stays on stems ending in this.
const EN_EXCLUSION: &str = "gem";
/// `-heid` stays after this.
const HEID_EXCLUSION: &str = "c";
/// `-ig` stays after this.
const IG_EXCLUSION: &str = "e";

/// Floor for R1.
const MIN_R1: usize = 3;

// ============================================================================
// Stemmer
// ============================================================================

/// R1/R2 start offsets, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

#[derive(Debug, Clone)]
pub struct DutchStemmer {
    buf: WordBuffer,
    p1: usize,
    p2: usize,
    regions_marked: bool,
    e_found: bool,
}

impl Default for DutchStemmer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stem one Dutch word with a throwaway instance.
pub fn stem(word: &str) -> String {
    DutchStemmer::new().stem(word).into_owned()
}

impl DutchStemmer {
    pub fn new() -> Self {
        Self {
            buf: WordBuffer::new(),
            p1: 0,
            p2: 0,
            regions_marked: false,
            e_found: false,
        }
    }

    /// Regions computed by the last call to [`Stemmer::stem`], or `None` when
    /// the word ran out before both were found.
    pub fn regions(&self) -> Option<Regions> {
        self.regions_marked.then_some(Regions {
            r1: self.p1,
            r2: self.p2,
        })
    }

    fn reset(&mut self, word: &str) {
        self.buf.set_current(word);
        self.p1 = 0;
        self.p2 = 0;
        self.regions_marked = false;
        self.e_found = false;
    }

    fn run(&mut self) {
        let start = self.buf.mark();
        self.prelude();
        self.buf.reset(start);

        self.regions_marked = self.mark_regions();
        self.buf.reset(start);

        self.buf.begin_backward();
        let end = self.buf.mark_back();
        self.standard_suffix();
        self.buf.reset_back(end);
        self.buf.end_backward();

        let start = self.buf.mark();
        self.postlude();
        self.buf.reset(start);
    }

    // ------------------------------------------------------------------------
    // Prelude / postlude
    // ------------------------------------------------------------------------

    fn prelude(&mut self) {
        let start = self.buf.mark();
        self.rewrite_all(&UNACCENT);
        self.buf.reset(start);

        self.buf.set_bra();
        if self.buf.match_literal("y") {
            self.buf.set_ket();
            self.buf.slice_from("Y");
        } else {
            self.buf.reset(start);
        }

        while self.mark_next_semivowel() {}
    }

    fn postlude(&mut self) {
        self.rewrite_all(&UNMARK);
    }

    /// Apply `table` at every position from the cursor to the end.
    fn rewrite_all(&mut self, table: &[Among<Rewrite>]) {
        loop {
            let pos = self.buf.mark();
            self.buf.set_bra();
            let Some(rewrite) = self.buf.find_among(table) else {
                self.buf.reset(pos);
                return;
            };
            self.buf.set_ket();
            match rewrite {
                Rewrite::Replace(lit) => self.buf.slice_from(lit),
                Rewrite::Skip => {
                    if !self.buf.advance() {
                        self.buf.reset(pos);
                        return;
                    }
                }
            }
        }
    }

    /// Find the next vowel followed by a consonantal `i` or `y` and mark it.
    ///
    /// Leaves the cursor on that vowel. The marked letter is no longer an `i`
    /// or `y`, so the next search moves past it.
    fn mark_next_semivowel(&mut self) -> bool {
        let start = self.buf.mark();
        loop {
            let pos = self.buf.mark();
            let marked = self.mark_semivowel_here();
            self.buf.reset(pos);
            if marked {
                return true;
            }
            if !self.buf.advance() {
                self.buf.reset(start);
                return false;
            }
        }
    }

    fn mark_semivowel_here(&mut self) -> bool {
        if !self.buf.in_grouping(&V) {
            return false;
        }
        self.buf.set_bra();
        let after_vowel = self.buf.mark();
        if self.buf.match_literal("i") {
            self.buf.set_ket();
            if self.buf.in_grouping(&V) {
                self.buf.slice_from("I");
                return true;
            }
        }
        self.buf.reset(after_vowel);
        if self.buf.match_literal("y") {
            self.buf.set_ket();
            self.buf.slice_from("Y");
            return true;
        }
        false
    }

    // ------------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------------

    fn mark_regions(&mut self) -> bool {
        self.p1 = self.buf.limit();
        self.p2 = self.buf.limit();

        if !self.buf.go_past_grouping(&V) || !self.buf.go_past_non_grouping(&V) {
            return false;
        }
        self.p1 = self.buf.cursor().max(MIN_R1);

        if !self.buf.go_past_grouping(&V) || !self.buf.go_past_non_grouping(&V) {
            return false;
        }
        self.p2 = self.buf.cursor();
        true
    }

    #[inline(always)]
    fn r1(&self) -> bool {
        self.p1 <= self.buf.cursor()
    }

    #[inline(always)]
    fn r2(&self) -> bool {
        self.p2 <= self.buf.cursor()
    }

    // ------------------------------------------------------------------------
    // Standard suffix (backward)
    // ------------------------------------------------------------------------

    fn standard_suffix(&mut self) {
        self.attempt(Self::noun_suffix);
        self.attempt(Self::e_ending);
        self.attempt(Self::heid_suffix);
        self.attempt(Self::derivational_suffix);
        self.attempt(Self::undouble_vowel);
    }

    /// Run `rule`, then put the cursor back at the same distance from the end.
    fn attempt(&mut self, rule: fn(&mut Self) -> bool) {
        let mark = self.buf.mark_back();
        rule(self);
        self.buf.reset_back(mark);
    }

    fn noun_suffix(&mut self) -> bool {
        self.buf.set_ket();
        let Some(suffix) = self.buf.find_among_b(&NOUN_SUFFIXES) else {
            return false;
        };
        self.buf.set_bra();
        match suffix {
            NounSuffix::Heden => {
                if !self.r1() {
                    return false;
                }
                self.buf.slice_from("heid");
                true
            }
            NounSuffix::En => self.en_ending(),
            NounSuffix::S => {
                if !self.r1() || !self.preceded_by_non(&V_J) {
                    return false;
                }
                self.buf.slice_del();
                true
            }
        }
    }

    fn heid_suffix(&mut self) -> bool {
        self.buf.set_ket();
        if !self.buf.match_literal_back("heid") {
            return false;
        }
        self.buf.set_bra();
        if !self.r2() || self.buf.looking_back_at(HEID_EXCLUSION) {
            return false;
        }
        self.buf.slice_del();

        self.buf.set_ket();
        if !self.buf.match_literal_back("en") {
            return false;
        }
        self.buf.set_bra();
        self.en_ending()
    }

    fn derivational_suffix(&mut self) -> bool {
        self.buf.set_ket();
        let Some(suffix) = self.buf.find_among_b(&DERIVATIONAL_SUFFIXES) else {
            return false;
        };
        self.buf.set_bra();
        if !self.r2() {
            return false;
        }
        match suffix {
            DerivationalSuffix::EndIng => {
                self.buf.slice_del();
                let mark = self.buf.mark_back();
                if self.strip_ig() {
                    return true;
                }
                self.buf.reset_back(mark);
                self.undouble()
            }
            DerivationalSuffix::Ig => {
                if self.buf.looking_back_at(IG_EXCLUSION) {
                    return false;
                }
                self.buf.slice_del();
                true
            }
            DerivationalSuffix::Lijk => {
                self.buf.slice_del();
                self.e_ending()
            }
            DerivationalSuffix::Baar => {
                self.buf.slice_del();
                true
            }
            DerivationalSuffix::Bar => {
                if !self.e_found {
                    return false;
                }
                self.buf.slice_del();
                true
            }
        }
    }

    /// `-ig` left in front of `-end`/`-ing`.
    fn strip_ig(&mut self) -> bool {
        self.buf.set_ket();
        if !self.buf.match_literal_back("ig") {
            return false;
        }
        self.buf.set_bra();
        if !self.r2() || self.buf.looking_back_at(IG_EXCLUSION) {
            return false;
        }
        self.buf.slice_del();
        true
    }

    /// `maan` → `man`: a doubled vowel between two consonants loses one letter.
    fn undouble_vowel(&mut self) -> bool {
        if !self.buf.out_grouping_b(&V_I) {
            return false;
        }
        let mark = self.buf.mark_back();
        if self.buf.find_among_b(&DOUBLED_VOWELS).is_none() || !self.buf.out_grouping_b(&V) {
            return false;
        }
        self.buf.reset_back(mark);
        self.buf.set_ket();
        if !self.buf.retreat() {
            return false;
        }
        self.buf.set_bra();
        self.buf.slice_del();
        true
    }

    // ------------------------------------------------------------------------
    // Sub-rules
    // ------------------------------------------------------------------------

    /// Delete the matched `-en`/`-ene` after a consonant other than in `gem-`.
    fn en_ending(&mut self) -> bool {
        if !self.r1() || !self.preceded_by_non(&V) {
            return false;
        }
        if self.buf.looking_back_at(EN_EXCLUSION) {
            return false;
        }
        self.buf.slice_del();
        self.undouble()
    }

    fn e_ending(&mut self) -> bool {
        self.e_found = false;
        self.buf.set_ket();
        if !self.buf.match_literal_back("e") {
            return false;
        }
        self.buf.set_bra();
        if !self.r1() || !self.preceded_by_non(&V) {
            return false;
        }
        self.buf.slice_del();
        self.e_found = true;
        self.undouble()
    }

    /// `-dd`, `-kk`, `-tt` at the cursor lose their last letter.
    fn undouble(&mut self) -> bool {
        let mark = self.buf.mark_back();
        if self.buf.find_among_b(&DOUBLED_CONSONANTS).is_none() {
            return false;
        }
        self.buf.reset_back(mark);
        self.buf.set_ket();
        if !self.buf.retreat() {
            return false;
        }
        self.buf.set_bra();
        self.buf.slice_del();
        true
    }

    #[inline]
    fn preceded_by_non(&self, g: &Grouping) -> bool {
        self.buf.char_before().is_some_and(|c| !g.contains(c))
    }
}

impl Stemmer for DutchStemmer {
    fn name(&self) -> &'static str {
        "dutch"
    }

    fn stem<'a>(&mut self, word: &'a str) -> Cow<'a, str> {
        self.reset(word);
        self.run();

        if !self.regions_marked {
            trace!(
                "dutch: regions incomplete for {word:?} (r1={}, r2={})",
                self.p1, self.p2
            );
        }

        trace!(
            "dutch: {word:?} -> {:?} (r1={}, r2={}, regions={})",
            self.buf.chars().iter().collect::<String>(),
            self.p1,
            self.p2,
            self.regions_marked
        );

        if self.buf.eq_str(word) {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(self.buf.current())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

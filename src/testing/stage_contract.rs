use crate::{all_langs, lang::Lang, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Whether `apply(apply(x)) == apply(x)`. Stemming is not: a stem can
    /// itself end in a strippable suffix.
    const IDEMPOTENT: bool = true;

    /// Languages the stage can run in.
    fn languages() -> &'static [Lang] {
        all_langs()
    }

    /// General test samples (may or may not trigger changes)
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and borrowed.
    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: skipped when `IDEMPOTENT` is false
/// 3. `needs_apply_is_accurate`: predicts whether apply() changes text
/// 4. `borrowed_and_owned_agree`: output does not depend on input ownership
/// 5. `handles_empty_string`
/// 6. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::borrowed_and_owned_agree($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::context::Context;
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);

        for &input in S::samples(lang) {
            let text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                let out = stage.apply(text, &ctx).unwrap();
                assert!(
                    matches!(out, Cow::Owned(_)),
                    "needs_apply true but apply borrowed (lang: {lang:?}, input: `{input}`)"
                );
            } else {
                let out = stage.apply(text, &ctx).unwrap();
                assert!(
                    matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                    "zero-copy violated (lang: {lang:?}, input: `{input}`)"
                );
            }
        }

        for &pass_through in S::should_pass_through(lang) {
            assert!(
                !stage.needs_apply(pass_through, &ctx).unwrap(),
                "needs_apply on pass-through sample (lang: {lang:?}, input: `{pass_through}`)"
            );
            let out = stage.apply(Cow::Borrowed(pass_through), &ctx).unwrap();
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
                "zero-copy violated on pass-through sample (lang: {lang:?}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(lang) {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(text.as_ref(), expected, "lang: {lang:?}");
        }
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    if !S::IDEMPOTENT {
        return;
    }
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        for &input in S::samples(lang) {
            let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent in {lang:?} on `{input}`");
        }
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        for &sample in S::samples(lang) {
            check_accuracy(&stage, sample, &ctx);
        }
        for &(input, _) in S::should_transform(lang) {
            check_accuracy(&stage, input, &ctx);
        }
    }
}

#[cfg(test)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {lang:?} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        lang = ctx.lang
    );
}

#[cfg(test)]
pub fn borrowed_and_owned_agree<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        for &input in S::samples(lang) {
            let borrowed = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let owned = stage.apply(Cow::Owned(input.to_owned()), &ctx).unwrap();
            assert_eq!(borrowed, owned, "lang: {lang:?}, input: `{input}`");
        }
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        assert!(!stage.needs_apply("", &ctx).unwrap());
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx).unwrap(), "");
    }
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for &lang in S::languages() {
        let ctx = Context::new(lang);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 zeeën"),
            &ctx,
        );
    }
}

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Unicode lower-casing. The stemming rules only recognise lower-case
/// letters, so this normally runs right before [`Stem`](super::stem::Stem).
pub struct LowerCase;

#[inline(always)]
fn changes_on_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(changes_on_lowercase))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        if text.is_ascii() {
            return Ok(Cow::Owned(text.to_ascii_lowercase()));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for LowerCase {
        fn should_transform(_lang: crate::Lang) -> &'static [(&'static str, &'static str)] {
            &[
                ("KATTEN", "katten"),
                ("Mooie Bomen", "mooie bomen"),
                ("ZEEËN", "zeeën"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(LowerCase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NLD;

    #[test]
    fn titlecase_digraph_counts_as_change() {
        let ctx = Context::new(NLD);
        assert!(LowerCase.needs_apply("ǅ", &ctx).unwrap());
        assert_eq!(LowerCase.apply(Cow::Borrowed("ǅ"), &ctx).unwrap(), "ǆ");
    }

    #[test]
    fn borrowed_when_already_lower() {
        let ctx = Context::new(NLD);
        let input = "vriendinnen café";
        let out = LowerCase.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}

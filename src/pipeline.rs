// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use log::trace;
use std::borrow::Cow;
use std::sync::Arc;

pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if stage.needs_apply_is_cheap() && !stage.needs_apply(&current, ctx)? {
                trace!("pipeline: skip `{}`", stage.name());
                continue;
            }

            current = stage.apply(current, ctx)?;
            trace!("pipeline: `{}` -> {:?}", stage.name(), current);
        }

        Ok(current)
    }
}

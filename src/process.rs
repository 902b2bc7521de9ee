//! Ordered stage execution with char-mapper fusion.
//!
//! Stages run in insertion order. A run of consecutive stages that all expose
//! a [`CharMapper`] is executed as one pass: each char goes through every
//! mapper of the run in order, so the result is identical to running the
//! stages one after another, but the text is scanned once and allocated at
//! most once. Non-fusable stages (the kana stages) run on their own.
use crate::stage::{CharMapper, Stage};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

/// Stage lists above this size spill to the heap.
const INLINE_STAGES: usize = 12;

type Stages = SmallVec<[Arc<dyn Stage>; INLINE_STAGES]>;

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Stages,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;
        let mut i = 0;

        while i < self.stages.len() {
            let end = fusable_segment_end(&self.stages, i);
            if end > i + 1 {
                current = process_fused_segment(current, &self.stages[i..end]);
                i = end;
                continue;
            }

            let stage = &self.stages[i];
            if stage.needs_apply(&current) {
                let before = current.len();
                current = stage.apply(current);
                log::trace!(
                    "stage `{}` rewrote text ({} -> {} bytes)",
                    stage.name(),
                    before,
                    current.len()
                );
            }
            i += 1;
        }

        current
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// End (exclusive) of the run of char-mapper stages starting at `start`.
fn fusable_segment_end(stages: &[Arc<dyn Stage>], start: usize) -> usize {
    let mut end = start;
    while end < stages.len() && stages[end].as_char_mapper().is_some() {
        end += 1;
    }
    end
}

fn process_fused_segment<'a>(input: Cow<'a, str>, segment: &[Arc<dyn Stage>]) -> Cow<'a, str> {
    let mappers: SmallVec<[&dyn CharMapper; INLINE_STAGES]> = segment
        .iter()
        .filter_map(|s| s.as_char_mapper())
        .collect();

    let compose = |c: char| mappers.iter().fold(c, |acc, m| m.map(acc));

    // Zero-copy fast path: nothing in the segment changes any char
    let Some((first, _)) = input.char_indices().find(|&(_, c)| compose(c) != c) else {
        return input;
    };

    let mut out = String::with_capacity(input.len() + 3);
    out.push_str(&input[..first]);
    out.extend(input[first..].chars().map(compose));

    log::trace!(
        "fused {} stages rewrote text ({} -> {} bytes)",
        segment.len(),
        input.len(),
        out.len()
    );
    Cow::Owned(out)
}

//! Back/forward navigation over a lazily produced run

use super::stepper::StepEngine;
use crate::algorithms::EngineFn;
use crate::errors::NavigationError;
use crate::snapshot::{Element, Snapshot};
use std::mem;
use tracing::debug;

/// Navigation history for one run.
///
/// Invariant: `past` (oldest first), then `current`, then `future` reversed is
/// a contiguous prefix of the run produced so far. `past[0]` (or `current`,
/// when `past` is empty) is the pre-sort seed.
#[derive(Debug)]
pub struct History {
    engine_fn: EngineFn,
    engine: StepEngine,
    past: Vec<Snapshot>,
    current: Snapshot,
    future: Vec<Snapshot>,
}

impl History {
    /// Start a run of `engine_fn` over `elements`, seeded with the pre-sort array
    pub fn new(engine_fn: EngineFn, elements: &[Element]) -> Self {
        History {
            engine_fn,
            engine: StepEngine::new(engine_fn(elements)),
            past: Vec::new(),
            current: Snapshot::initial(elements),
            future: Vec::new(),
        }
    }

    /// Discard both buffers and start a fresh run over `elements`
    pub fn reset(&mut self, elements: &[Element]) {
        debug!(len = elements.len(), "history reset");
        self.engine = StepEngine::new((self.engine_fn)(elements));
        self.past.clear();
        self.future.clear();
        self.current = Snapshot::initial(elements);
    }

    /// Replace the engine and restart over `elements`
    pub fn reset_with(&mut self, engine_fn: EngineFn, elements: &[Element]) {
        self.engine_fn = engine_fn;
        self.reset(elements);
    }

    /// Advance one snapshot, replaying a buffered one if available
    pub fn step_forward(&mut self) -> Result<&Snapshot, NavigationError> {
        let next = match self.future.pop() {
            Some(buffered) => buffered,
            None => self.engine.pull().ok_or(NavigationError::RunExhausted)?,
        };

        let previous = mem::replace(&mut self.current, next);
        self.past.push(previous);
        Ok(&self.current)
    }

    /// Go back one snapshot without touching the engine
    pub fn step_back(&mut self) -> Result<&Snapshot, NavigationError> {
        let previous = self.past.pop().ok_or(NavigationError::AtStart)?;
        let left = mem::replace(&mut self.current, previous);
        self.future.push(left);
        Ok(&self.current)
    }

    /// Take up to `n` forward steps; returns how many were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        while stepped < n && self.step_forward().is_ok() {
            stepped += 1;
        }
        stepped
    }

    /// Return to the seed snapshot using only the buffers
    pub fn rewind(&mut self) -> usize {
        let mut stepped = 0;
        while self.step_back().is_ok() {
            stepped += 1;
        }
        stepped
    }

    /// Step forward until the run is exhausted
    pub fn fast_forward(&mut self) -> usize {
        self.step_forward_by(usize::MAX)
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Index of the current snapshot; the seed is 0
    pub fn position(&self) -> usize {
        self.past.len()
    }

    /// Snapshots held in the buffers, seed included
    pub fn produced(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    /// Total snapshots in the run, known once the engine is exhausted
    pub fn total(&self) -> Option<usize> {
        self.engine.is_exhausted().then(|| self.produced())
    }

    pub fn is_at_start(&self) -> bool {
        self.past.is_empty()
    }

    /// True when no further step is possible
    pub fn is_at_end(&self) -> bool {
        self.future.is_empty() && self.engine.is_exhausted()
    }

    pub fn engine_pulls(&self) -> usize {
        self.engine.pulls()
    }
}

//! Pull-based adapter over a [`Run`]

use crate::algorithms::Run;
use crate::snapshot::Snapshot;

/// Pulls snapshots one at a time from a sort engine.
///
/// `pull` is the only place the algorithm does work; the number of pulls is
/// recorded so callers can verify the engine is never asked twice for the same
/// step.
pub struct StepEngine {
    run: Run,
    pulls: usize,
    exhausted: bool,
}

impl StepEngine {
    pub fn new(run: Run) -> Self {
        StepEngine {
            run,
            pulls: 0,
            exhausted: false,
        }
    }

    /// Next snapshot of the run, or `None` once the terminal snapshot has
    /// already been returned
    pub fn pull(&mut self) -> Option<Snapshot> {
        if self.exhausted {
            return None;
        }

        self.pulls += 1;
        let next = self.run.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    /// Number of times the engine has been asked for a snapshot
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl std::fmt::Debug for StepEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepEngine")
            .field("pulls", &self.pulls)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

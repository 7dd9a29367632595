//! Instrumented sort engines
//!
//! Each engine turns an in-place sort into a lazily produced [`Run`] of
//! [`Snapshot`]s. Rust has no stable generators, so every engine is an explicit
//! resumable state machine implementing [`Instrumented`]: one call to
//! [`Instrumented::advance`] performs one decision point (a comparison and the
//! mutation it triggers, a pass boundary, a heapify frame) and records the
//! snapshots it produced in the shared [`Workspace`]. [`SortRun`] drains those
//! snapshots one at a time and appends the terminal result.
//!
//! # Engines
//!
//! - [`bubble`]: adjacent swaps, early exit on a pass without swaps
//! - [`selection`]: minimum scan with a tracked candidate
//! - [`cycle`]: cycle rotation with duplicate skipping
//! - [`heap`]: max-heap build and extraction, heapify as an explicit frame stack
//!
//! [`registry`] pairs each engine with its static metadata.

pub mod bubble;
pub mod cycle;
pub mod heap;
pub mod registry;
pub mod selection;

use crate::errors::ParseAlgorithmError;
use crate::snapshot::{Element, Snapshot, Tag};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

pub use registry::{AlgorithmInfo, AlgorithmRegistry, Complexity};

/// A lazily produced, finite sequence of snapshots for one input array
pub type Run = Box<dyn Iterator<Item = Snapshot>>;

/// Constructor for a run over a borrowed input array
pub type EngineFn = fn(&[Element]) -> Run;

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    CycleSort,
    HeapSort,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BubbleSort,
        Algorithm::CycleSort,
        Algorithm::SelectionSort,
        Algorithm::HeapSort,
    ];

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let idx = self.menu_index();
        Algorithm::ALL[(idx + 1) % Algorithm::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.menu_index();
        Algorithm::ALL[(idx + Algorithm::ALL.len() - 1) % Algorithm::ALL.len()]
    }

    pub fn menu_index(self) -> usize {
        match self {
            Algorithm::BubbleSort => 0,
            Algorithm::CycleSort => 1,
            Algorithm::SelectionSort => 2,
            Algorithm::HeapSort => 3,
        }
    }

    /// Kebab-case identifier accepted on the command line
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble",
            Algorithm::SelectionSort => "selection",
            Algorithm::CycleSort => "cycle",
            Algorithm::HeapSort => "heap",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::CycleSort => "Cycle Sort",
            Algorithm::HeapSort => "Heap Sort",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "bubble" | "bubble-sort" => Ok(Algorithm::BubbleSort),
            "selection" | "selection-sort" => Ok(Algorithm::SelectionSort),
            "cycle" | "cycle-sort" => Ok(Algorithm::CycleSort),
            "heap" | "heap-sort" => Ok(Algorithm::HeapSort),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Result of one [`Instrumented::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Finished,
}

/// A sort algorithm written as a resumable state machine
pub trait Instrumented {
    /// Perform the next decision point, emitting its snapshots into `ws`.
    ///
    /// May emit nothing (e.g. a pass boundary); [`SortRun`] keeps advancing
    /// until a snapshot is available or the engine reports `Finished`.
    fn advance(&mut self, ws: &mut Workspace) -> Progress;
}

/// Private working copy of the array plus the snapshots produced but not yet pulled
#[derive(Debug)]
pub struct Workspace {
    elements: Vec<Element>,
    finalized: FxHashSet<usize>,
    pending: VecDeque<Snapshot>,
}

impl Workspace {
    fn new(input: &[Element]) -> Self {
        Workspace {
            elements: input.iter().map(|e| e.tagged(Tag::None)).collect(),
            finalized: FxHashSet::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn value(&self, idx: usize) -> i64 {
        self.elements[idx].value
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    /// Mark `idx` as holding its final sorted value for the rest of the run
    pub fn finalize(&mut self, idx: usize) {
        self.finalized.insert(idx);
    }

    /// Record a snapshot of the current array.
    ///
    /// `role` assigns tags to unfinalized indices; finalized indices are
    /// always tagged [`Tag::Finalized`].
    pub fn emit(&mut self, description: String, role: impl Fn(usize) -> Tag) {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                if self.finalized.contains(&idx) {
                    e.tagged(Tag::Finalized)
                } else {
                    e.tagged(role(idx))
                }
            })
            .collect();
        self.pending
            .push_back(Snapshot::new(elements, Some(description)));
    }

    fn emit_result(&mut self) {
        self.finalized.extend(0..self.elements.len());
        let elements = self
            .elements
            .iter()
            .map(|e| e.tagged(Tag::Finalized))
            .collect();
        self.pending.push_back(Snapshot::new(
            elements,
            Some("Sorted. Every element is in its final position".to_string()),
        ));
    }
}

/// Iterator adapter that drives an [`Instrumented`] engine lazily
#[derive(Debug)]
pub struct SortRun<E> {
    workspace: Workspace,
    engine: E,
    finished: bool,
}

impl<E: Instrumented> SortRun<E> {
    /// Start a run over a private copy of `input`
    pub fn new(input: &[Element], engine: E) -> Self {
        SortRun {
            workspace: Workspace::new(input),
            engine,
            finished: false,
        }
    }
}

impl<E: Instrumented> Iterator for SortRun<E> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            if let Some(snapshot) = self.workspace.pending.pop_front() {
                return Some(snapshot);
            }
            if self.finished {
                return None;
            }
            if self.engine.advance(&mut self.workspace) == Progress::Finished {
                self.workspace.emit_result();
                self.finished = true;
            }
        }
    }
}

impl<E: Instrumented> FusedIterator for SortRun<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Immediate;

    impl Instrumented for Immediate {
        fn advance(&mut self, _ws: &mut Workspace) -> Progress {
            Progress::Finished
        }
    }

    #[test]
    fn test_run_ends_with_result_then_fuses() {
        let input: Vec<Element> = [2, 1].into_iter().map(Element::from_value).collect();
        let mut run = SortRun::new(&input, Immediate);

        let last = run.next().expect("terminal snapshot");
        assert!(last.elements.iter().all(|e| e.tag == Tag::Finalized));
        assert!(run.next().is_none());
        assert!(run.next().is_none());
    }

    #[test]
    fn test_emit_gives_finalized_precedence() {
        let input: Vec<Element> = [5, 6, 7].into_iter().map(Element::from_value).collect();
        let mut ws = Workspace::new(&input);
        ws.finalize(2);
        ws.emit("check".to_string(), |_| Tag::Comparing);

        let snapshot = ws.pending.pop_front().expect("emitted");
        assert_eq!(snapshot.elements[0].tag, Tag::Comparing);
        assert_eq!(snapshot.elements[2].tag, Tag::Finalized);
    }

    #[test]
    fn test_algorithm_parse_and_cycle() {
        assert_eq!("heap".parse::<Algorithm>().ok(), Some(Algorithm::HeapSort));
        assert_eq!(
            "Selection_Sort".parse::<Algorithm>().ok(),
            Some(Algorithm::SelectionSort)
        );
        assert!("quick".parse::<Algorithm>().is_err());

        for algo in Algorithm::ALL {
            assert_eq!(algo.next().prev(), algo);
        }
        assert_eq!(Algorithm::HeapSort.next(), Algorithm::BubbleSort);
    }
}

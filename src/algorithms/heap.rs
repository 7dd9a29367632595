//! Heap sort
//!
//! Two phases. The build phase heapifies every internal node from the last
//! parent down to the root. The extraction phase repeatedly swaps the root
//! (the maximum) with the last unsorted element, finalizes that slot, shrinks
//! the heap by one and heapifies from the root again.
//!
//! Heapify is recursive in its textbook form. Here each pending call is a
//! [`HeapifyFrame`] on an explicit stack so every call can emit its snapshots
//! and suspend between pulls.

use super::{Instrumented, Progress, Run, SortRun, Workspace};
use crate::snapshot::{Element, Tag};

/// One pending `heapify(node)` call over the heap prefix `[0, bound)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapifyFrame {
    pub node: usize,
    pub bound: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Heapify `next`, then the node before it; `None` once the root is done
    Build { next: Option<usize> },
    /// Move the root to `end`, then heapify the remaining prefix
    Extract { end: usize },
}

/// Resumable heap sort. `phase` is `None` until the first advance
#[derive(Debug, Default)]
pub struct HeapSort {
    phase: Option<Phase>,
    frames: Vec<HeapifyFrame>,
}

pub fn heap_sort(elements: &[Element]) -> Run {
    Box::new(SortRun::new(elements, HeapSort::default()))
}

fn children(node: usize, bound: usize) -> (Option<usize>, Option<usize>) {
    let left = 2 * node + 1;
    let right = 2 * node + 2;
    (
        (left < bound).then_some(left),
        (right < bound).then_some(right),
    )
}

impl HeapSort {
    /// Run one heapify frame: inspect, compare, and swap if a child is larger.
    /// A swap pushes the frame for the child's subtree.
    fn heapify(&mut self, ws: &mut Workspace, frame: HeapifyFrame) {
        let HeapifyFrame { node, bound } = frame;
        let (left, right) = children(node, bound);
        let root = ws.value(node);
        let role = |idx: usize| {
            if idx == node {
                Tag::Comparing
            } else if Some(idx) == left || Some(idx) == right {
                Tag::Tracked
            } else {
                Tag::None
            }
        };

        let mut inspect = format!("Creating heap from {}.", root);
        if let Some(l) = left {
            inspect.push_str(&format!(" Left child is {}.", ws.value(l)));
        }
        if let Some(r) = right {
            inspect.push_str(&format!(" Right child is {}.", ws.value(r)));
        }
        ws.emit(inspect, role);

        let check = match (left, right) {
            (None, None) => "No children".to_string(),
            _ => [left, right]
                .into_iter()
                .flatten()
                .map(|child| format!("Checking if root {} > {}.", root, ws.value(child)))
                .collect::<Vec<_>>()
                .join(" "),
        };
        ws.emit(check, role);

        let mut largest = node;
        for child in [left, right].into_iter().flatten() {
            if ws.value(child) > ws.value(largest) {
                largest = child;
            }
        }

        if largest == node {
            if left.is_some() {
                ws.emit(
                    format!("Root {} is the largest. No swap needed", root),
                    |idx| if idx == node { Tag::Comparing } else { Tag::None },
                );
            }
            return;
        }

        ws.swap(node, largest);
        let (child_value, root_value) = (ws.value(node), ws.value(largest));
        ws.emit(
            format!(
                "Child {} > {}. Swapping {} and {} to build max heap",
                child_value, root_value, child_value, root_value
            ),
            |idx| {
                if idx == node || idx == largest {
                    Tag::Swapping
                } else {
                    Tag::None
                }
            },
        );

        self.frames.push(HeapifyFrame {
            node: largest,
            bound,
        });
    }
}

impl Instrumented for HeapSort {
    fn advance(&mut self, ws: &mut Workspace) -> Progress {
        let n = ws.len();
        if n < 2 {
            return Progress::Finished;
        }

        if let Some(frame) = self.frames.pop() {
            self.heapify(ws, frame);
            return Progress::Continue;
        }

        let phase = self.phase.unwrap_or(Phase::Build {
            next: Some(n / 2 - 1),
        });

        self.phase = match phase {
            Phase::Build { next: Some(node) } => {
                self.frames.push(HeapifyFrame { node, bound: n });
                Some(Phase::Build {
                    next: node.checked_sub(1),
                })
            }
            Phase::Build { next: None } => Some(Phase::Extract { end: n - 1 }),
            Phase::Extract { end } if end > 0 => {
                ws.swap(0, end);
                let max = ws.value(end);
                ws.emit(
                    format!(
                        "Move heap head (max value) {} to end of unsorted elements",
                        max
                    ),
                    |idx| {
                        if idx == 0 || idx == end {
                            Tag::Swapping
                        } else {
                            Tag::None
                        }
                    },
                );
                ws.finalize(end);
                self.frames.push(HeapifyFrame { node: 0, bound: end });
                Some(Phase::Extract { end: end - 1 })
            }
            Phase::Extract { .. } => return Progress::Finished,
        };

        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i64]) -> Vec<crate::snapshot::Snapshot> {
        let input: Vec<Element> = values.iter().copied().map(Element::from_value).collect();
        heap_sort(&input).collect()
    }

    #[test]
    fn test_build_heapifies_last_parent_first() {
        let snapshots = run(&[1, 5, 3, 4]);

        // last parent of 4 elements is index 1 (children 3)
        assert_eq!(
            snapshots[0].description.as_deref(),
            Some("Creating heap from 5. Left child is 4.")
        );
        assert_eq!(snapshots[0].elements[1].tag, Tag::Comparing);
        assert_eq!(snapshots[0].elements[3].tag, Tag::Tracked);
    }

    #[test]
    fn test_leaf_reports_no_children() {
        let snapshots = run(&[2, 1]);

        assert!(snapshots
            .iter()
            .any(|s| s.description.as_deref() == Some("No children")));
        assert_eq!(snapshots.last().map(|s| s.values()), Some(vec![1, 2]));
    }

    #[test]
    fn test_extraction_finalizes_from_tail() {
        let snapshots = run(&[3, 1, 2]);
        let first_move = snapshots
            .iter()
            .position(|s| {
                s.description
                    .as_deref()
                    .is_some_and(|d| d.starts_with("Move heap head"))
            })
            .expect("extraction step");

        // the slot is finalized right after the move snapshot
        assert_eq!(snapshots[first_move].elements[2].tag, Tag::Swapping);
        assert_eq!(snapshots[first_move + 1].elements[2].tag, Tag::Finalized);
    }
}

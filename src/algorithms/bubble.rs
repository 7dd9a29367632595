//! Bubble sort
//!
//! Repeated passes over the unsorted prefix swap adjacent elements that are out
//! of order, so the largest unsorted value bubbles into place at the end of
//! every pass. A pass without swaps ends the run early.

use super::{Instrumented, Progress, Run, SortRun, Workspace};
use crate::snapshot::{Element, Tag};

/// Resumable bubble sort: `pass` passes done, next comparison at `j`
#[derive(Debug, Default)]
pub struct BubbleSort {
    pass: usize,
    j: usize,
    swapped: bool,
}

pub fn bubble_sort(elements: &[Element]) -> Run {
    Box::new(SortRun::new(elements, BubbleSort::default()))
}

impl Instrumented for BubbleSort {
    fn advance(&mut self, ws: &mut Workspace) -> Progress {
        let n = ws.len();
        if n < 2 || self.pass >= n - 1 {
            return Progress::Finished;
        }

        let j = self.j;
        if j < n - self.pass - 1 {
            let (left, right) = (ws.value(j), ws.value(j + 1));
            let pair = |idx: usize| idx == j || idx == j + 1;

            ws.emit(format!("Checking if {} < {}", left, right), |idx| {
                if pair(idx) { Tag::Comparing } else { Tag::None }
            });

            if left > right {
                ws.swap(j, j + 1);
                self.swapped = true;
                ws.emit(
                    format!("Yes, {} < {}. Swapping {} and {}", right, left, left, right),
                    |idx| if pair(idx) { Tag::Swapping } else { Tag::None },
                );
            }

            self.j += 1;
            return Progress::Continue;
        }

        // End of pass: the last unsorted slot now holds the pass maximum
        ws.finalize(n - 1 - self.pass);
        if !self.swapped {
            return Progress::Finished;
        }

        self.pass += 1;
        self.j = 0;
        self.swapped = false;
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn run(values: &[i64]) -> Vec<Snapshot> {
        let input: Vec<Element> = values.iter().copied().map(Element::from_value).collect();
        bubble_sort(&input).collect()
    }

    #[test]
    fn test_compare_then_swap() {
        let snapshots = run(&[7, 4]);

        assert_eq!(snapshots[0].description.as_deref(), Some("Checking if 7 < 4"));
        assert_eq!(snapshots[0].elements[0].tag, Tag::Comparing);
        assert_eq!(snapshots[1].values(), vec![4, 7]);
        assert_eq!(snapshots[1].elements[1].tag, Tag::Swapping);
        assert!(snapshots.last().is_some_and(|s| s.is_sorted_result()));
    }

    #[test]
    fn test_sorted_input_stops_after_one_pass() {
        let snapshots = run(&[1, 2, 3, 4]);

        // three comparisons in the first pass, no swaps, then the result
        assert_eq!(snapshots.len(), 4);
        assert!(snapshots[..3]
            .iter()
            .all(|s| s.indices_tagged(Tag::Swapping).is_empty()));
    }

    #[test]
    fn test_pass_finalizes_tail() {
        let snapshots = run(&[3, 2, 1]);
        // pass 0: (3,2) swap, (3,1) swap; pass 1 starts with index 2 finalized
        let first_of_second_pass = &snapshots[4];

        assert_eq!(first_of_second_pass.elements[2].tag, Tag::Finalized);
        assert_eq!(first_of_second_pass.values(), vec![2, 1, 3]);
    }
}

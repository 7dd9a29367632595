//! Selection sort
//!
//! For every position the unsorted remainder is scanned for its minimum, which
//! is then swapped into place.

use super::{Instrumented, Progress, Run, SortRun, Workspace};
use crate::snapshot::{Element, Tag};

/// Resumable selection sort: filling position `i`, next candidate `j`,
/// minimum so far at `min`
#[derive(Debug)]
pub struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
}

impl Default for SelectionSort {
    fn default() -> Self {
        SelectionSort { i: 0, j: 1, min: 0 }
    }
}

pub fn selection_sort(elements: &[Element]) -> Run {
    Box::new(SortRun::new(elements, SelectionSort::default()))
}

impl Instrumented for SelectionSort {
    fn advance(&mut self, ws: &mut Workspace) -> Progress {
        let n = ws.len();
        if n < 2 || self.i >= n {
            return Progress::Finished;
        }

        let (i, j) = (self.i, self.j);
        if j < n {
            let min = self.min;
            let (candidate, current_min) = (ws.value(j), ws.value(min));

            ws.emit(
                format!("Checking if {} < {}.", candidate, current_min),
                |idx| {
                    if idx == i || idx == j {
                        Tag::Comparing
                    } else if idx == min {
                        Tag::Tracked
                    } else {
                        Tag::None
                    }
                },
            );

            if candidate < current_min {
                self.min = j;
                ws.emit(
                    format!(
                        "Yes, {} < {}. Updating minimum element",
                        candidate, current_min
                    ),
                    |idx| {
                        if idx == j {
                            Tag::Tracked
                        } else if idx == i {
                            Tag::Comparing
                        } else {
                            Tag::None
                        }
                    },
                );
            }

            self.j += 1;
            return Progress::Continue;
        }

        let min = self.min;
        if min != i {
            ws.swap(i, min);
            let (placed, displaced) = (ws.value(i), ws.value(min));
            ws.emit(
                format!(
                    "Swapping {} and {}. {} is now in correct position",
                    displaced, placed, placed
                ),
                |idx| {
                    if idx == i || idx == min {
                        Tag::Swapping
                    } else {
                        Tag::None
                    }
                },
            );
        }

        ws.finalize(i);
        self.i += 1;
        self.j = self.i + 1;
        self.min = self.i;
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_in_place_skips_swap() {
        let input: Vec<Element> = [1, 2].into_iter().map(Element::from_value).collect();
        let snapshots: Vec<_> = selection_sort(&input).collect();

        // one comparison, no minimum update, no swap, result
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].elements[0].tag, Tag::Comparing);
        assert_eq!(snapshots[0].elements[1].tag, Tag::Comparing);
    }
}

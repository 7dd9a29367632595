//! Cycle sort
//!
//! For each cycle start the destination of its value is found by counting the
//! smaller values after it. The value is swapped there and the displaced value
//! takes its place at the start, until the value sitting at the start belongs
//! there. Equal values already at the destination are skipped so repeated
//! values never rotate forever.

use super::{Instrumented, Progress, Run, SortRun, Workspace};
use crate::snapshot::{Element, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Begin a rotation on the value currently at `start`
    Open,
    /// Count values smaller than `item`; next index to inspect
    Scan(usize),
    /// Step past values equal to `item` at the destination
    SkipDuplicates,
    /// Swap into the destination, or close the cycle
    Rotate,
}

/// Resumable cycle sort. `pos` is the destination found so far and the end of
/// the tracked range.
#[derive(Debug)]
pub struct CycleSort {
    start: usize,
    pos: usize,
    item: i64,
    stage: Stage,
}

impl Default for CycleSort {
    fn default() -> Self {
        CycleSort {
            start: 0,
            pos: 0,
            item: 0,
            stage: Stage::Open,
        }
    }
}

pub fn cycle_sort(elements: &[Element]) -> Run {
    Box::new(SortRun::new(elements, CycleSort::default()))
}

impl CycleSort {
    fn emit(&self, ws: &mut Workspace, description: String, highlight: &[usize], tag: Tag) {
        let (start, pos) = (self.start, self.pos);
        ws.emit(description, |idx| {
            if highlight.contains(&idx) {
                tag
            } else if idx >= start && idx <= pos {
                Tag::Tracked
            } else {
                Tag::None
            }
        });
    }
}

impl Instrumented for CycleSort {
    fn advance(&mut self, ws: &mut Workspace) -> Progress {
        let n = ws.len();
        if n < 2 || self.start >= n {
            return Progress::Finished;
        }

        let start = self.start;
        match self.stage {
            Stage::Open => {
                self.item = ws.value(start);
                self.pos = start;
                self.emit(
                    ws,
                    format!(
                        "Unsure if {} is in correct place. Starting new cycle on {}.",
                        self.item, self.item
                    ),
                    &[],
                    Tag::None,
                );
                self.stage = Stage::Scan(start + 1);
            }
            Stage::Scan(i) if i < n => {
                let value = ws.value(i);
                self.emit(
                    ws,
                    format!("Checking if {} < {}.", value, self.item),
                    &[start, i],
                    Tag::Comparing,
                );
                if value < self.item {
                    self.pos += 1;
                    self.emit(
                        ws,
                        format!(
                            "Yes, {} < {}. Increasing cycle length by 1",
                            value, self.item
                        ),
                        &[start, i],
                        Tag::Comparing,
                    );
                }
                self.stage = Stage::Scan(i + 1);
            }
            Stage::Scan(_) => self.stage = Stage::SkipDuplicates,
            Stage::SkipDuplicates => {
                // bounded: each skip consumes a distinct equal value after `start`
                if self.pos != start && ws.value(self.pos) == self.item {
                    self.pos += 1;
                    self.emit(
                        ws,
                        format!(
                            "Ignoring duplicate {}. Increasing cycle length by 1",
                            self.item
                        ),
                        &[start, self.pos],
                        Tag::Comparing,
                    );
                } else {
                    self.stage = Stage::Rotate;
                }
            }
            Stage::Rotate => {
                let pos = self.pos;
                if ws.value(pos) != self.item {
                    ws.swap(start, pos);
                    let displaced = ws.value(start);
                    self.emit(
                        ws,
                        format!(
                            "Swapping {} and {}. {} is now in correct position",
                            displaced, self.item, self.item
                        ),
                        &[start, pos],
                        Tag::Swapping,
                    );
                } else {
                    // destination is the start itself: the cycle is closed
                    ws.finalize(start);
                    self.start += 1;
                }
                self.stage = Stage::Open;
            }
        }

        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_skip_extends_range() {
        // start 0 holds 2; one smaller value puts the destination at 1, which
        // already holds a 2, so the destination moves on to 2
        let input: Vec<Element> = [2, 2, 1].into_iter().map(Element::from_value).collect();
        let snapshots: Vec<_> = cycle_sort(&input).collect();

        let skip = snapshots
            .iter()
            .find(|s| {
                s.description
                    .as_deref()
                    .is_some_and(|d| d.starts_with("Ignoring duplicate"))
            })
            .expect("duplicate skip snapshot");
        assert_eq!(skip.elements[0].tag, Tag::Comparing);
        assert_eq!(skip.elements[1].tag, Tag::Tracked);
        assert_eq!(skip.elements[2].tag, Tag::Comparing);

        let result = snapshots.last().expect("result");
        assert_eq!(result.values(), vec![1, 2, 2]);
    }
}

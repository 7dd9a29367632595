//! Static algorithm metadata and the engine lookup table
//!
//! The registry is built once at startup and handed to whoever needs to resolve
//! an [`Algorithm`] selection. It is never mutated afterwards.

use super::bubble::bubble_sort;
use super::cycle::cycle_sort;
use super::heap::heap_sort;
use super::selection::selection_sort;
use super::{Algorithm, EngineFn, Run};
use crate::snapshot::Element;
use rustc_hash::FxHashMap;
use std::fmt;

/// Asymptotic complexity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log N)",
            Complexity::Linear => "O(N)",
            Complexity::Linearithmic => "O(N log N)",
            Complexity::Quadratic => "O(N²)",
        };
        f.write_str(text)
    }
}

/// Everything the UI shows about an algorithm, plus its engine
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    pub time: Complexity,
    pub space: Complexity,
    pub description: &'static [&'static str],
    pub link: Option<&'static str>,
    pub engine: EngineFn,
}

impl AlgorithmInfo {
    pub fn name(&self) -> String {
        self.algorithm.to_string()
    }

    /// Start a new run of this algorithm over a copy of `elements`
    pub fn start(&self, elements: &[Element]) -> Run {
        (self.engine)(elements)
    }
}

const BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    algorithm: Algorithm::BubbleSort,
    time: Complexity::Quadratic,
    space: Complexity::Constant,
    description: &[
        "Bubble Sort is the simplest sorting algorithm that works by repeatedly swapping the adjacent elements if they are in the wrong order.",
        "This algorithm is not suitable for large data sets as its average and worst-case time complexity are quite high.",
    ],
    link: Some("https://www.geeksforgeeks.org/bubble-sort-algorithm/"),
    engine: bubble_sort,
};

const CYCLE_SORT: AlgorithmInfo = AlgorithmInfo {
    algorithm: Algorithm::CycleSort,
    time: Complexity::Quadratic,
    space: Complexity::Constant,
    description: &[
        "Cycle sort is an in-place, unstable sorting algorithm that is particularly useful when sorting arrays containing elements with a small range of values.",
        "Basic idea is that we loop through the array and don't move on until the correct item is at the current location.",
    ],
    link: None,
    engine: cycle_sort,
};

const SELECTION_SORT: AlgorithmInfo = AlgorithmInfo {
    algorithm: Algorithm::SelectionSort,
    time: Complexity::Quadratic,
    space: Complexity::Constant,
    description: &[
        "Selection sort sorts an array by repeatedly selecting the smallest element from the unsorted portion and swapping it with the first unsorted element. This process continues until the entire array is sorted.",
    ],
    link: Some("https://www.geeksforgeeks.org/selection-sort-algorithm-2/"),
    engine: selection_sort,
};

const HEAP_SORT: AlgorithmInfo = AlgorithmInfo {
    algorithm: Algorithm::HeapSort,
    time: Complexity::Linearithmic,
    space: Complexity::Logarithmic,
    description: &[
        "Heap Sort is a comparison-based sorting technique based on the Binary Heap data structure. It can be seen as an optimization over selection sort where we first find the max element and swap it with the last.",
        "We repeat the same process for the remaining elements. The heap lets us find and move the max element in O(log N) instead of O(N), giving O(N log N) overall.",
    ],
    link: Some("https://www.geeksforgeeks.org/heap-sort/"),
    engine: heap_sort,
};

/// Immutable mapping from [`Algorithm`] to its [`AlgorithmInfo`]
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    entries: FxHashMap<Algorithm, AlgorithmInfo>,
}

impl AlgorithmRegistry {
    /// Registry with every supported algorithm
    pub fn new() -> Self {
        let entries = [BUBBLE_SORT, CYCLE_SORT, SELECTION_SORT, HEAP_SORT]
            .into_iter()
            .map(|info| (info.algorithm, info))
            .collect();
        AlgorithmRegistry { entries }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmInfo> {
        self.entries.get(&algorithm)
    }

    /// Registered algorithms in menu order
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmInfo> {
        Algorithm::ALL
            .iter()
            .filter_map(move |algo| self.entries.get(algo))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_algorithm() {
        let registry = AlgorithmRegistry::new();

        assert_eq!(registry.len(), Algorithm::ALL.len());
        let order: Vec<_> = registry.iter().map(|info| info.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_heap_sort_metadata() {
        let registry = AlgorithmRegistry::new();
        let heap = registry.get(Algorithm::HeapSort).expect("heap sort registered");

        assert_eq!(heap.time.to_string(), "O(N log N)");
        assert_eq!(heap.space.to_string(), "O(log N)");
        assert_eq!(heap.name(), "Heap Sort");
    }

    #[test]
    fn test_start_uses_registered_engine() {
        let registry = AlgorithmRegistry::new();
        let input: Vec<Element> = [2, 1].into_iter().map(Element::from_value).collect();

        for info in registry.iter() {
            let last = info.start(&input).last().expect("terminal snapshot");
            assert_eq!(last.values(), vec![1, 2], "{}", info.name());
        }
    }
}

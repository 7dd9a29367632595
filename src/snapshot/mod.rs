//! Element and snapshot model shared by the sort engines and the history
//!
//! A [`Snapshot`] is a full copy of the array being sorted, with every
//! [`Element`] carrying a semantic [`Tag`] that says why it is highlighted.
//! Tags are roles, not colors; the UI theme maps them to colors at render time.

use rustc_hash::FxHashSet;

/// Why an element is highlighted in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    None,
    Comparing,
    Swapping,
    Tracked,
    Finalized,
}

impl Tag {
    /// Short human-readable name, used in legends
    pub fn label(self) -> &'static str {
        match self {
            Tag::None => "Not Sorted",
            Tag::Comparing => "Comparing",
            Tag::Swapping => "Swapping",
            Tag::Tracked => "Tracked",
            Tag::Finalized => "Sorted",
        }
    }
}

/// One bar of the array: a display label, the sort key, and its current tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub label: String,
    pub value: i64,
    pub tag: Tag,
}

impl Element {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Element {
            label: label.into(),
            value,
            tag: Tag::None,
        }
    }

    /// Element labelled with its own value
    pub fn from_value(value: i64) -> Self {
        Element::new(value.to_string(), value)
    }

    /// Copy of this element carrying a different tag
    pub fn tagged(&self, tag: Tag) -> Self {
        Element {
            label: self.label.clone(),
            value: self.value,
            tag,
        }
    }
}

/// Observable state of the array at one step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub elements: Vec<Element>,
    pub description: Option<String>,
}

impl Snapshot {
    pub fn new(elements: Vec<Element>, description: Option<String>) -> Self {
        Snapshot {
            elements,
            description,
        }
    }

    /// The pre-sort snapshot a history is seeded with: untagged, no description
    pub fn initial(elements: &[Element]) -> Self {
        Snapshot {
            elements: elements.iter().map(|e| e.tagged(Tag::None)).collect(),
            description: None,
        }
    }

    /// Sort keys in array order
    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// Indices currently tagged [`Tag::Finalized`]
    pub fn finalized_indices(&self) -> FxHashSet<usize> {
        self.indices_tagged(Tag::Finalized)
    }

    pub fn indices_tagged(&self, tag: Tag) -> FxHashSet<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tag == tag)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// True when every element is finalized and values are non-decreasing
    pub fn is_sorted_result(&self) -> bool {
        self.elements.iter().all(|e| e.tag == Tag::Finalized)
            && self.elements.windows(2).all(|w| w[0].value <= w[1].value)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_clears_tags() {
        let input = vec![
            Element::from_value(3).tagged(Tag::Comparing),
            Element::from_value(1),
        ];
        let snapshot = Snapshot::initial(&input);

        assert!(snapshot.elements.iter().all(|e| e.tag == Tag::None));
        assert_eq!(snapshot.values(), vec![3, 1]);
        assert!(snapshot.description.is_none());
    }

    #[test]
    fn test_sorted_result_requires_finalized() {
        let sorted = Snapshot::new(
            vec![
                Element::from_value(1).tagged(Tag::Finalized),
                Element::from_value(2).tagged(Tag::Finalized),
            ],
            None,
        );
        let untagged = Snapshot::initial(&sorted.elements);

        assert!(sorted.is_sorted_result());
        assert!(!untagged.is_sorted_result());
        assert_eq!(sorted.finalized_indices().len(), 2);
    }
}

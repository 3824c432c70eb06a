//! Binary item-choice vectors.

use std::fmt;

/// A 0/1 choice over the items of a knapsack instance.
///
/// Index `i` is selected when the item with that index is packed.
///
/// # Example
///
/// ```
/// use antforge_core::Selection;
///
/// let mut selection = Selection::empty(4);
/// selection.select(1);
/// selection.select(3);
///
/// assert_eq!(selection.selected_indices().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(selection.to_bits(), vec![0, 1, 0, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    picked: Vec<bool>,
}

impl Selection {
    /// Creates a selection over `n` items with nothing picked.
    pub fn empty(n: usize) -> Self {
        Self {
            picked: vec![false; n],
        }
    }

    /// Builds a selection from a 0/1 sequence. Any non-zero entry counts as selected.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            picked: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Number of items this selection ranges over.
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Marks item `index` as selected.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn select(&mut self, index: usize) {
        self.picked[index] = true;
    }

    /// Returns true if item `index` is selected. Out-of-range indices are not selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.picked.get(index).copied().unwrap_or(false)
    }

    /// Iterates the selected indices in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.picked
            .iter()
            .enumerate()
            .filter_map(|(i, &picked)| picked.then_some(i))
    }

    /// Number of selected items.
    pub fn count(&self) -> usize {
        self.picked.iter().filter(|&&picked| picked).count()
    }

    /// Returns the selection as a 0/1 sequence.
    pub fn to_bits(&self) -> Vec<u8> {
        self.picked.iter().map(|&picked| u8::from(picked)).collect()
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.selected_indices()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection() {
        let selection = Selection::empty(5);
        assert_eq!(selection.len(), 5);
        assert_eq!(selection.count(), 0);
        assert_eq!(selection.to_bits(), vec![0; 5]);
    }

    #[test]
    fn test_select_and_query() {
        let mut selection = Selection::empty(3);
        selection.select(2);

        assert!(selection.is_selected(2));
        assert!(!selection.is_selected(0));
        assert!(!selection.is_selected(10));
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_from_bits() {
        let selection = Selection::from_bits(&[1, 0, 1, 1]);
        assert_eq!(selection.selected_indices().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn test_debug_lists_indices() {
        let selection = Selection::from_bits(&[0, 1, 1]);
        assert_eq!(format!("{:?}", selection), "[1, 2]");
    }
}

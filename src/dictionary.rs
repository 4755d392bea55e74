//! Ordered itemset → code dictionary.
//!
//! Entries are stored in the order the miner produced them and receive codes
//! `0..N-1` in that same order. Entry order is the substitution precedence:
//! an item that belongs to several itemsets is always coded with the code of
//! the earliest one.

use crate::id_gen::CodeGenerator;
use crate::itemset::Itemset;
use ahash::AHashMap as HashMap;
use std::hash::Hash;
use tracing::debug;

/// A single `(itemset, code)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry<T> {
    pub(crate) itemset: Itemset<T>,
    pub(crate) code: u32,
}

impl<T> DictEntry<T> {
    pub fn itemset(&self) -> &Itemset<T> {
        &self.itemset
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

/// Immutable code dictionary built from an ordered itemset sequence.
///
/// # Example
///
/// ```
/// use itemset_dict::{Dictionary, Itemset};
///
/// let dict = Dictionary::build(vec![
///     Itemset::new(vec!["bread", "butter"], 0.6),
///     Itemset::new(vec!["bread"], 0.8),
/// ]);
///
/// assert_eq!(dict.len(), 2);
/// // "bread" is in both itemsets; the first entry wins.
/// assert_eq!(dict.first_match(&"bread"), Some(0));
/// assert_eq!(dict.first_match(&"jam"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary<T> {
    /// Entries in code order; `entries[i].code == i`
    entries: Vec<DictEntry<T>>,

    /// Item → code of the first entry containing it
    first_match: HashMap<T, u32>,
}

impl<T: Hash + Eq + Clone> Dictionary<T> {
    /// Builds a dictionary, assigning codes sequentially in input order.
    pub fn build<I: IntoIterator<Item = Itemset<T>>>(itemsets: I) -> Self {
        let mut codes = CodeGenerator::new();
        let mut entries = Vec::new();
        let mut first_match = HashMap::default();

        for itemset in itemsets {
            let code = codes.get();
            for item in itemset.iter() {
                // Earlier entries take precedence
                first_match.entry(item.clone()).or_insert(code);
            }
            entries.push(DictEntry { itemset, code });
        }

        debug!(
            entries = codes.allocated(),
            distinct_items = first_match.len(),
            "built dictionary"
        );

        Self {
            entries,
            first_match,
        }
    }

    /// Returns the code of the first entry whose itemset contains `item`.
    pub fn first_match(&self, item: &T) -> Option<u32> {
        self.first_match.get(item).copied()
    }
}

impl<T> Dictionary<T> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by code.
    pub fn get(&self, code: u32) -> Option<&DictEntry<T>> {
        self.entries.get(code as usize)
    }

    /// All entries in code (insertion) order.
    pub fn entries(&self) -> &[DictEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DictEntry<T>> {
        self.entries.iter()
    }
}

// The index is derived from the entries, so only the entries are compared.
impl<T: PartialEq> PartialEq for Dictionary<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Hash + Eq + Clone> Default for Dictionary<T> {
    fn default() -> Self {
        Self::build(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(members: &[&'static str]) -> Itemset<&'static str> {
        Itemset::new(members.iter().copied(), 0.5)
    }

    /// Linear scan in entry order, used to check the index.
    fn scan_first_match(dict: &Dictionary<&'static str>, item: &&'static str) -> Option<u32> {
        dict.iter()
            .find(|entry| entry.itemset().contains(item))
            .map(|entry| entry.code())
    }

    #[test]
    fn test_empty() {
        let dict = Dictionary::<&str>::build(Vec::new());
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert!(dict.get(0).is_none());
    }

    #[test]
    fn test_codes_follow_input_order() {
        let dict = Dictionary::build(vec![set(&["a"]), set(&["b", "c"]), set(&["d"])]);

        let codes: Vec<u32> = dict.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
        assert_eq!(dict.get(1).map(|e| e.itemset().members()), Some(&["b", "c"][..]));
    }

    #[test]
    fn test_first_match_precedence() {
        let dict = Dictionary::build(vec![set(&["x", "y"]), set(&["y"]), set(&["z", "x"])]);

        assert_eq!(dict.first_match(&"x"), Some(0));
        assert_eq!(dict.first_match(&"y"), Some(0));
        assert_eq!(dict.first_match(&"z"), Some(2));
        assert_eq!(dict.first_match(&"w"), None);
    }

    #[test]
    fn test_index_matches_linear_scan() {
        let dict = Dictionary::build(vec![
            set(&["c"]),
            set(&["a", "b"]),
            set(&["b", "c", "d"]),
            set(&["e"]),
        ]);

        for item in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(dict.first_match(&item), scan_first_match(&dict, &item));
        }
    }

    #[test]
    fn test_deterministic() {
        let input = vec![set(&["a", "b"]), set(&["c"])];
        assert_eq!(Dictionary::build(input.clone()), Dictionary::build(input));
    }
}

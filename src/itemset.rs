/// A non-empty set of unique items together with its support.
///
/// Members keep first-insertion order; that order is the order in which a
/// code expands during decompression.
#[derive(Debug, Clone, PartialEq)]
pub struct Itemset<T> {
    members: Vec<T>,
    support: f64,
}

impl<T: PartialEq> Itemset<T> {
    /// Creates an itemset, dropping repeated members.
    ///
    /// # Panics
    ///
    /// Panics if `members` yields no items.
    pub fn new<I: IntoIterator<Item = T>>(members: I, support: f64) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for item in members {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        assert!(!unique.is_empty(), "Itemset must have at least one member");

        Self {
            members: unique,
            support,
        }
    }

    /// Returns true if `item` is a member.
    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }
}

impl<T> Itemset<T> {
    /// Members in iteration order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Fraction of transactions containing every member.
    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_order() {
        let set = Itemset::new(vec!["b", "a", "b", "c", "a"], 0.5);
        assert_eq!(set.members(), &["b", "a", "c"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.support(), 0.5);
    }

    #[test]
    fn test_contains() {
        let set = Itemset::new(vec![1, 2], 1.0);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
    }

    #[test]
    #[should_panic(expected = "Itemset must have at least one member")]
    fn test_empty_itemset_panics() {
        let _ = Itemset::<u8>::new(Vec::new(), 0.1);
    }
}

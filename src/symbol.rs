/// One entry of a compressed transaction.
///
/// Items that belong to no dictionary itemset pass through as `Item`; every
/// other item is replaced by the `Code` of the first itemset containing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coded<T> {
    /// An item left unchanged by compression.
    Item(T),

    /// A dictionary code standing in for an item.
    Code(u32),
}

impl<T> Coded<T> {
    /// Returns the code if this entry was substituted.
    pub fn code(&self) -> Option<u32> {
        match self {
            Coded::Code(code) => Some(*code),
            Coded::Item(_) => None,
        }
    }

    /// Returns the item if this entry passed through unchanged.
    pub fn item(&self) -> Option<&T> {
        match self {
            Coded::Item(item) => Some(item),
            Coded::Code(_) => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Coded::Code(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let item: Coded<&str> = Coded::Item("milk");
        let code: Coded<&str> = Coded::Code(3);

        assert_eq!(item.item(), Some(&"milk"));
        assert_eq!(item.code(), None);
        assert!(!item.is_code());

        assert_eq!(code.code(), Some(3));
        assert_eq!(code.item(), None);
        assert!(code.is_code());
    }
}

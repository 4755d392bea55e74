/// Sequential code allocator for dictionary entries.
///
/// Codes are handed out as `0, 1, 2, ...` and are never reused; a dictionary
/// is immutable once built, so nothing is ever freed.
#[derive(Debug, Default)]
pub(crate) struct CodeGenerator {
    next: u32,
}

impl CodeGenerator {
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the next unused code.
    pub(crate) fn get(&mut self) -> u32 {
        let code = self.next;
        self.next = self
            .next
            .checked_add(1)
            .expect("Dictionary code space exhausted");
        code
    }

    /// Number of codes allocated so far.
    pub(crate) fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let mut gen = CodeGenerator::new();
        assert_eq!(gen.get(), 0);
        assert_eq!(gen.get(), 1);
        assert_eq!(gen.get(), 2);
        assert_eq!(gen.allocated(), 3);
    }

    #[test]
    #[should_panic(expected = "Dictionary code space exhausted")]
    fn test_exhaustion() {
        let mut gen = CodeGenerator { next: u32::MAX };
        gen.get();
    }
}

//! Synthetic transaction generator for load-testing the pipeline.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for [`DatasetGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub num_transactions: usize,
    /// Size of the item vocabulary
    pub num_items: usize,
    /// Inclusive lower bound on transaction length
    pub min_items_per_transaction: usize,
    /// Inclusive upper bound on transaction length
    pub max_items_per_transaction: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(
        num_transactions: usize,
        num_items: usize,
        min_items_per_transaction: usize,
        max_items_per_transaction: usize,
    ) -> Self {
        Self {
            num_transactions,
            num_items,
            min_items_per_transaction,
            max_items_per_transaction,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.min_items_per_transaction > self.max_items_per_transaction {
            return Err(Error::GeneratorConfig(format!(
                "min_items_per_transaction ({}) exceeds max_items_per_transaction ({})",
                self.min_items_per_transaction, self.max_items_per_transaction
            )));
        }
        if self.num_items == 0 && self.max_items_per_transaction > 0 {
            return Err(Error::GeneratorConfig(
                "num_items must be positive when transactions may be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(10_000, 100, 1, 10)
    }
}

/// Produces random transactions over a fixed vocabulary.
///
/// # Example
///
/// ```
/// use itemset_dict::{DatasetGenerator, GeneratorConfig};
///
/// let config = GeneratorConfig::new(100, 5, 1, 3).with_seed(7);
/// let mut gen = DatasetGenerator::new(config).unwrap();
/// let data = gen.generate();
///
/// assert_eq!(data.len(), 100);
/// assert!(data.iter().all(|t| (1..=3).contains(&t.len())));
/// ```
#[derive(Debug)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
    vocabulary: Vec<String>,
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let vocabulary = (0..config.num_items).map(|i| format!("item_{i}")).collect();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            vocabulary,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The fixed item vocabulary, `item_0 .. item_{n-1}`.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Draws a single transaction.
    pub fn next_transaction(&mut self) -> Vec<String> {
        let len = self.rng.gen_range(
            self.config.min_items_per_transaction..=self.config.max_items_per_transaction,
        );
        (0..len)
            .map(|_| {
                let idx = self.rng.gen_range(0..self.vocabulary.len());
                self.vocabulary[idx].clone()
            })
            .collect()
    }

    /// Lazily yields `num_transactions` transactions.
    pub fn iter(&mut self) -> impl Iterator<Item = Vec<String>> + '_ {
        let n = self.config.num_transactions;
        (0..n).map(move |_| self.next_transaction())
    }

    /// Generates the full dataset.
    pub fn generate(&mut self) -> Vec<Vec<String>> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let config = GeneratorConfig::new(100, 5, 1, 3).with_seed(42);
        let mut gen = DatasetGenerator::new(config).unwrap();
        let vocab = gen.vocabulary().to_vec();
        let data = gen.generate();

        assert_eq!(vocab.len(), 5);
        assert_eq!(data.len(), 100);
        for t in &data {
            assert!((1..=3).contains(&t.len()), "length {} out of range", t.len());
            assert!(t.iter().all(|item| vocab.contains(item)));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = GeneratorConfig::new(50, 20, 0, 8).with_seed(1234);
        let a = DatasetGenerator::new(config.clone()).unwrap().generate();
        let b = DatasetGenerator::new(config).unwrap().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_length() {
        let config = GeneratorConfig::new(10, 3, 4, 4).with_seed(0);
        let data = DatasetGenerator::new(config).unwrap().generate();
        assert!(data.iter().all(|t| t.len() == 4));
    }

    #[test]
    fn test_invalid_config() {
        let inverted = GeneratorConfig::new(10, 3, 5, 2);
        assert!(matches!(
            DatasetGenerator::new(inverted),
            Err(Error::GeneratorConfig(_))
        ));

        let no_vocab = GeneratorConfig::new(10, 0, 1, 2);
        assert!(matches!(
            DatasetGenerator::new(no_vocab),
            Err(Error::GeneratorConfig(_))
        ));

        let empty_ok = GeneratorConfig::new(3, 0, 0, 0);
        let data = DatasetGenerator::new(empty_ok).unwrap().generate();
        assert_eq!(data, vec![Vec::<String>::new(); 3]);
    }
}

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::symbol::Coded;

/// Size accounting for one compression run.
///
/// Can be filled in one shot with [`CompressionStats::from_dataset`] or
/// accumulated transaction by transaction with [`CompressionStats::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Total items across all original transactions
    pub original_size: usize,
    /// Total entries across all compressed transactions
    pub compressed_size: usize,
    /// Number of dictionary entries
    pub dictionary_size: usize,
    /// Number of transactions recorded
    pub num_transactions: usize,
}

impl CompressionStats {
    /// Starts an empty tally for a dictionary of `dictionary_size` entries.
    pub fn new(dictionary_size: usize) -> Self {
        Self {
            dictionary_size,
            ..Self::default()
        }
    }

    /// Computes stats for a whole dataset and its compressed form.
    pub fn from_dataset<T, O, C>(original: &[O], compressed: &[C], dict: &Dictionary<T>) -> Self
    where
        O: AsRef<[T]>,
        C: AsRef<[Coded<T>]>,
    {
        Self {
            original_size: original.iter().map(|t| t.as_ref().len()).sum(),
            compressed_size: compressed.iter().map(|t| t.as_ref().len()).sum(),
            dictionary_size: dict.len(),
            num_transactions: original.len(),
        }
    }

    /// Adds one transaction and its compressed form to the tally.
    pub fn record<T>(&mut self, original: &[T], compressed: &[Coded<T>]) {
        self.original_size += original.len();
        self.compressed_size += compressed.len();
        self.num_transactions += 1;
    }

    /// Compressed size including dictionary overhead.
    pub fn total_compressed_size(&self) -> usize {
        self.compressed_size + self.dictionary_size
    }

    /// Returns `original_size / (compressed_size + dictionary_size)`.
    pub fn ratio(&self) -> Result<f64> {
        compression_ratio(self.original_size, self.compressed_size, self.dictionary_size)
    }
}

/// Ratio of original size to compressed size plus dictionary overhead.
///
/// Fails with [`Error::Division`] when the denominator is zero.
pub fn compression_ratio(
    original_size: usize,
    compressed_size: usize,
    dictionary_size: usize,
) -> Result<f64> {
    let denominator = compressed_size + dictionary_size;
    if denominator == 0 {
        return Err(Error::Division);
    }
    Ok(original_size as f64 / denominator as f64)
}

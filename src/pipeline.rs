//! End-to-end run: mine, build the dictionary, compress, decompress, measure.

use crate::codec::Codec;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::miner::{validate_min_support, Apriori, PatternMiner};
use crate::stats::CompressionStats;
use crate::symbol::Coded;
use std::hash::Hash;
use tracing::{debug, info};

/// Settings for a [`Pipeline`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Minimum support passed to the miner, in `(0, 1]`
    pub min_support: f64,
    /// Compression worker threads; `1` keeps everything on the caller's thread
    pub workers: usize,
}

impl PipelineConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            workers: 1,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// Everything produced by one [`Pipeline::run`].
#[derive(Debug, Clone)]
pub struct PipelineReport<T> {
    pub dictionary: Dictionary<T>,
    pub compressed: Vec<Vec<Coded<T>>>,
    pub decompressed: Vec<Vec<T>>,
    pub stats: CompressionStats,
}

impl<T> PipelineReport<T> {
    /// Compression ratio including dictionary overhead.
    pub fn ratio(&self) -> Result<f64> {
        self.stats.ratio()
    }
}

/// Runs the stages in order with a pluggable miner.
///
/// # Example
///
/// ```
/// use itemset_dict::{Pipeline, PipelineConfig};
///
/// let data = vec![vec!["a", "b"], vec!["a", "b"], vec!["a", "c"]];
/// let report = Pipeline::new(PipelineConfig::new(0.6)).run(&data).unwrap();
///
/// // {a}, {b} and {a, b} are frequent; {c} is not.
/// assert_eq!(report.dictionary.len(), 3);
/// assert_eq!(report.stats.original_size, 6);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<M = Apriori> {
    miner: M,
    config: PipelineConfig,
}

impl Pipeline<Apriori> {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_miner(Apriori::new(), config)
    }
}

impl<M> Pipeline<M> {
    pub fn with_miner(miner: M, config: PipelineConfig) -> Self {
        Self { miner, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Mines the transactions and builds the dictionary.
    pub fn build_dictionary<T>(&self, transactions: &[Vec<T>]) -> Result<Dictionary<T>>
    where
        T: Hash + Eq + Clone,
        M: PatternMiner<T>,
    {
        validate_min_support(self.config.min_support)?;
        let itemsets = self.miner.mine(transactions, self.config.min_support)?;
        Ok(Dictionary::build(itemsets))
    }

    /// Runs every stage over a fully materialized dataset.
    pub fn run<T>(&self, transactions: &[Vec<T>]) -> Result<PipelineReport<T>>
    where
        T: Hash + Eq + Clone + Send + Sync,
        M: PatternMiner<T>,
    {
        let dictionary = self.build_dictionary(transactions)?;
        debug!(entries = dictionary.len(), "dictionary ready");

        let codec = Codec::new(&dictionary);
        let compressed = codec.compress_parallel(transactions, self.config.workers);
        let decompressed = codec.decompress(&compressed)?;
        let stats = CompressionStats::from_dataset(transactions, &compressed, &dictionary);

        info!(
            transactions = stats.num_transactions,
            original_size = stats.original_size,
            compressed_size = stats.compressed_size,
            dictionary_size = stats.dictionary_size,
            "pipeline finished"
        );

        Ok(PipelineReport {
            dictionary,
            compressed,
            decompressed,
            stats,
        })
    }

    /// Mines `transactions`, then compresses `stream` one transaction at a
    /// time without keeping the compressed output.
    ///
    /// The dictionary still needs a full mining pass; only coding streams.
    pub fn measure_streaming<T, I>(
        &self,
        transactions: &[Vec<T>],
        stream: I,
    ) -> Result<(Dictionary<T>, CompressionStats)>
    where
        T: Hash + Eq + Clone,
        M: PatternMiner<T>,
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        let dictionary = self.build_dictionary(transactions)?;
        let codec = Codec::new(&dictionary);
        let mut stats = CompressionStats::new(dictionary.len());

        for transaction in stream {
            let original = transaction.as_ref();
            let compressed = codec.compress_transaction(original);
            stats.record(original, &compressed);
        }

        Ok((dictionary, stats))
    }
}

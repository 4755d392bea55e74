//! # itemset-dict - Frequent-Itemset Dictionary Compression
//!
//! Builds a code dictionary from frequent itemsets mined out of transactional
//! data, substitutes items with integer codes, and expands codes back.
//!
//! Two rules govern the codec:
//! 1. **First match wins**: an item is replaced by the code of the earliest
//!    dictionary entry whose itemset contains it.
//! 2. **Codes expand to whole itemsets**: decompression emits every member of
//!    the coded itemset, so an item coded via `{x, y}` comes back as `x, y`.
//!
//! Compression followed by decompression is therefore only lossless for
//! items coded through singleton itemsets.
//!
//! ## Example
//!
//! ```
//! use itemset_dict::{Apriori, Codec, Dictionary, PatternMiner};
//!
//! let data = vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "eggs"],
//!     vec!["bread", "jam"],
//! ];
//!
//! let itemsets = Apriori::new().mine(&data, 0.6).unwrap();
//! let dict = Dictionary::build(itemsets);
//! let codec = Codec::new(&dict);
//!
//! let compressed = codec.compress(&data);
//! let stats = itemset_dict::CompressionStats::from_dataset(&data, &compressed, &dict);
//! println!("ratio: {:.3}", stats.ratio().unwrap());
//! ```

mod codec;
mod dictionary;
mod error;
mod generator;
mod id_gen;
mod itemset;
mod miner;
pub mod parse;
mod pipeline;
mod stats;
mod symbol;


pub use codec::{Codec, CompressIter, DecompressIter};
pub use dictionary::{DictEntry, Dictionary};
pub use error::{Error, Result};
pub use generator::{DatasetGenerator, GeneratorConfig};
pub use itemset::Itemset;
pub use miner::{validate_min_support, Apriori, PatternMiner};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport};
pub use stats::{compression_ratio, CompressionStats};
pub use symbol::Coded;

//! Frequent itemset mining.
//!
//! The rest of the crate only depends on [`PatternMiner`]; [`Apriori`] is the
//! bundled implementation.

use crate::error::{Error, Result};
use crate::itemset::Itemset;
use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use std::hash::Hash;
use tracing::{debug, trace};

/// Discovers frequent itemsets in a set of transactions.
///
/// Implementations must return every itemset with support `>= min_support`
/// in a deterministic order; that order becomes dictionary code order.
pub trait PatternMiner<T> {
    fn mine(&self, transactions: &[Vec<T>], min_support: f64) -> Result<Vec<Itemset<T>>>;
}

/// Rejects a `min_support` outside `(0, 1]`.
pub fn validate_min_support(min_support: f64) -> Result<()> {
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(Error::MiningParameter { min_support })
    }
}

/// Level-wise Apriori search.
///
/// Items are ranked by first appearance in the data. Output is ordered by
/// itemset length, then lexicographically by member rank; members of each
/// itemset are listed in rank order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apriori {
    /// Largest itemset size to search for; `None` means unbounded
    pub max_len: Option<usize>,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl<T: Hash + Eq + Clone> PatternMiner<T> for Apriori {
    fn mine(&self, transactions: &[Vec<T>], min_support: f64) -> Result<Vec<Itemset<T>>> {
        validate_min_support(min_support)?;

        if transactions.is_empty() {
            return Ok(Vec::new());
        }

        let (items, encoded) = encode(transactions);
        let total = transactions.len() as f64;
        let is_frequent = |count: usize| count as f64 / total >= min_support;
        let max_len = self.max_len.unwrap_or(usize::MAX);

        let mut result: Vec<Itemset<T>> = Vec::new();
        let mut emit = |level: &[(Vec<u32>, usize)]| {
            for (ranks, count) in level {
                let members = ranks.iter().map(|&r| items[r as usize].clone());
                result.push(Itemset::new(members, *count as f64 / total));
            }
        };

        // Level 1
        let mut singles = vec![0usize; items.len()];
        for t in &encoded {
            for &r in t {
                singles[r as usize] += 1;
            }
        }
        let mut level: Vec<(Vec<u32>, usize)> = singles
            .iter()
            .enumerate()
            .filter(|&(_, &count)| is_frequent(count))
            .map(|(r, &count)| (vec![r as u32], count))
            .collect();

        let mut k = 1;
        while !level.is_empty() && k <= max_len {
            trace!(k, frequent = level.len(), "apriori level");
            emit(&level);

            if k == max_len {
                break;
            }

            let candidates = generate_candidates(&level);
            level = candidates
                .into_iter()
                .filter_map(|candidate| {
                    let count = encoded
                        .iter()
                        .filter(|t| is_subset(&candidate, t))
                        .count();
                    is_frequent(count).then_some((candidate, count))
                })
                .collect();
            k += 1;
        }

        debug!(
            transactions = transactions.len(),
            min_support,
            itemsets = result.len(),
            "mined frequent itemsets"
        );

        Ok(result)
    }
}

/// Ranks items by first appearance and turns each transaction into a sorted,
/// duplicate-free rank list.
fn encode<T: Hash + Eq + Clone>(transactions: &[Vec<T>]) -> (Vec<T>, Vec<Vec<u32>>) {
    let mut ranks: HashMap<T, u32> = HashMap::default();
    let mut items: Vec<T> = Vec::new();

    let encoded = transactions
        .iter()
        .map(|t| {
            let mut row: Vec<u32> = t
                .iter()
                .map(|item| {
                    *ranks.entry(item.clone()).or_insert_with(|| {
                        items.push(item.clone());
                        (items.len() - 1) as u32
                    })
                })
                .collect();
            row.sort_unstable();
            row.dedup();
            row
        })
        .collect();

    (items, encoded)
}

/// Joins frequent (k-1)-itemsets that share a (k-2)-prefix and prunes any
/// candidate with an infrequent (k-1)-subset. `level` must be sorted.
fn generate_candidates(level: &[(Vec<u32>, usize)]) -> Vec<Vec<u32>> {
    let frequent: HashSet<&[u32]> = level.iter().map(|(s, _)| s.as_slice()).collect();
    let mut candidates = Vec::new();

    for (i, (a, _)) in level.iter().enumerate() {
        let prefix = &a[..a.len() - 1];
        for (b, _) in &level[i + 1..] {
            if &b[..b.len() - 1] != prefix {
                break;
            }
            let mut candidate = a.clone();
            candidate.push(b[b.len() - 1]);

            let all_subsets_frequent = (0..candidate.len()).all(|skip| {
                let subset: Vec<u32> = candidate
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != skip)
                    .map(|(_, &r)| r)
                    .collect();
                frequent.contains(subset.as_slice())
            });
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Both slices must be sorted ascending.
fn is_subset(needle: &[u32], haystack: &[u32]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

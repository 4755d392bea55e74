//! Item ↔ code substitution.
//!
//! Compression replaces each item independently with the code of the first
//! dictionary itemset that contains it. Decompression expands a code into
//! every member of its itemset. The two are not inverses: an item coded via
//! a multi-member itemset comes back as the whole itemset.

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::symbol::Coded;
use std::hash::Hash;
use std::thread;

/// Compressor / decompressor bound to one dictionary.
///
/// # Example
///
/// ```
/// use itemset_dict::{Codec, Coded, Dictionary, Itemset};
///
/// let dict = Dictionary::build(vec![Itemset::new(vec!["a", "b"], 0.5)]);
/// let codec = Codec::new(&dict);
///
/// let compressed = codec.compress_transaction(&["a", "c"]);
/// assert_eq!(compressed, vec![Coded::Code(0), Coded::Item("c")]);
///
/// // The code expands to the full itemset, not the single original item.
/// let expanded = codec.decompress_transaction(&compressed).unwrap();
/// assert_eq!(expanded, vec!["a", "b", "c"]);
/// ```
#[derive(Debug)]
pub struct Codec<'d, T> {
    dict: &'d Dictionary<T>,
}

// Manual impls: deriving would require `T: Clone`.
impl<T> Clone for Codec<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Codec<'_, T> {}

impl<'d, T: Hash + Eq + Clone> Codec<'d, T> {
    pub fn new(dict: &'d Dictionary<T>) -> Self {
        Self { dict }
    }

    pub fn dictionary(&self) -> &'d Dictionary<T> {
        self.dict
    }

    /// Compresses one transaction, preserving item order and length.
    pub fn compress_transaction(&self, transaction: &[T]) -> Vec<Coded<T>> {
        transaction
            .iter()
            .map(|item| match self.dict.first_match(item) {
                Some(code) => Coded::Code(code),
                None => Coded::Item(item.clone()),
            })
            .collect()
    }

    /// Compresses every transaction of a dataset.
    pub fn compress<Tr: AsRef<[T]>>(&self, transactions: &[Tr]) -> Vec<Vec<Coded<T>>> {
        transactions
            .iter()
            .map(|t| self.compress_transaction(t.as_ref()))
            .collect()
    }

    /// Lazily compresses transactions one at a time.
    pub fn compress_iter<I>(&self, transactions: I) -> CompressIter<'d, T, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        CompressIter {
            codec: *self,
            inner: transactions.into_iter(),
        }
    }

    /// Expands one compressed transaction.
    ///
    /// Each code is replaced by all members of its itemset, in the itemset's
    /// own order. Fails with [`Error::UnknownCode`] for a code the dictionary
    /// never assigned.
    pub fn decompress_transaction(&self, compressed: &[Coded<T>]) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(compressed.len());
        for entry in compressed {
            match entry {
                Coded::Item(item) => out.push(item.clone()),
                Coded::Code(code) => {
                    let dict_entry = self.dict.get(*code).ok_or(Error::UnknownCode(*code))?;
                    out.extend(dict_entry.itemset().iter().cloned());
                }
            }
        }
        Ok(out)
    }

    /// Expands every compressed transaction of a dataset.
    pub fn decompress<C: AsRef<[Coded<T>]>>(&self, compressed: &[C]) -> Result<Vec<Vec<T>>> {
        compressed
            .iter()
            .map(|c| self.decompress_transaction(c.as_ref()))
            .collect()
    }

    /// Lazily expands compressed transactions one at a time.
    pub fn decompress_iter<I>(&self, compressed: I) -> DecompressIter<'d, T, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<[Coded<T>]>,
    {
        DecompressIter {
            codec: *self,
            inner: compressed.into_iter(),
        }
    }
}

impl<'d, T: Hash + Eq + Clone + Send + Sync> Codec<'d, T> {
    /// Compresses a dataset on up to `workers` scoped threads.
    ///
    /// Each worker reads the shared dictionary and compresses a contiguous
    /// chunk; output order matches input order.
    pub fn compress_parallel<Tr>(&self, transactions: &[Tr], workers: usize) -> Vec<Vec<Coded<T>>>
    where
        Tr: AsRef<[T]> + Sync,
    {
        let workers = workers.max(1);
        if workers == 1 || transactions.len() < 2 {
            return self.compress(transactions);
        }

        let chunk_size = transactions.len().div_ceil(workers);
        let codec = *self;

        thread::scope(|scope| {
            let handles: Vec<_> = transactions
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || codec.compress(chunk)))
                .collect();

            let mut out = Vec::with_capacity(transactions.len());
            for handle in handles {
                match handle.join() {
                    Ok(part) => out.extend(part),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            out
        })
    }
}

/// Iterator returned by [`Codec::compress_iter`].
pub struct CompressIter<'d, T, I> {
    codec: Codec<'d, T>,
    inner: I,
}

impl<'d, T, I> Iterator for CompressIter<'d, T, I>
where
    T: Hash + Eq + Clone,
    I: Iterator,
    I::Item: AsRef<[T]>,
{
    type Item = Vec<Coded<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let transaction = self.inner.next()?;
        Some(self.codec.compress_transaction(transaction.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator returned by [`Codec::decompress_iter`].
pub struct DecompressIter<'d, T, I> {
    codec: Codec<'d, T>,
    inner: I,
}

impl<'d, T, I> Iterator for DecompressIter<'d, T, I>
where
    T: Hash + Eq + Clone,
    I: Iterator,
    I::Item: AsRef<[Coded<T>]>,
{
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let compressed = self.inner.next()?;
        Some(self.codec.decompress_transaction(compressed.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

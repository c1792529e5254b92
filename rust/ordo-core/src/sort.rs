//! Sorting strategies.
//!
//! [`ExchangeSort`] and [`HeapSort`] both satisfy the [`Sorter`] contract:
//! the caller's sequence is reordered in place into non-decreasing order,
//! keeping its length and multiset of elements. Neither strategy is stable.
//!
//! Elements only need `PartialOrd`. Before anything moves, the sequence is
//! checked for elements that refuse to compare (a NaN float, for instance)
//! and rejected with [`SortError::InvalidInput`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::{debug, trace};

use crate::error::SortError;

/// A sorting strategy.
pub trait Sorter {
    /// Sort `sequence` in place and hand back the same storage as a slice.
    fn sort<'a, T: PartialOrd>(&self, sequence: &'a mut Vec<T>) -> Result<&'a mut [T], SortError>;
}

/// Reject sequences containing an element that cannot be compared with
/// itself or with the first element.
fn ensure_comparable<T: PartialOrd>(sequence: &[T]) -> Result<(), SortError> {
    let Some(first) = sequence.first() else {
        return Ok(());
    };
    for (index, item) in sequence.iter().enumerate() {
        if item.partial_cmp(item).is_none() || item.partial_cmp(first).is_none() {
            return Err(SortError::invalid(format!(
                "element at index {index} is not comparable with the rest of the sequence"
            )));
        }
    }
    Ok(())
}

// ── Exchange sort ───────────────────────────────────────────────────

/// Counters collected by [`ExchangeSort::sort_counting`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Classic bubble sort.
///
/// Always runs `len - 1` passes; pass `i` scans adjacent pairs up to
/// `len - 2 - i` and swaps any pair that is out of order. There is no
/// early exit on an already-sorted sequence, so the comparison count is
/// exactly `n(n-1)/2` for every input of length `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeSort;

impl ExchangeSort {
    /// Sort `sequence` and report how many comparisons and swaps it took.
    pub fn sort_counting<T: PartialOrd>(&self, sequence: &mut [T]) -> Result<SortStats, SortError> {
        ensure_comparable(sequence)?;

        let len = sequence.len();
        let mut stats = SortStats::default();
        for pass in 0..len.saturating_sub(1) {
            for j in 0..len - 1 - pass {
                stats.comparisons += 1;
                if sequence[j] > sequence[j + 1] {
                    sequence.swap(j, j + 1);
                    stats.swaps += 1;
                }
            }
            // Suffix [len - 1 - pass..] is now final.
            trace!(pass, settled = pass + 1, "exchange pass complete");
        }

        debug!(
            len,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "exchange sort finished"
        );
        Ok(stats)
    }
}

impl Sorter for ExchangeSort {
    fn sort<'a, T: PartialOrd>(
        &self,
        sequence: &'a mut Vec<T>,
    ) -> Result<&'a mut [T], SortError> {
        self.sort_counting(sequence)?;
        Ok(sequence.as_mut_slice())
    }
}

// ── Heap sort ───────────────────────────────────────────────────────

/// Orders the wrapped value so that `BinaryHeap` pops the smallest first.
/// Incomparable pairs fold into `Equal`.
struct MinFirst<T>(T);

impl<T: PartialOrd> PartialEq for MinFirst<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for MinFirst<T> {}

impl<T: PartialOrd> PartialOrd for MinFirst<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for MinFirst<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

/// Priority-queue backed sort.
///
/// Every element is moved into a min-ordered binary heap one insertion at a
/// time, then the minimum is repeatedly extracted and written back into the
/// sequence from index 0 upward. `O(n log n)` time, `O(n)` auxiliary space;
/// the heap is dropped before `sort` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort<'a, T: PartialOrd>(
        &self,
        sequence: &'a mut Vec<T>,
    ) -> Result<&'a mut [T], SortError> {
        ensure_comparable(sequence)?;

        let len = sequence.len();
        let mut queue = BinaryHeap::with_capacity(len);
        for item in sequence.drain(..) {
            queue.push(MinFirst(item));
        }
        while let Some(MinFirst(item)) = queue.pop() {
            sequence.push(item);
        }

        debug!(len, "heap sort finished");
        Ok(sequence.as_mut_slice())
    }
}

// ── Strategy selection ──────────────────────────────────────────────

/// Runtime choice between the sorting strategies.
///
/// Parses from and prints as `exchange` / `heap`, which is also the form
/// used in configuration files.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortStrategy {
    Exchange,
    #[default]
    Heap,
}

impl Sorter for SortStrategy {
    fn sort<'a, T: PartialOrd>(
        &self,
        sequence: &'a mut Vec<T>,
    ) -> Result<&'a mut [T], SortError> {
        debug!(strategy = %self, len = sequence.len(), "sorting");
        match self {
            SortStrategy::Exchange => ExchangeSort.sort(sequence),
            SortStrategy::Heap => HeapSort.sort(sequence),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────

/// Render a sequence as `[a,b,c]`.
///
/// An empty sequence has nothing to show and is rejected with
/// [`SortError::InvalidInput`].
pub fn render<T: Display>(sequence: &[T]) -> Result<String, SortError> {
    if sequence.is_empty() {
        return Err(SortError::invalid("no elements to render"));
    }
    let body = sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(format!("[{body}]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const REFERENCE: [i32; 13] = [8, 34, 64, 51, 33, 22, 44, 55, 88, 1, 0, 2, 2];

    #[test]
    fn test_exchange_sorts_reference_input() {
        let mut values = REFERENCE.to_vec();
        let sorted = ExchangeSort.sort(&mut values).unwrap();
        assert_eq!(sorted, [0, 1, 2, 2, 8, 22, 33, 34, 44, 51, 55, 64, 88]);
    }

    #[test]
    fn test_heap_sorts_reference_input() {
        let mut values = REFERENCE.to_vec();
        let sorted = HeapSort.sort(&mut values).unwrap();
        assert_eq!(sorted, [0, 1, 2, 2, 8, 22, 33, 34, 44, 51, 55, 64, 88]);
    }

    #[test]
    fn test_sort_returns_callers_storage() {
        let mut values = vec![3, 1, 2];
        let ptr = values.as_ptr();
        let sorted = HeapSort.sort(&mut values).unwrap();
        assert_eq!(sorted.as_ptr(), ptr);
    }

    #[test]
    fn test_exchange_runs_every_pass_on_sorted_input() {
        let mut values: Vec<u32> = (0..10).collect();
        let stats = ExchangeSort.sort_counting(&mut values).unwrap();
        assert_eq!(stats.comparisons, 45);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_exchange_swaps_on_reversed_input() {
        let mut values: Vec<u32> = (0..10).rev().collect();
        let stats = ExchangeSort.sort_counting(&mut values).unwrap();
        assert_eq!(stats.comparisons, 45);
        assert_eq!(stats.swaps, 45);
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_and_single() {
        for strategy in SortStrategy::iter() {
            let mut empty: Vec<i64> = Vec::new();
            assert!(strategy.sort(&mut empty).unwrap().is_empty());

            let mut single = vec![42];
            assert_eq!(strategy.sort(&mut single).unwrap(), [42]);
        }
    }

    #[test]
    fn test_nan_rejected_before_mutation() {
        for strategy in SortStrategy::iter() {
            let mut values = vec![3.0, 1.0, f64::NAN, 2.0];
            let err = strategy.sort(&mut values).unwrap_err();
            assert!(matches!(err, SortError::InvalidInput { .. }));
            assert_eq!(values[0], 3.0);
            assert_eq!(values[1], 1.0);
            assert!(values[2].is_nan());
            assert_eq!(values[3], 2.0);
        }
    }

    #[test]
    fn test_nan_first_rejected() {
        let mut values = vec![f64::NAN, 1.0];
        let err = ExchangeSort.sort(&mut values).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: element at index 0 is not comparable with the rest of the sequence"
        );
    }

    #[test]
    fn test_floats_with_infinities() {
        let mut values = vec![1.5, f64::INFINITY, -0.5, f64::NEG_INFINITY];
        let sorted = HeapSort.sort(&mut values).unwrap();
        assert_eq!(sorted, [f64::NEG_INFINITY, -0.5, 1.5, f64::INFINITY]);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(SortStrategy::Exchange.to_string(), "exchange");
        assert_eq!("heap".parse::<SortStrategy>().unwrap(), SortStrategy::Heap);
        assert!("quick".parse::<SortStrategy>().is_err());
        assert_eq!(SortStrategy::default(), SortStrategy::Heap);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[1, 2, 3]).unwrap(), "[1,2,3]");
        assert_eq!(render(&["a"]).unwrap(), "[a]");
    }

    #[test]
    fn test_render_empty_fails() {
        let empty: [i32; 0] = [];
        assert!(matches!(
            render(&empty),
            Err(SortError::InvalidInput { .. })
        ));
    }
}

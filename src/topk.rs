// Copyright 2024 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The top-k selector shared by the basic and EASE page builders.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::utils::nan_safe_f32_cmp;

/// A candidate for the top-k set, ordered by score and then by a smaller-index-first tie-break.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Candidate {
    score: f32,
    index: usize,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// A candidate is "greater" if it has a higher score, or, on a tie, a smaller index.
    fn cmp(&self, other: &Self) -> Ordering {
        nan_safe_f32_cmp(&self.score, &other.score).then_with(|| other.index.cmp(&self.index))
    }
}

/// Returns the indices of the top `position_mask_len` items of `scores`, descending by score and
/// tie-broken by ascending original index.
///
/// If `is_sorted` is set the caller promises that `scores` is already sorted descending, in
/// which case this degenerates to `0..min(position_mask_len, scores.len())`. Callers must not
/// set it unless that promise genuinely holds for the current round; see the `is_sorted` note in
/// the basic page builder for why it can become stale mid-page.
pub(crate) fn select_top_k(scores: &[f32], position_mask_len: usize, is_sorted: bool) -> Vec<usize> {
    let len = position_mask_len.min(scores.len());
    if len == 0 {
        return Vec::new();
    }
    if is_sorted {
        return (0..len).collect();
    }

    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(len + 1);
    for (index, &score) in scores.iter().enumerate() {
        heap.push(Reverse(Candidate { score, index }));
        if heap.len() > len {
            heap.pop();
        }
    }

    let mut top = heap.into_iter().map(|Reverse(c)| c).collect::<Vec<_>>();
    top.sort_unstable_by(|a, b| b.cmp(a));
    top.into_iter().map(|c| c.index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_top_k_unsorted() {
        let scores = [0.5, 0.1, 0.3, 0.9, 0.2];
        assert_eq!(select_top_k(&scores, 3, false), [3, 0, 2]);
    }

    #[test]
    fn test_select_top_k_sorted_hint() {
        let scores = [0.9, 0.5, 0.3, 0.1];
        assert_eq!(select_top_k(&scores, 2, true), [0, 1]);
    }

    #[test]
    fn test_select_top_k_ties_break_by_smaller_index() {
        let scores = [0.5, 0.5, 0.5, 0.1];
        assert_eq!(select_top_k(&scores, 2, false), [0, 1]);
    }

    #[test]
    fn test_select_top_k_fewer_items_than_p() {
        let scores = [0.5, 0.1];
        assert_eq!(select_top_k(&scores, 5, false), [0, 1]);
    }

    #[test]
    fn test_select_top_k_p_zero() {
        let scores = [0.5, 0.1];
        assert!(select_top_k(&scores, 0, false).is_empty());
    }

    #[test]
    fn test_select_top_k_empty_scores() {
        assert!(select_top_k(&[], 3, false).is_empty());
    }

    #[test]
    fn test_select_top_k_all_zero() {
        let scores = [0., 0., 0.];
        assert_eq!(select_top_k(&scores, 2, false), [0, 1]);
    }
}

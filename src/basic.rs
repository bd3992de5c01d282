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

//! The basic full-page recommender: greedy row selection with a hard seen-set for novelty.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::{
    collection::{validate_collection, validate_position_mask, Collection},
    error::Error,
    row::row_value,
    topk::select_top_k,
};

/// Assembles a page of up to `num_rows` rows from `collections`.
///
/// Each row picks the collection with the highest position-masked row value among the
/// collections not yet used, emits its top items (truncated to `position_mask.len()` items, or
/// fewer if the collection is smaller), and marks those items as seen so that later rows never
/// repeat them. A collection is used at most once across the page.
///
/// Returns fewer than `num_rows` rows if `collections` is exhausted first; this is not an error.
///
/// # Errors
/// Returns [`Error`] if any collection violates its shape/domain invariants (§3) or if
/// `position_mask` is empty while `num_rows` is greater than zero.
#[instrument(skip(collections, position_mask))]
pub fn recommend(
    collections: &[Collection],
    position_mask: &[f32],
    num_rows: usize,
) -> Result<Vec<(i64, Vec<u32>)>, Error> {
    validate_position_mask(position_mask, num_rows)?;
    for (position, collection) in collections.iter().enumerate() {
        validate_collection(position, collection, None)?;
    }

    let n = collections.len();
    let mut working_scores: Vec<Vec<f32>> =
        collections.iter().map(|collection| collection.scores.clone()).collect();
    let mut sorted_valid: Vec<bool> =
        collections.iter().map(|collection| collection.is_sorted).collect();
    let mut taken = vec![false; n];
    let mut seen: HashSet<u32> = HashSet::new();

    let mut page = Vec::with_capacity(num_rows.min(n));
    for row in 0..num_rows {
        let mut best: Option<(usize, f32, Vec<usize>)> = None;

        for c in 0..n {
            if taken[c] {
                continue;
            }

            let collection = &collections[c];
            for (position, &item) in collection.items.iter().enumerate() {
                if seen.contains(&item) && working_scores[c][position] != 0. {
                    working_scores[c][position] = 0.;
                    sorted_valid[c] = false;
                }
            }

            let top_idx = select_top_k(&working_scores[c], position_mask.len(), sorted_valid[c]);
            let value = row_value(&working_scores[c], position_mask, &top_idx);

            let is_better = best
                .as_ref()
                .map_or(true, |&(_, best_value, _)| value > best_value);
            if is_better {
                best = Some((c, value, top_idx));
            }
        }

        let Some((c, value, top_idx)) = best else {
            break;
        };
        trace!(row, collection = c, row_value = value, "selected collection for row");

        let collection = &collections[c];
        let items: Vec<u32> = top_idx.iter().map(|&idx| collection.items[idx]).collect();
        seen.extend(items.iter().copied());
        taken[c] = true;
        page.push((collection.index, items));
    }

    Ok(page)
}

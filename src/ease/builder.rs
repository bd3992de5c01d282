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

//! The EASE-scored full-page recommender: a stateful builder around a borrowed affinity matrix.

use std::collections::HashSet;

use ndarray::ArrayView2;
use tracing::{instrument, trace};

use super::{matrix::base_scores, penalty::Penalty};
use crate::{
    collection::validate_position_mask,
    config::EaseConfig,
    error::Error,
    row::row_value,
    topk::select_top_k,
};

/// A page builder over a borrowed EASE item-item affinity matrix.
///
/// Construction validates shapes eagerly and stores the matrix by reference, never copying it:
/// for an item universe of size *I* the matrix is `O(I^2)`, commonly hundreds of megabytes.
///
/// Post-construction state is immutable, so a single instance may be shared by many concurrent
/// callers of [`Self::recommend`]; each call allocates its own penalty and working buffers.
pub struct EaseFpr<'m> {
    matrix: ArrayView2<'m, f32>,
    items_in_collections: Vec<Vec<u32>>,
    position_mask: Vec<f32>,
    num_rows: usize,
    config: EaseConfig,
    suppress_history: bool,
}

impl<'m> EaseFpr<'m> {
    /// Builds a page builder with the default [`EaseConfig`] temp penalty and cooling factor.
    ///
    /// # Errors
    /// Returns [`Error`] if `matrix` is not square, if any collection has a duplicate or
    /// out-of-range item id, if `position_mask` is empty while `num_rows` is greater than zero,
    /// or if `temp_penalty`/`cooling_factor` are out of their valid ranges.
    pub fn new(
        matrix: ArrayView2<'m, f32>,
        items_in_collections: Vec<Vec<u32>>,
        position_mask: Vec<f32>,
        num_rows: usize,
        temp_penalty: f32,
        cooling_factor: f32,
    ) -> Result<Self, Error> {
        let config = EaseConfig::default()
            .with_temp_penalty(temp_penalty)?
            .with_cooling_factor(cooling_factor)?;
        Self::with_config(matrix, items_in_collections, position_mask, num_rows, config)
    }

    /// Builds a page builder from a pre-validated [`EaseConfig`].
    ///
    /// # Errors
    /// As [`Self::new`], minus the temp-penalty/cooling-factor checks already enforced by
    /// `config`.
    pub fn with_config(
        matrix: ArrayView2<'m, f32>,
        items_in_collections: Vec<Vec<u32>>,
        position_mask: Vec<f32>,
        num_rows: usize,
        config: EaseConfig,
    ) -> Result<Self, Error> {
        if matrix.nrows() != matrix.ncols() {
            return Err(Error::NonSquareEaseMatrix {
                rows: matrix.nrows(),
                columns: matrix.ncols(),
            });
        }
        validate_position_mask(&position_mask, num_rows)?;
        for (collection, items) in items_in_collections.iter().enumerate() {
            validate_items_in_collection(collection, items, matrix.nrows())?;
        }

        Ok(Self {
            matrix,
            items_in_collections,
            position_mask,
            num_rows,
            config,
            suppress_history: false,
        })
    }

    /// Opts into suppressing items already in the caller's history with an initial penalty bump,
    /// rather than letting them affect scores only.
    #[must_use]
    pub fn with_history_penalty(mut self, suppress_history: bool) -> Self {
        self.suppress_history = suppress_history;
        self
    }

    /// Assembles a page of up to `num_rows` rows given a user `history`.
    ///
    /// Mirrors [`crate::basic::recommend`]'s greedy loop, but collections are scored by a
    /// continuously decaying penalty instead of a hard seen-set, so a collection's items may
    /// recur across rows once their penalty has cooled enough.
    ///
    /// # Errors
    /// Returns [`Error::HistoryItemIdOutOfRange`] if any `history` item id is outside the item
    /// universe the matrix was built for.
    #[instrument(skip(self, history))]
    pub fn recommend(&self, history: &[u32]) -> Result<Vec<(usize, Vec<u32>)>, Error> {
        let universe = self.matrix.nrows();
        for &item in history {
            if item as usize >= universe {
                return Err(Error::HistoryItemIdOutOfRange(item));
            }
        }

        let base = base_scores(self.matrix, history);
        let mut penalty = Penalty::new(universe, self.config.temp_penalty(), self.config.cooling_factor());
        if self.suppress_history {
            penalty.suppress(history);
        }

        let n = self.items_in_collections.len();
        let mut available: Vec<bool> = self
            .items_in_collections
            .iter()
            .map(|items| !items.is_empty())
            .collect();

        let mut page = Vec::with_capacity(self.num_rows.min(n));
        for row in 0..self.num_rows {
            let mut best: Option<(usize, f32, Vec<usize>)> = None;

            for c in 0..n {
                if !available[c] {
                    continue;
                }

                let items = &self.items_in_collections[c];
                let eff: Vec<f32> = items
                    .iter()
                    .map(|&item| penalty.effective_score(item, base[item as usize]))
                    .collect();

                let top_idx = select_top_k(&eff, self.position_mask.len(), false);
                let value = row_value(&eff, &self.position_mask, &top_idx);

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

            let items: Vec<u32> = top_idx.iter().map(|&idx| self.items_in_collections[c][idx]).collect();
            penalty.bump(&items);
            penalty.cool();
            available[c] = false;
            page.push((c, items));
        }

        Ok(page)
    }
}

/// Validates a collection of item ids against the item universe the EASE matrix was built for.
///
/// Unlike [`crate::collection::validate_collection`], an empty collection is legal here: §4.5
/// treats it as permanently unavailable rather than as malformed input.
fn validate_items_in_collection(collection: usize, items: &[u32], universe: usize) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(items.len());
    for &item in items {
        if !seen.insert(item) {
            return Err(Error::DuplicateItemId { collection, item });
        }
        if item as usize >= universe {
            return Err(Error::ItemIdOutOfRange {
                collection,
                item,
                universe,
            });
        }
    }
    Ok(())
}

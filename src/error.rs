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

use displaydoc::Display;
use thiserror::Error;

/// Errors raised eagerly at construction/call boundaries.
///
/// Variants are grouped by the taxonomy of the originating check (shape, domain, argument) but
/// are kept as a single enum since callers match on the failure, not on the group it belongs to.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq)]
pub enum Error {
    /// collection has `{items}` items but `{scores}` scores
    ScoresItemsLengthMismatch { items: usize, scores: usize },
    /// collection `{0}` is empty
    EmptyCollection(usize),
    /// collection `{collection}` has a duplicate item id `{item}`
    DuplicateItemId { collection: usize, item: u32 },
    /// collection `{collection}` has a negative score at position `{position}`
    NegativeScore { collection: usize, position: usize },
    /// collection `{collection}` has a non-finite score at position `{position}`
    NonFiniteScore { collection: usize, position: usize },
    /// position mask is empty but `num_rows` is greater than zero
    EmptyPositionMask,
    /// position mask has a negative weight at position `{0}`
    NegativePositionWeight(usize),
    /// ease matrix is not square, got `{rows}` rows and `{columns}` columns
    NonSquareEaseMatrix { rows: usize, columns: usize },
    /// item id `{item}` in collection `{collection}` is out of range for an item universe of size `{universe}`
    ItemIdOutOfRange {
        collection: usize,
        item: u32,
        universe: usize,
    },
    /// item id `{0}` in history is out of range for the item universe
    HistoryItemIdOutOfRange(u32),
    /// cooling factor `{0}` is outside of the unit interval
    CoolingFactorOutOfRange(f32),
    /// temp penalty `{0}` is negative
    NegativeTempPenalty(f32),
}

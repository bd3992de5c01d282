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

//! The candidate collections a page is assembled from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A bag of scored items eligible to become one row of the page.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Collection {
    /// Stable identifier reported back in the output. Opaque to the core.
    pub index: i64,
    /// Item identifiers, unique within the collection.
    pub items: Vec<u32>,
    /// Scores parallel to `items`, finite and non-negative.
    pub scores: Vec<f32>,
    /// Hint that `scores` is already sorted descending (and `items` permuted accordingly).
    pub is_sorted: bool,
}

impl Collection {
    pub fn new(index: i64, items: Vec<u32>, scores: Vec<f32>, is_sorted: bool) -> Self {
        Self {
            index,
            items,
            scores,
            is_sorted,
        }
    }
}

/// Validates the shape and domain invariants of a single collection.
///
/// `universe` bounds item ids to `[0, universe)` when given; the basic `recommend` entry point
/// has no notion of a global item universe, so it passes `None` and only checks for duplicates
/// and score well-formedness.
pub(crate) fn validate_collection(
    position: usize,
    collection: &Collection,
    universe: Option<usize>,
) -> Result<(), Error> {
    if collection.items.is_empty() {
        return Err(Error::EmptyCollection(position));
    }
    if collection.items.len() != collection.scores.len() {
        return Err(Error::ScoresItemsLengthMismatch {
            items: collection.items.len(),
            scores: collection.scores.len(),
        });
    }

    let mut seen = HashSet::with_capacity(collection.items.len());
    for (idx, (&item, &score)) in collection.items.iter().zip(&collection.scores).enumerate() {
        if !seen.insert(item) {
            return Err(Error::DuplicateItemId {
                collection: position,
                item,
            });
        }
        if !score.is_finite() {
            return Err(Error::NonFiniteScore {
                collection: position,
                position: idx,
            });
        }
        if score < 0. {
            return Err(Error::NegativeScore {
                collection: position,
                position: idx,
            });
        }
        if let Some(universe) = universe {
            if item as usize >= universe {
                return Err(Error::ItemIdOutOfRange {
                    collection: position,
                    item,
                    universe,
                });
            }
        }
    }

    Ok(())
}

/// Validates the position mask: non-empty when rows are requested, weights non-negative.
pub(crate) fn validate_position_mask(mask: &[f32], num_rows: usize) -> Result<(), Error> {
    if num_rows > 0 && mask.is_empty() {
        return Err(Error::EmptyPositionMask);
    }
    for (position, &weight) in mask.iter().enumerate() {
        if weight < 0. {
            return Err(Error::NegativePositionWeight(position));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(items: Vec<u32>, scores: Vec<f32>) -> Collection {
        Collection::new(0, items, scores, false)
    }

    #[test]
    fn test_validate_collection_ok() {
        assert!(validate_collection(0, &collection(vec![1, 4], vec![0.5, 0.1]), None).is_ok());
    }

    #[test]
    fn test_validate_collection_empty() {
        let err = validate_collection(0, &collection(vec![], vec![]), None).unwrap_err();
        assert_eq!(err, Error::EmptyCollection(0));
    }

    #[test]
    fn test_validate_collection_length_mismatch() {
        let err = validate_collection(0, &collection(vec![1, 2], vec![0.1]), None).unwrap_err();
        assert_eq!(
            err,
            Error::ScoresItemsLengthMismatch {
                items: 2,
                scores: 1
            }
        );
    }

    #[test]
    fn test_validate_collection_duplicate_item() {
        let err =
            validate_collection(2, &collection(vec![1, 1], vec![0.1, 0.2]), None).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateItemId {
                collection: 2,
                item: 1
            }
        );
    }

    #[test]
    fn test_validate_collection_negative_score() {
        let err = validate_collection(0, &collection(vec![1], vec![-0.1]), None).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeScore {
                collection: 0,
                position: 0
            }
        );
    }

    #[test]
    fn test_validate_collection_non_finite_score() {
        let err = validate_collection(0, &collection(vec![1], vec![f32::NAN]), None).unwrap_err();
        assert_eq!(
            err,
            Error::NonFiniteScore {
                collection: 0,
                position: 0
            }
        );
    }

    #[test]
    fn test_validate_collection_item_out_of_range() {
        let err =
            validate_collection(0, &collection(vec![5], vec![0.1]), Some(5)).unwrap_err();
        assert_eq!(
            err,
            Error::ItemIdOutOfRange {
                collection: 0,
                item: 5,
                universe: 5
            }
        );
    }

    #[test]
    fn test_validate_position_mask_ok() {
        assert!(validate_position_mask(&[0.8, 0.2], 2).is_ok());
    }

    #[test]
    fn test_validate_position_mask_empty_with_rows() {
        let err = validate_position_mask(&[], 1).unwrap_err();
        assert_eq!(err, Error::EmptyPositionMask);
    }

    #[test]
    fn test_validate_position_mask_empty_no_rows_ok() {
        assert!(validate_position_mask(&[], 0).is_ok());
    }

    #[test]
    fn test_validate_position_mask_negative_weight() {
        let err = validate_position_mask(&[0.8, -0.2], 2).unwrap_err();
        assert_eq!(err, Error::NegativePositionWeight(1));
    }
}

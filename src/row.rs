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

//! The position-weighted aggregation of a top-k selection into a single collection-level score.

/// Computes `sum(scores[idx[k]] * mask[k])` for `k` in `0..idx.len()`.
///
/// `idx` is expected to be the output of [`crate::topk::select_top_k`] for `scores`; mask
/// positions beyond `idx.len()` contribute zero, which falls out naturally since `idx` is never
/// longer than `mask`.
pub(crate) fn row_value(scores: &[f32], mask: &[f32], idx: &[usize]) -> f32 {
    idx.iter()
        .zip(mask)
        .map(|(&index, &weight)| scores[index] * weight)
        .sum()
}

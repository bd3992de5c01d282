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

//! Turns a user history into a per-item preference vector via the EASE item-item matrix.

use ndarray::ArrayView2;

/// Computes `base(j) = sum(matrix[h, j] for h in history)` for every item `j`.
///
/// An empty history yields an all-zero vector of length `matrix.ncols()`.
pub(super) fn base_scores(matrix: ArrayView2<'_, f32>, history: &[u32]) -> Vec<f32> {
    let mut base = vec![0.; matrix.ncols()];
    for &item in history {
        let row = matrix.row(item as usize);
        for (score, weight) in base.iter_mut().zip(row) {
            *score += weight;
        }
    }
    base
}

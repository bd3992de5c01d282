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

//! The decaying per-item suppression vector that drives EASE's soft novelty.

/// Per-item penalty, bumped on emission and cooled once per row.
///
/// Effective score is `base * max(0, 1 - penalty)`: a fresh item (`penalty == 0`) scores at its
/// base value, a just-emitted item (`penalty >= 1`) scores at zero, and everything in between is
/// a linear interpolation that recovers as `cool` is applied across subsequent rows.
pub(super) struct Penalty {
    values: Vec<f32>,
    temp_penalty: f32,
    cooling_factor: f32,
}

impl Penalty {
    pub(super) fn new(len: usize, temp_penalty: f32, cooling_factor: f32) -> Self {
        Self {
            values: vec![0.; len],
            temp_penalty,
            cooling_factor,
        }
    }

    /// Suppresses `items` immediately, bypassing the usual per-emission bump.
    ///
    /// Used to seed the penalty vector from the caller's history before the first row is built.
    pub(super) fn suppress(&mut self, items: &[u32]) {
        for &item in items {
            self.values[item as usize] += self.temp_penalty;
        }
    }

    /// The effective score of `item` given `base`.
    pub(super) fn effective_score(&self, item: u32, base: f32) -> f32 {
        base * (1. - self.values[item as usize]).max(0.)
    }

    /// Bumps the penalty of every emitted item. Call once per row, before [`Self::cool`].
    pub(super) fn bump(&mut self, items: &[u32]) {
        for &item in items {
            self.values[item as usize] += self.temp_penalty;
        }
    }

    /// Decays every item's penalty towards zero. Call once per row, after [`Self::bump`].
    pub(super) fn cool(&mut self) {
        for value in &mut self.values {
            *value *= self.cooling_factor;
        }
    }
}

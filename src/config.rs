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

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The diversity tunables of the EASE page builder.
///
/// Bundles `temp_penalty` and `cooling_factor` behind validated setters, so that callers who
/// build configuration programmatically (rather than passing both values directly to
/// [`EaseFpr::new`](crate::EaseFpr::new)) get the same eager-validation guarantees. Embeddable
/// in a caller's own config file via `serde` the same way `EaseConfig` fields are: this crate
/// never loads a config file itself.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[must_use]
pub struct EaseConfig {
    #[serde(default = "default_temp_penalty")]
    temp_penalty: f32,
    #[serde(default = "default_cooling_factor")]
    cooling_factor: f32,
}

fn default_temp_penalty() -> f32 {
    1.0
}

fn default_cooling_factor() -> f32 {
    0.9
}

impl Default for EaseConfig {
    fn default() -> Self {
        Self {
            temp_penalty: default_temp_penalty(),
            cooling_factor: default_cooling_factor(),
        }
    }
}

impl EaseConfig {
    /// The additive penalty bump an item receives the moment it is shown.
    pub fn temp_penalty(&self) -> f32 {
        self.temp_penalty
    }

    /// Sets the temp penalty.
    ///
    /// # Errors
    /// Fails if `temp_penalty` is negative.
    pub fn with_temp_penalty(mut self, temp_penalty: f32) -> Result<Self, Error> {
        if temp_penalty >= 0. {
            self.temp_penalty = temp_penalty;
            Ok(self)
        } else {
            Err(Error::NegativeTempPenalty(temp_penalty))
        }
    }

    /// The multiplicative decay applied to the penalty vector once per row.
    pub fn cooling_factor(&self) -> f32 {
        self.cooling_factor
    }

    /// Sets the cooling factor.
    ///
    /// # Errors
    /// Fails if `cooling_factor` is outside of the unit interval.
    pub fn with_cooling_factor(mut self, cooling_factor: f32) -> Result<Self, Error> {
        if (0. ..=1.).contains(&cooling_factor) {
            self.cooling_factor = cooling_factor;
            Ok(self)
        } else {
            Err(Error::CoolingFactorOutOfRange(cooling_factor))
        }
    }
}

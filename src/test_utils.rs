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

//! Test-only float comparison helper, kept local rather than as a published macro since this
//! crate's row values are plain `f32` sums, not the nested array/container shapes a shared
//! test-utils crate needs to walk.

/// Asserts two `f32` values are equal within `ulps` units in the last place.
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::test_utils::assert_approx_eq($left, $right, 4)
    };
}

pub(crate) use assert_approx_eq;

pub(crate) fn assert_approx_eq(left: f32, right: f32, ulps: i32) {
    assert!(
        float_cmp::approx_eq!(f32, left, right, ulps = ulps),
        "left {left} is not approximately equal to right {right}"
    );
}

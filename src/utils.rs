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

use std::cmp::Ordering;

/// Allows comparing and sorting f32 even if `NaN` is involved.
///
/// Pretend that f32 has a total ordering. `NaN` is treated as the lowest possible value, similar
/// to what [`f32::max`] does. The contract of this crate forbids `NaN` scores from reaching this
/// function; it exists so that sorting can never panic even if that contract is violated
/// upstream of validation.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn nan_safe_f32_cmp(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, _) => Ordering::Less,
        (_, true) => Ordering::Greater,
        _ => unreachable!("partial_cmp returned None but both numbers are not NaN"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_safe_f32_cmp_regular() {
        assert_eq!(nan_safe_f32_cmp(&1., &2.), Ordering::Less);
        assert_eq!(nan_safe_f32_cmp(&2., &1.), Ordering::Greater);
        assert_eq!(nan_safe_f32_cmp(&1., &1.), Ordering::Equal);
    }

    #[test]
    fn test_nan_safe_f32_cmp_nan() {
        assert_eq!(nan_safe_f32_cmp(&f32::NAN, &1.), Ordering::Less);
        assert_eq!(nan_safe_f32_cmp(&1., &f32::NAN), Ordering::Greater);
        assert_eq!(nan_safe_f32_cmp(&f32::NAN, &f32::NAN), Ordering::Equal);
    }
}

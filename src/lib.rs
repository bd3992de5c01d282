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

//! A row-by-row greedy page builder for full-page recommendations.
//!
//! Two variants share the same selection machinery ([`topk`] and [`row`]):
//!
//! - [`basic::recommend`] builds a page from scored [`Collection`]s with a hard seen-set: once
//!   an item has been shown, it is excluded from every later row.
//! - [`EaseFpr`] scores items from a borrowed EASE item-item affinity matrix applied to a user
//!   history, and enforces diversity with a continuous penalty that decays by a cooling factor
//!   each row instead of excluding items outright.

pub mod basic;
mod collection;
pub mod config;
pub mod error;
mod ease;
mod row;
#[cfg(test)]
mod test_utils;
mod topk;
mod utils;

pub use crate::{
    basic::recommend,
    collection::Collection,
    config::EaseConfig,
    ease::EaseFpr,
    error::Error,
};

// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Core primitives for the currency input-masking engine.
//!
//! This crate has no knowledge of currencies or locales. It provides the low-level pieces the
//! higher layers are built from:
//!
//! - [`digits`]: Unicode-aware decimal digit extraction.
//! - [`string`]: UTF-16 edit ranges and text replacement as delivered by host text fields.
//! - [`formatting`]: Integer digit grouping with arbitrary separators.
//! - [`correctness`]: Argument checks returning `anyhow::Result`.

#![deny(unsafe_code)]

pub mod correctness;
pub mod digits;
pub mod formatting;
pub mod string;

pub use digits::{decimal_digit_value, is_decimal_digit, only_digits};
pub use string::Utf16Range;

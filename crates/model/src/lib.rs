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

//! Domain model for the currency input-masking engine.
//!
//! - [`currency`]: ISO 4217 currencies with locale-dependent symbols.
//! - [`locale`]: Locale identifiers and their currency conventions.
//! - [`types`]: Exact fixed-point scaling of digit strings.
//! - [`formatter`]: The [`Formatter`](formatter::Formatter) capability and its two strategies.
//! - [`config`]: Field settings and the per-field [`Configuration`](config::Configuration).
//! - [`edit`]: Edit requests, results and the value write-back.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![deny(unsafe_code)]

pub mod config;
pub mod currency;
pub mod edit;
pub mod enums;
pub mod formatter;
pub mod locale;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

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

//! Edit processing and field glue for the currency input-masking engine.
//!
//! - [`processor`]: The edit state machine deciding each proposed keystroke.
//! - [`binding`]: The shared bound value and its change handlers.
//! - [`dispatch`]: Scheduling of value write-backs onto the host's UI context.
//! - [`field`]: A headless text-field delegate driving the processor.
//! - [`logging`]: A synchronous `log` implementation with component filters.
//!
//! # Feature flags
//!
//! - `tracing-bridge`: Installs a `tracing` subscriber alongside the logger when requested.

#![deny(unsafe_code)]

pub mod binding;
pub mod dispatch;
pub mod enums;
pub mod field;
pub mod handler;
pub mod logging;
pub mod processor;

pub use binding::ValueBinding;
pub use field::CurrencyField;
pub use processor::EditProcessor;

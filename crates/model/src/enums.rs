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

//! Enumerations for the currency field domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The rule set applied to each proposed edit.
///
/// The two profiles are alternatives and are never merged.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EditProfile {
    /// Exact-decimal rules: any digit count, ceiling enforced, empty text normalizes to zero.
    #[default]
    Decimal = 1,
    /// Classic masked-field rules: 11 digit budget, numeric-only replacements,
    /// protected currency-symbol prefix, and deleting everything is refused.
    Legacy = 2,
}

/// The reason a proposed edit was refused.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum RejectReason {
    /// The replacement contained a character which is not a decimal digit.
    NonNumericReplacement = 1,
    /// The proposed text would exceed the total digit budget.
    DigitBudgetExceeded = 2,
    /// The digit string could not be interpreted as a value.
    Unparsable = 3,
    /// The candidate value is above the configured maximum.
    ExceedsMaximum = 4,
    /// Digits would be placed before or inside the currency symbol prefix.
    InsideSymbolPrefix = 5,
    /// The proposed text is empty.
    EmptyText = 6,
    /// The replacement range does not lie within the current text.
    InvalidRange = 7,
    /// The field is read-only.
    ReadOnly = 8,
}

/// Horizontal alignment attached to formatted display text.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
    Natural,
    Justified,
}

/// Which built-in [`Formatter`](crate::formatter::Formatter) strategy a configuration uses.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatterKind {
    /// Exact-decimal rendering with locale currency conventions.
    #[default]
    Precise,
    /// Pattern-driven rendering through a general-purpose number formatter.
    Fallback,
}

/// Where the currency symbol sits relative to the amount.
#[derive(Copy, Clone, Debug, Display, Hash, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// The style a general-purpose number formatter renders with.
#[derive(Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberStyle {
    /// Plain grouped decimal number.
    Decimal,
    /// Number with a currency symbol per the locale pattern.
    #[default]
    Currency,
}

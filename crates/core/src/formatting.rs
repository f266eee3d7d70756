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

//! Number formatting utilities.

/// How the integer digits of a number are grouped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// No grouping separators.
    None,
    /// Groups of three digits (`1,234,567`).
    #[default]
    Thousands,
    /// A group of three followed by groups of two (`12,34,567`), as used in South Asia.
    Indian,
}

impl Grouping {
    const fn primary(self) -> usize {
        3
    }

    const fn secondary(self) -> usize {
        match self {
            Self::Indian => 2,
            Self::None | Self::Thousands => 3,
        }
    }
}

/// Inserts `sep` between digit groups of the unsigned integer string `int_part`.
///
/// The input must not carry a sign or a fractional part.
///
/// # Examples
///
/// ```
/// use currency_field_core::formatting::{Grouping, group_integer_digits};
///
/// assert_eq!(group_integer_digits("1234567", '.', Grouping::Thousands), "1.234.567");
/// assert_eq!(group_integer_digits("1234567", ',', Grouping::Indian), "12,34,567");
/// ```
#[must_use]
pub fn group_integer_digits(int_part: &str, sep: char, grouping: Grouping) -> String {
    let chars: Vec<char> = int_part.chars().collect();
    let len = chars.len();

    if grouping == Grouping::None || len <= grouping.primary() {
        return int_part.to_string();
    }

    // Separator positions counted from the right
    let mut boundaries = Vec::new();
    let mut pos = grouping.primary();
    while pos < len {
        boundaries.push(len - pos);
        pos += grouping.secondary();
    }

    let mut result = String::with_capacity(int_part.len() + boundaries.len() * sep.len_utf8());
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && boundaries.contains(&i) {
            result.push(sep);
        }
        result.push(*c);
    }

    result
}

/// Joins a grouped integer part and a fractional part with the `decimal` separator.
///
/// An empty `frac_part` yields the integer part alone.
#[must_use]
pub fn join_fraction(int_part: &str, frac_part: &str, decimal: char) -> String {
    if frac_part.is_empty() {
        return int_part.to_string();
    }

    let mut result = String::with_capacity(int_part.len() + frac_part.len() + decimal.len_utf8());
    result.push_str(int_part);
    result.push(decimal);
    result.push_str(frac_part);
    result
}

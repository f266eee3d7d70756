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

//! Decimal digit extraction.
//!
//! Digits are recognized per the Unicode general category `Nd` (decimal number), so text typed
//! with a non-Latin numeral keyboard (e.g. Arabic-Indic `٠١٢`) is handled like ASCII `0-9`.
//! Every `Nd` block is a contiguous run of ten code points starting at its zero.

/// Code points of the digit zero for every `Nd` run, sorted ascending.
const ND_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the numeric value (0-9) of a Unicode decimal digit, or `None` for any other char.
///
/// # Examples
///
/// ```
/// use currency_field_core::decimal_digit_value;
///
/// assert_eq!(decimal_digit_value('7'), Some(7));
/// assert_eq!(decimal_digit_value('٣'), Some(3)); // ARABIC-INDIC DIGIT THREE
/// assert_eq!(decimal_digit_value('$'), None);
/// ```
#[inline]
#[must_use]
pub fn decimal_digit_value(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }

    let cp = c as u32;
    let idx = match ND_ZEROS.binary_search(&cp) {
        Ok(idx) => idx,
        Err(0) => return None,
        Err(idx) => idx - 1,
    };

    let offset = cp - ND_ZEROS[idx];
    (offset < 10).then_some(offset)
}

/// Returns whether `c` is a Unicode decimal digit (general category `Nd`).
#[inline]
#[must_use]
pub fn is_decimal_digit(c: char) -> bool {
    decimal_digit_value(c).is_some()
}

/// Returns the subsequence of `text` made only of decimal digits, preserving their order.
///
/// Currency symbols, separators, whitespace and letters are discarded. Never fails.
///
/// # Examples
///
/// ```
/// use currency_field_core::only_digits;
///
/// assert_eq!(only_digits("R$ 1.234,56"), "123456");
/// assert_eq!(only_digits("abc"), "");
/// ```
#[must_use]
pub fn only_digits(text: &str) -> String {
    text.chars().filter(|c| is_decimal_digit(*c)).collect()
}

/// Returns the number of decimal digits in `text`.
#[must_use]
pub fn count_digits(text: &str) -> usize {
    text.chars().filter(|c| is_decimal_digit(*c)).count()
}

/// Returns whether every char of `text` is a decimal digit.
///
/// The empty string qualifies, so a pure deletion passes a digits-only replacement check.
#[must_use]
pub fn contains_only_digits(text: &str) -> bool {
    text.chars().all(is_decimal_digit)
}

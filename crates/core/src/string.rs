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

//! String manipulation functionality.
//!
//! Host text fields report edit ranges in UTF-16 code units. Rust strings are UTF-8, so every
//! range is mapped to byte offsets before the replacement is applied.

use std::fmt::Display;

/// A replacement range in UTF-16 code units: `[start, start + length)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Range {
    /// Offset of the first replaced code unit.
    pub start: usize,
    /// Number of replaced code units.
    pub length: usize,
}

impl Utf16Range {
    /// Creates a new [`Utf16Range`] instance.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Creates a zero-length range at `offset`, i.e. a plain insertion point.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, 0)
    }

    /// Returns the exclusive end offset, or `None` on overflow.
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        self.start.checked_add(self.length)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for Utf16Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.start, self.length)
    }
}

/// Returns the number of UTF-16 code units needed to encode `s`.
#[must_use]
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Maps a UTF-16 code unit offset to a UTF-8 byte offset in `s`.
///
/// Returns `None` when `offset` is past the end of `s` or falls between the two halves of a
/// surrogate pair.
///
/// # Examples
///
/// ```
/// use currency_field_core::string::utf16_to_byte_offset;
///
/// let s = "a€😀b"; // '€' is one UTF-16 unit, '😀' is two
/// assert_eq!(utf16_to_byte_offset(s, 0), Some(0));
/// assert_eq!(utf16_to_byte_offset(s, 2), Some(4));
/// assert_eq!(utf16_to_byte_offset(s, 3), None); // inside the surrogate pair
/// assert_eq!(utf16_to_byte_offset(s, 4), Some(8));
/// assert_eq!(utf16_to_byte_offset(s, 5), Some(9));
/// assert_eq!(utf16_to_byte_offset(s, 6), None);
/// ```
#[must_use]
pub fn utf16_to_byte_offset(s: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte_idx, c) in s.char_indices() {
        if units == offset {
            return Some(byte_idx);
        }
        if units > offset {
            return None;
        }
        units += c.len_utf16();
    }

    (units == offset).then_some(s.len())
}

/// Replaces the UTF-16 `range` of `s` with `replacement`, returning the new string.
///
/// Returns `None` when the range does not lie on valid boundaries of `s`, mirroring the
/// out-of-bounds failure of platform string replacement without panicking.
///
/// # Examples
///
/// ```
/// use currency_field_core::string::{Utf16Range, replace_utf16_range};
///
/// assert_eq!(
///     replace_utf16_range("R$ 0,00", Utf16Range::caret(7), "1").as_deref(),
///     Some("R$ 0,001")
/// );
/// assert_eq!(
///     replace_utf16_range("R$ 0,12", Utf16Range::new(6, 1), "").as_deref(),
///     Some("R$ 0,1")
/// );
/// assert_eq!(replace_utf16_range("abc", Utf16Range::new(2, 5), ""), None);
/// ```
#[must_use]
pub fn replace_utf16_range(s: &str, range: Utf16Range, replacement: &str) -> Option<String> {
    let start = utf16_to_byte_offset(s, range.start)?;
    let end = utf16_to_byte_offset(s, range.end()?)?;

    let mut result = String::with_capacity(s.len() - (end - start) + replacement.len());
    result.push_str(&s[..start]);
    result.push_str(replacement);
    result.push_str(&s[end..]);
    Some(result)
}

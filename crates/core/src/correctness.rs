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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails. Constructors pair a `new_checked` returning the error with a
//! `new` which panics with [`FAILED`].

use rust_decimal::Decimal;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `s` is not empty and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if `s` is empty or contains a non-ASCII character.
#[inline(always)]
pub fn check_valid_string_ascii<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }

    if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{c}'");
    }

    Ok(())
}

/// Checks the string `s` is exactly `len` ASCII uppercase letters.
///
/// # Errors
///
/// Returns an error if `s` has the wrong length or contains anything but `A`-`Z`.
#[inline(always)]
pub fn check_ascii_uppercase_len<T: AsRef<str>>(s: T, len: usize, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();
    check_valid_string_ascii(s, param)?;

    if s.len() != len || !s.bytes().all(|b| b.is_ascii_uppercase()) {
        anyhow::bail!("invalid '{param}', expected {len} uppercase ASCII letters, was '{s}'");
    }

    Ok(())
}

/// Checks the `u32` value is in range [`l`, `r`] (inclusive).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_in_range_inclusive_u32(value: u32, l: u32, r: u32, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid u32 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the `Decimal` value is non-negative (zero or greater).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_non_negative_decimal(value: Decimal, param: &str) -> anyhow::Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        anyhow::bail!("invalid Decimal for '{param}' not non-negative, was {value}")
    }
    Ok(())
}

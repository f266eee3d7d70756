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

//! Functions for handling fixed-point currency amounts.
//!
//! A masked currency field never holds a fractional keystroke: every amount is a digit string
//! whose last `decimal_places` digits are the fractional part. These helpers scale such digit
//! strings into exact [`Decimal`] values and back into integer minor units without touching
//! binary floating point.

use currency_field_core::{correctness::check_in_range_inclusive_u32, digits::decimal_digit_value};
use rust_decimal::{Decimal, RoundingStrategy};

/// The maximum number of decimal places, bounded by the scale range of [`Decimal`].
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// The default number of decimal places.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// The default maximum value (10^12).
pub const DEFAULT_MAXIMUM_VALUE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// The largest mantissa a [`Decimal`] can hold (2^96 - 1).
const MAX_MANTISSA: u128 = (1 << 96) - 1;

/// Precomputed powers of 10 for minor-unit scaling.
///
/// Index i contains 10^i. Table covers 10^0 through 10^28 (sufficient for
/// [`MAX_DECIMAL_PLACES`]).
pub const POWERS_OF_10: [u128; 29] = {
    let mut table = [1u128; 29];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

const _: () = assert!(
    (MAX_DECIMAL_PLACES as usize) < POWERS_OF_10.len(),
    "MAX_DECIMAL_PLACES exceeds POWERS_OF_10 table size"
);

/// Checks `decimal_places` is within [0, [`MAX_DECIMAL_PLACES`]].
///
/// # Errors
///
/// Returns an error if `decimal_places` exceeds the maximum.
pub fn check_decimal_places(decimal_places: u32) -> anyhow::Result<()> {
    check_in_range_inclusive_u32(
        decimal_places,
        0,
        MAX_DECIMAL_PLACES,
        stringify!(decimal_places),
    )
}

/// Parses a string of decimal digits as an unsigned integer.
///
/// Any Unicode decimal digit is accepted. Returns `None` if a character is not a digit or the
/// integer exceeds the [`Decimal`] mantissa. The empty string parses as zero.
#[must_use]
pub fn parse_digits(digits: &str) -> Option<u128> {
    digits.chars().try_fold(0u128, |acc, c| {
        let digit = decimal_digit_value(c)?;
        let next = acc.checked_mul(10)?.checked_add(u128::from(digit))?;
        (next <= MAX_MANTISSA).then_some(next)
    })
}

/// Interprets `digits` as an integer count of minor units with `decimal_places` fractional
/// digits.
///
/// The result has a scale of exactly `decimal_places`, so `"0012"` at two places is `0.12`.
///
/// # Examples
///
/// ```
/// use currency_field_model::types::fixed::decimal_from_digits;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(decimal_from_digits("0012", 2), Some(dec!(0.12)));
/// assert_eq!(decimal_from_digits("", 2), Some(dec!(0.00)));
/// assert_eq!(decimal_from_digits("12a", 2), None);
/// ```
#[must_use]
pub fn decimal_from_digits(digits: &str, decimal_places: u32) -> Option<Decimal> {
    if decimal_places > MAX_DECIMAL_PLACES {
        return None;
    }

    let mantissa = i128::try_from(parse_digits(digits)?).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, decimal_places).ok()
}

/// Rounds `value` half-to-even to `decimal_places`.
#[must_use]
pub fn round_to_places(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Converts `value` to an integer count of minor units at `decimal_places`.
///
/// The value is rounded half-to-even first. Returns `None` if the places exceed
/// [`MAX_DECIMAL_PLACES`] or the result does not fit in an `i128`.
///
/// # Examples
///
/// ```
/// use currency_field_model::types::fixed::to_minor_units;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_minor_units(dec!(1234.5), 2), Some(123_450));
/// assert_eq!(to_minor_units(dec!(0.125), 2), Some(12));
/// assert_eq!(to_minor_units(dec!(-7), 0), Some(-7));
/// ```
#[must_use]
pub fn to_minor_units(value: Decimal, decimal_places: u32) -> Option<i128> {
    if decimal_places > MAX_DECIMAL_PLACES {
        return None;
    }

    let rounded = round_to_places(value, decimal_places);
    let mantissa = rounded.mantissa();
    let scale = rounded.scale();

    if scale <= decimal_places {
        let factor = i128::try_from(POWERS_OF_10[(decimal_places - scale) as usize]).ok()?;
        mantissa.checked_mul(factor)
    } else {
        // Rounding never leaves a larger scale, but trailing precision is exact either way
        let factor = i128::try_from(POWERS_OF_10[(scale - decimal_places) as usize]).ok()?;
        Some(mantissa / factor)
    }
}

/// Splits an unsigned minor-unit count into its integer and zero-padded fractional digits.
///
/// # Examples
///
/// ```
/// use currency_field_model::types::fixed::split_minor_units;
///
/// assert_eq!(split_minor_units(5, 2), ("0".to_string(), "05".to_string()));
/// assert_eq!(split_minor_units(123_456, 2), ("1234".to_string(), "56".to_string()));
/// assert_eq!(split_minor_units(42, 0), ("42".to_string(), String::new()));
/// ```
#[must_use]
pub fn split_minor_units(minor_units: u128, decimal_places: u32) -> (String, String) {
    if decimal_places == 0 {
        return (minor_units.to_string(), String::new());
    }

    let places = decimal_places.min(MAX_DECIMAL_PLACES) as usize;
    let factor = POWERS_OF_10[places];
    let int_part = (minor_units / factor).to_string();
    let frac_part = format!("{:0width$}", minor_units % factor, width = places);
    (int_part, frac_part)
}

/// Splits the magnitude of `value` into integer and fractional digits at `decimal_places`.
///
/// The value is rounded half-to-even first. Works from the mantissa and scale directly, so any
/// [`Decimal`] renders regardless of how many digits it carries.
///
/// # Examples
///
/// ```
/// use currency_field_model::types::fixed::split_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(split_decimal(dec!(1234.5), 2), ("1234".to_string(), "50".to_string()));
/// assert_eq!(split_decimal(dec!(-0.05), 2), ("0".to_string(), "05".to_string()));
/// assert_eq!(split_decimal(dec!(0.125), 2), ("0".to_string(), "12".to_string()));
/// ```
#[must_use]
pub fn split_decimal(value: Decimal, decimal_places: u32) -> (String, String) {
    let places = decimal_places.min(MAX_DECIMAL_PLACES) as usize;
    let rounded = round_to_places(value, places as u32);
    let scale = rounded.scale() as usize;
    let digits = rounded.mantissa().unsigned_abs().to_string();

    let (int_part, frac_part) = if scale == 0 {
        (digits, String::new())
    } else {
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        (int_part.to_string(), frac_part.to_string())
    };

    (int_part, format!("{frac_part:0<places$}"))
}

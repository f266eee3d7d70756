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

//! A general-purpose, pattern-driven number formatter.
//!
//! Patterns use the CLDR notation: `#` and `0` are digits, `,` marks a grouping boundary, `.`
//! the decimal point and `¤` the currency symbol. Separators in the pattern are placeholders
//! replaced by the locale's own. Fraction digits are set on the formatter and override the
//! pattern.

use derive_builder::Builder;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    currency::Currency,
    enums::NumberStyle,
    locale::Locale,
    types::fixed::{MAX_DECIMAL_PLACES, parse_digits, split_minor_units, to_minor_units},
};

const CURRENCY_SIGN: char = '¤';

/// The affixes and grouping sizes of a parsed number pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPattern {
    pub prefix: String,
    pub suffix: String,
    /// Size of the rightmost integer group, zero when the pattern has no grouping.
    pub primary_grouping: usize,
    /// Size of every further group.
    pub secondary_grouping: usize,
}

impl NumberPattern {
    /// Parses a positive pattern such as `¤ #,##0.00` or `#,##,##0.00 ¤`.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let is_number = |c: char| matches!(c, '#' | '0' | ',' | '.');
        let start = pattern.find(is_number).unwrap_or(pattern.len());
        let end = pattern.rfind(is_number).map_or(start, |i| i + 1);

        let number = &pattern[start..end];
        let integer = number.split('.').next().unwrap_or(number);
        let groups: Vec<&str> = integer.split(',').collect();

        let primary_grouping = match groups.as_slice() {
            [_] | [] => 0,
            [.., last] => last.len(),
        };
        let secondary_grouping = match groups.as_slice() {
            [.., secondary, _] if groups.len() > 2 => secondary.len(),
            _ => primary_grouping,
        };

        Self {
            prefix: pattern[..start].to_string(),
            suffix: pattern[end..].to_string(),
            primary_grouping,
            secondary_grouping,
        }
    }
}

/// Formats numbers with a style, currency, locale, fraction digit bounds and rounding.
#[derive(Clone, Debug, Builder)]
pub struct NumberFormatter {
    #[builder(default)]
    pub style: NumberStyle,
    #[builder(default)]
    pub currency: Currency,
    #[builder(default = "Locale::en_us()")]
    pub locale: Locale,
    #[builder(default = "2")]
    pub minimum_fraction_digits: u32,
    #[builder(default = "2")]
    pub maximum_fraction_digits: u32,
    #[builder(default = "RoundingStrategy::MidpointNearestEven")]
    pub rounding: RoundingStrategy,
}

impl NumberFormatter {
    /// Returns the parsed pattern for the configured locale.
    #[must_use]
    pub fn pattern(&self) -> NumberPattern {
        NumberPattern::parse(self.locale.conventions().currency_pattern)
    }

    /// Reads a digit string as minor units at the maximum fraction digits.
    #[must_use]
    pub fn number_from_digits(&self, digits: &str) -> Option<Decimal> {
        if self.maximum_fraction_digits > MAX_DECIMAL_PLACES {
            return None;
        }

        let minor_units = i128::try_from(parse_digits(digits)?).ok()?;
        Decimal::try_from_i128_with_scale(minor_units, self.maximum_fraction_digits).ok()
    }

    /// Renders `value`, or `None` if it cannot be expressed in integer minor units.
    #[must_use]
    pub fn string(&self, value: Decimal) -> Option<String> {
        let conventions = self.locale.conventions();
        let pattern = self.pattern();

        let max_digits = self.maximum_fraction_digits;
        let rounded = value.round_dp_with_strategy(max_digits, self.rounding);
        let minor_units = to_minor_units(rounded, max_digits)?;

        let (int_digits, mut frac_digits) = split_minor_units(minor_units.unsigned_abs(), max_digits);
        let min_digits = self.minimum_fraction_digits.min(max_digits) as usize;
        while frac_digits.len() > min_digits && frac_digits.ends_with('0') {
            frac_digits.pop();
        }

        let mut number = group(
            &int_digits,
            conventions.grouping_separator,
            pattern.primary_grouping,
            pattern.secondary_grouping,
        );
        if !frac_digits.is_empty() {
            number.push(conventions.decimal_separator);
            number.push_str(&frac_digits);
        }

        let (prefix, suffix) = match self.style {
            NumberStyle::Currency => {
                let symbol = self.currency.symbol_for(&self.locale);
                (
                    pattern.prefix.replace(CURRENCY_SIGN, symbol),
                    pattern.suffix.replace(CURRENCY_SIGN, symbol),
                )
            }
            NumberStyle::Decimal => (
                pattern.prefix.replace(CURRENCY_SIGN, "").trim().to_string(),
                pattern.suffix.replace(CURRENCY_SIGN, "").trim().to_string(),
            ),
        };

        let mut text = String::with_capacity(prefix.len() + number.len() + suffix.len() + 1);
        if minor_units < 0 {
            text.push(conventions.minus_sign);
        }
        text.push_str(&prefix);
        text.push_str(&number);
        text.push_str(&suffix);
        Some(text)
    }
}

fn group(digits: &str, sep: char, primary: usize, secondary: usize) -> String {
    if primary == 0 || digits.len() <= primary {
        return digits.to_string();
    }
    let secondary = if secondary == 0 { primary } else { secondary };

    let (mut rest, tail) = digits.split_at(digits.len() - primary);
    let mut groups = vec![tail];
    while rest.len() > secondary {
        let (head, group) = rest.split_at(rest.len() - secondary);
        groups.push(group);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();

    let mut buf = [0; 4];
    let sep: &str = sep.encode_utf8(&mut buf);
    groups.join(sep)
}

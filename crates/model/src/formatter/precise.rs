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

//! Precision-preserving currency formatter.

use currency_field_core::formatting::{group_integer_digits, join_fraction};
use rust_decimal::Decimal;

use super::{DisplayText, FormatContext, Formatter};
use crate::{
    enums::SymbolPosition,
    types::fixed::{decimal_from_digits, round_to_places, split_decimal},
};

/// Renders exact decimals using the locale's separators, grouping and symbol placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalFormatter {
    context: FormatContext,
}

impl DecimalFormatter {
    /// Creates a new [`DecimalFormatter`] instance.
    #[must_use]
    pub fn new(context: FormatContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn context(&self) -> &FormatContext {
        &self.context
    }

    /// Renders the unsigned amount without a currency symbol, e.g. `1.234,56`.
    #[must_use]
    pub fn format_amount(&self, value: Decimal) -> String {
        let conventions = self.context.locale.conventions();
        let (int_part, frac_part) = split_decimal(value, self.context.decimal_places);

        let grouped = group_integer_digits(
            &int_part,
            conventions.grouping_separator,
            conventions.grouping,
        );
        join_fraction(&grouped, &frac_part, conventions.decimal_separator)
    }

    fn render(&self, value: Decimal) -> String {
        let conventions = self.context.locale.conventions();
        let rounded = round_to_places(value, self.context.decimal_places);
        let amount = self.format_amount(rounded);
        let symbol = self.context.currency.symbol_for(&self.context.locale);
        let spacing = if conventions.symbol_spacing { " " } else { "" };

        let mut text = String::with_capacity(amount.len() + symbol.len() + 2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            text.push(conventions.minus_sign);
        }

        match conventions.symbol_position {
            SymbolPosition::Prefix => {
                text.push_str(symbol);
                text.push_str(spacing);
                text.push_str(&amount);
            }
            SymbolPosition::Suffix => {
                text.push_str(&amount);
                text.push_str(spacing);
                text.push_str(symbol);
            }
        }

        text
    }
}

impl Formatter for DecimalFormatter {
    fn value(&self, digits: &str) -> Option<Decimal> {
        decimal_from_digits(digits, self.context.decimal_places)
    }

    fn formatted(&self, value: Decimal) -> DisplayText {
        let text = if self.context.clears(value) {
            String::new()
        } else {
            self.render(value)
        };

        log::trace!("Formatted {value} as '{text}'");
        DisplayText::new(text, self.context.attributes)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        currency::Currency,
        locale::Locale,
        stubs::{format_context, pt_br_context},
    };

    #[rstest]
    #[case(dec!(0), "R$ 0,00")]
    #[case(dec!(0.01), "R$ 0,01")]
    #[case(dec!(0.12), "R$ 0,12")]
    #[case(dec!(1234.5), "R$ 1.234,50")]
    #[case(dec!(999999999.99), "R$ 999.999.999,99")]
    #[case(dec!(-12.3), "-R$ 12,30")]
    fn test_formatted_pt_br(
        pt_br_context: FormatContext,
        #[case] value: Decimal,
        #[case] expected: &str,
    ) {
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.formatted(value).text, expected);
    }

    #[rstest]
    #[case("en_US", "USD", 2, dec!(1234567.891), "$1,234,567.89")]
    #[case("de_DE", "EUR", 2, dec!(1234.5), "1.234,50 €")]
    #[case("de_DE", "EUR", 2, dec!(-1), "-1,00 €")]
    #[case("fr_FR", "EUR", 2, dec!(1234.5), "1\u{202f}234,50 €")]
    #[case("ja_JP", "JPY", 0, dec!(1234), "¥1,234")]
    #[case("en_IN", "INR", 2, dec!(1234567.5), "₹12,34,567.50")]
    #[case("pt_BR", "USD", 2, dec!(10), "US$ 10,00")]
    #[case("de_CH", "CHF", 2, dec!(1234.5), "CHF 1'234.50")]
    #[case("en_US", "KWD", 3, dec!(1.5), "KWD1.500")]
    fn test_formatted_locales(
        #[case] locale: &str,
        #[case] currency: &str,
        #[case] places: u32,
        #[case] value: Decimal,
        #[case] expected: &str,
    ) {
        let context = format_context(Locale::new(locale), Currency::new(currency), places, false);
        let formatter = DecimalFormatter::new(context);
        assert_eq!(formatter.formatted(value).text, expected);
    }

    #[rstest]
    fn test_formatted_rounds_half_even(pt_br_context: FormatContext) {
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.formatted(dec!(0.125)).text, "R$ 0,12");
        assert_eq!(formatter.formatted(dec!(0.135)).text, "R$ 0,14");
        assert_eq!(formatter.formatted(dec!(-0.001)).text, "R$ 0,00");
    }

    #[rstest]
    fn test_formatted_zero_clear(mut pt_br_context: FormatContext) {
        pt_br_context.allow_clear_field_when_value_is_zero = true;
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.formatted(dec!(0)).text, "");
        assert_eq!(formatter.formatted(dec!(0.00)).text, "");
        assert_eq!(formatter.formatted(dec!(0.01)).text, "R$ 0,01");
    }

    #[rstest]
    fn test_formatted_carries_attributes(pt_br_context: FormatContext) {
        let attributes = pt_br_context.attributes;
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.formatted(dec!(1)).attributes, attributes);
    }

    #[rstest]
    #[case("", dec!(0))]
    #[case("001", dec!(0.01))]
    #[case("0012", dec!(0.12))]
    #[case("٠٠١٢", dec!(0.12))]
    fn test_value(pt_br_context: FormatContext, #[case] digits: &str, #[case] expected: Decimal) {
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.value(digits), Some(expected));
    }

    #[rstest]
    #[case("1a")]
    #[case("R$ 1")]
    fn test_value_rejects_non_digits(pt_br_context: FormatContext, #[case] digits: &str) {
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.value(digits), None);
    }

    #[rstest]
    #[case(dec!(1_000_000_000_000), "R$ 1.000.000.000.000,00000000000000000000")]
    #[case(dec!(123456789012.0000000000000000), "R$ 123.456.789.012,00000000000000000000")]
    #[case(dec!(0.00000000000000000001), "R$ 0,00000000000000000001")]
    fn test_formatted_wide_precision(#[case] value: Decimal, #[case] expected: &str) {
        let context = format_context(Locale::pt_br(), Currency::new("BRL"), 20, false);
        let formatter = DecimalFormatter::new(context);
        assert_eq!(formatter.formatted(value).text, expected);
    }

    #[rstest]
    fn test_formatted_maximum_precision() {
        let context = format_context(Locale::pt_br(), Currency::new("BRL"), 28, false);
        let formatter = DecimalFormatter::new(context);
        let text = formatter.formatted(Decimal::MAX).text;
        assert!(text.starts_with("R$ 79.228.162.514.264.337.593.543.950.335,"));
        assert!(text.ends_with(&"0".repeat(28)));
    }

    #[rstest]
    fn test_format_amount(pt_br_context: FormatContext) {
        let formatter = DecimalFormatter::new(pt_br_context);
        assert_eq!(formatter.format_amount(dec!(1234567.8)), "1.234.567,80");
        assert_eq!(formatter.format_amount(dec!(-5)), "5,00");
    }
}

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

//! Both formatting strategies must render identically and round-trip through digit extraction.

use currency_field_common::processor::EditProcessor;
use currency_field_core::{digits::only_digits, string::Utf16Range};
use currency_field_model::{
    config::{Configuration, FieldSettings},
    edit::EditRequest,
    enums::FormatterKind,
    locale::Locale,
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use ustr::Ustr;

const LOCALES: [&str; 6] = ["pt_BR", "en_US", "de_DE", "fr_FR", "ja_JP", "en_IN"];
const CURRENCIES: [&str; 5] = ["BRL", "USD", "EUR", "JPY", "INR"];

fn values() -> Vec<Decimal> {
    vec![
        dec!(0),
        dec!(0.01),
        dec!(0.12),
        dec!(1.00),
        dec!(12.34),
        dec!(999.99),
        dec!(1000),
        dec!(1234.56),
        dec!(100000.05),
        dec!(1234567.89),
        dec!(999999999.99),
        dec!(123456789012.34),
    ]
}

fn configuration(
    locale: &str,
    currency: &str,
    decimal_places: u32,
    formatter_kind: FormatterKind,
) -> Configuration {
    Configuration::new(FieldSettings {
        currency_code: Ustr::from(currency),
        locale: Locale::new(locale),
        decimal_places,
        maximum_value: Decimal::MAX,
        formatter_kind,
        ..FieldSettings::default()
    })
}

#[rstest]
fn test_strategies_agree_across_locales_and_currencies(
    #[values(0, 2, 3)] decimal_places: u32,
) {
    for locale in LOCALES {
        for currency in CURRENCIES {
            let precise = configuration(locale, currency, decimal_places, FormatterKind::Precise);
            let fallback = configuration(locale, currency, decimal_places, FormatterKind::Fallback);

            for value in values() {
                let expected = precise.formatter().formatted(value);
                let actual = fallback.formatter().formatted(value);
                assert_eq!(
                    expected.text, actual.text,
                    "{locale} {currency} {value} ({decimal_places} places)"
                );
                assert_eq!(expected.attributes, actual.attributes);
            }
        }
    }
}

#[rstest]
fn test_strategies_agree_on_negative_values() {
    for locale in LOCALES {
        let precise = configuration(locale, "USD", 2, FormatterKind::Precise);
        let fallback = configuration(locale, "USD", 2, FormatterKind::Fallback);

        for value in [dec!(-0.01), dec!(-1234.5)] {
            assert_eq!(
                precise.formatter().formatted(value).text,
                fallback.formatter().formatted(value).text,
                "{locale} {value}"
            );
        }
    }
}

#[rstest]
fn test_formatting_round_trips_through_digits(
    #[values(FormatterKind::Precise, FormatterKind::Fallback)] formatter_kind: FormatterKind,
) {
    for locale in LOCALES {
        for currency in CURRENCIES {
            let config = configuration(locale, currency, 2, formatter_kind);
            let formatter = config.formatter();

            for value in values() {
                let text = formatter.formatted(value).text;
                let digits = only_digits(&text);
                assert_eq!(
                    formatter.value(&digits),
                    Some(value),
                    "{locale} {currency} '{text}'"
                );
            }
        }
    }
}

#[rstest]
#[case("pt_BR", "BRL", "R$ 1.234.567,89")]
#[case("en_US", "USD", "$1,234,567.89")]
#[case("de_DE", "EUR", "1.234.567,89 €")]
#[case("fr_FR", "EUR", "1\u{202F}234\u{202F}567,89 €")]
#[case("en_IN", "INR", "₹12,34,567.89")]
fn test_known_renderings(
    #[case] locale: &str,
    #[case] currency: &str,
    #[case] expected: &str,
    #[values(FormatterKind::Precise, FormatterKind::Fallback)] formatter_kind: FormatterKind,
) {
    let config = configuration(locale, currency, 2, formatter_kind);
    assert_eq!(config.formatter().formatted(dec!(1234567.89)).text, expected);
}

#[rstest]
fn test_yen_without_fraction_digits(
    #[values(FormatterKind::Precise, FormatterKind::Fallback)] formatter_kind: FormatterKind,
) {
    let config = configuration("ja_JP", "JPY", 0, formatter_kind);
    let processor = EditProcessor::new(config);

    let request = EditRequest::new("¥1,234", Utf16Range::caret(6), "5");
    let result = processor.evaluate(&request);

    assert_eq!(result.new_value, Some(dec!(12345)));
    assert_eq!(result.new_display_text.as_deref(), Some("¥12,345"));
}

#[rstest]
fn test_processor_results_agree(
    #[values("pt_BR", "en_US", "de_DE", "fr_FR", "ja_JP", "en_IN")] locale: &str,
) {
    let precise = EditProcessor::new(configuration(locale, "BRL", 2, FormatterKind::Precise));
    let fallback = EditProcessor::new(configuration(locale, "BRL", 2, FormatterKind::Fallback));

    let mut text = precise.display_text_for(Decimal::ZERO);
    for key in ["1", "2", "3", "4", "5", "6", "7"] {
        let end = currency_field_core::string::utf16_len(&text);
        let request = EditRequest::new(text.clone(), Utf16Range::caret(end), key);

        let expected = precise.evaluate(&request);
        let actual = fallback.evaluate(&request);
        assert_eq!(expected, actual, "{locale} {request}");

        text = expected.new_display_text.unwrap_or(text);
    }
    assert_eq!(only_digits(&text), "1234567");
}

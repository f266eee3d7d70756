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

//! The edit state machine.
//!
//! An [`EditProcessor`] decides whether a proposed keystroke edit is accepted, and if so computes
//! the new normalized value and display text. Decisions are pure: the only side effect is the
//! single value write-back performed by [`EditProcessor::process`] on acceptance.
//!
//! Two rule profiles are available, selected by [`EditProfile`]:
//!
//! - `Decimal`: extract digits, parse, enforce the maximum value. Deleting everything yields zero.
//! - `Legacy`: numeric-only replacements, an 11 digit budget, a protected currency symbol and
//!   no empty text. The maximum value is not enforced.

use currency_field_core::digits::{contains_only_digits, count_digits, only_digits};
use currency_field_model::{
    config::Configuration,
    edit::{EditRequest, EditResult, ValueSink},
    enums::{EditProfile, RejectReason, SymbolPosition},
};
use log::Level;
use rust_decimal::Decimal;
use ustr::Ustr;

use crate::{enums::LogColor, logging::logger::log};

/// The total digit budget of the legacy profile, matching "999.999.999,99".
pub const LEGACY_TOTAL_DIGITS: usize = 11;

const COMPONENT: &str = "EditProcessor";

/// Evaluates edit requests against one field's configuration.
#[derive(Clone, Debug)]
pub struct EditProcessor {
    config: Configuration,
    component: Ustr,
}

impl EditProcessor {
    /// Creates a new [`EditProcessor`] instance.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            component: Ustr::from(COMPONENT),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Decides the outcome of `request` without side effects.
    #[must_use]
    pub fn evaluate(&self, request: &EditRequest) -> EditResult {
        let outcome = self.decide(request);

        let result = match outcome {
            Ok(value) => EditResult::accept(value, self.display_text_for(value)),
            Err(reason) => EditResult::reject(reason),
        };

        let color = if result.accepted {
            LogColor::Green
        } else {
            LogColor::Yellow
        };
        log(
            Level::Debug,
            color,
            self.component,
            format!("{request} -> {result}"),
        );

        result
    }

    /// Decides the outcome of `request` and, on acceptance, writes the new value to `sink`.
    ///
    /// A rejected edit leaves `sink` untouched.
    pub fn process(&self, request: &EditRequest, sink: &dyn ValueSink) -> EditResult {
        let result = self.evaluate(request);
        if let Some(write) = result.write_back() {
            write.apply(sink);
        }
        result
    }

    /// Returns the display text for `value`, empty when zero-clear applies.
    #[must_use]
    pub fn display_text_for(&self, value: Decimal) -> String {
        if value.is_zero() && self.config.allow_clear_field_when_value_is_zero() {
            return String::new();
        }
        self.config.formatter().formatted(value).text
    }

    fn decide(&self, request: &EditRequest) -> Result<Decimal, RejectReason> {
        if self.config.read_only() {
            return Err(RejectReason::ReadOnly);
        }

        let proposed = request
            .proposed_text()
            .ok_or(RejectReason::InvalidRange)?;

        match self.config.profile() {
            EditProfile::Decimal => self.decide_decimal(&proposed),
            EditProfile::Legacy => self.decide_legacy(&request.replacement, &proposed),
        }
    }

    fn decide_decimal(&self, proposed: &str) -> Result<Decimal, RejectReason> {
        let digits = only_digits(proposed);
        let value = self.parse(&digits)?;

        if value > self.config.maximum_value() {
            return Err(RejectReason::ExceedsMaximum);
        }
        Ok(value)
    }

    fn decide_legacy(&self, replacement: &str, proposed: &str) -> Result<Decimal, RejectReason> {
        if !contains_only_digits(replacement) {
            return Err(RejectReason::NonNumericReplacement);
        }
        if proposed.is_empty() {
            return Err(RejectReason::EmptyText);
        }

        let digits = only_digits(proposed);
        if digits.chars().count() > LEGACY_TOTAL_DIGITS {
            return Err(RejectReason::DigitBudgetExceeded);
        }
        if self.touches_symbol(proposed) {
            return Err(RejectReason::InsideSymbolPrefix);
        }

        self.parse(&digits)
    }

    fn parse(&self, digits: &str) -> Result<Decimal, RejectReason> {
        self.config
            .formatter()
            .value(digits)
            .ok_or(RejectReason::Unparsable)
    }

    /// Returns whether `proposed` places digits on the outer side of the currency symbol.
    ///
    /// Only applies once the text is longer than the symbol itself. For a prefix symbol the text
    /// up to and including the last occurrence of the symbol's final char must be digit-free,
    /// for a suffix symbol the text from the first occurrence of its leading char onwards.
    fn touches_symbol(&self, proposed: &str) -> bool {
        let symbol = self.config.currency_symbol();
        if proposed.chars().count() <= symbol.chars().count() {
            return false;
        }

        match self.config.locale().conventions().symbol_position {
            SymbolPosition::Prefix => {
                let Some(last) = symbol.chars().last() else {
                    return false;
                };
                proposed
                    .rfind(last)
                    .is_some_and(|idx| count_digits(&proposed[..idx + last.len_utf8()]) > 0)
            }
            SymbolPosition::Suffix => {
                let Some(first) = symbol.chars().next() else {
                    return false;
                };
                proposed
                    .find(first)
                    .is_some_and(|idx| count_digits(&proposed[idx..]) > 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use currency_field_core::string::Utf16Range;
    use currency_field_model::{
        config::FieldSettings,
        enums::FormatterKind,
        locale::Locale,
        stubs::{
            TestDefault, capped_config, legacy_config, pt_br_config, settings, zero_clear_config,
        },
    };
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use ustr::Ustr;

    use super::*;

    struct CellSink(Cell<Option<Decimal>>);

    impl ValueSink for CellSink {
        fn set_value(&self, value: Decimal) {
            self.0.set(Some(value));
        }
    }

    fn insert_at_end(text: &str, replacement: &str) -> EditRequest {
        let len = currency_field_core::string::utf16_len(text);
        EditRequest::new(text, Utf16Range::caret(len), replacement)
    }

    #[rstest]
    fn test_typing_first_digits(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        let result = processor.evaluate(&insert_at_end("R$ 0,00", "1"));
        assert!(result.accepted);
        assert_eq!(result.new_value, Some(dec!(0.01)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 0,01"));

        let result = processor.evaluate(&insert_at_end("R$ 0,01", "2"));
        assert_eq!(result.new_value, Some(dec!(0.12)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 0,12"));
    }

    #[rstest]
    fn test_insert_before_end(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        // Caret just before the last char
        let request = EditRequest::new("R$ 0,00", Utf16Range::caret(6), "1");
        let result = processor.evaluate(&request);

        assert_eq!(result.new_value, Some(dec!(0.10)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 0,10"));
    }

    #[rstest]
    fn test_backspace_shifts_right(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        let request = EditRequest::new("R$ 1.234,56", Utf16Range::new(10, 1), "");
        let result = processor.evaluate(&request);

        assert_eq!(result.new_value, Some(dec!(123.45)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 123,45"));
    }

    #[rstest]
    fn test_ceiling_rejects(capped_config: Configuration) {
        let processor = EditProcessor::new(capped_config);
        let sink = CellSink(Cell::new(None));

        let accepted = processor.process(&insert_at_end("R$ 10,00", "0"), &sink);
        assert_eq!(accepted.new_value, Some(dec!(100.00)));
        assert_eq!(sink.0.get(), Some(dec!(100.00)));

        sink.0.set(None);
        let request = EditRequest::new("R$ 10,00", Utf16Range::caret(8), "1");
        let rejected = processor.process(&request, &sink);
        assert!(!rejected.accepted);
        assert_eq!(rejected.rejection, Some(RejectReason::ExceedsMaximum));
        assert_eq!(sink.0.get(), None);
    }

    #[rstest]
    fn test_delete_all_yields_zero(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        let request = EditRequest::new("R$ 0,12", Utf16Range::new(0, 7), "");
        let result = processor.evaluate(&request);

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(Decimal::ZERO));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 0,00"));
    }

    #[rstest]
    fn test_zero_clear_display(zero_clear_config: Configuration) {
        let processor = EditProcessor::new(zero_clear_config);

        let request = EditRequest::new("R$ 0,01", Utf16Range::new(6, 1), "");
        let result = processor.evaluate(&request);

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(Decimal::ZERO));
        assert_eq!(result.new_display_text.as_deref(), Some(""));
        assert_eq!(processor.display_text_for(dec!(0.01)), "R$ 0,01");
    }

    #[rstest]
    fn test_decimal_profile_ignores_letters(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        let result = processor.evaluate(&insert_at_end("R$ 0,00", "a"));

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(Decimal::ZERO));
    }

    #[rstest]
    fn test_invalid_range_rejected(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        let request = EditRequest::new("R$ 0,00", Utf16Range::new(5, 10), "1");
        let result = processor.evaluate(&request);

        assert_eq!(result.rejection, Some(RejectReason::InvalidRange));
    }

    #[rstest]
    fn test_read_only_rejected() {
        let config = Configuration::new(FieldSettings {
            read_only: true,
            ..FieldSettings::test_default()
        });
        let processor = EditProcessor::new(config);
        let sink = CellSink(Cell::new(None));

        let result = processor.process(&insert_at_end("R$ 0,00", "1"), &sink);

        assert_eq!(result.rejection, Some(RejectReason::ReadOnly));
        assert_eq!(sink.0.get(), None);
    }

    #[rstest]
    fn test_unicode_digits_accepted(pt_br_config: Configuration) {
        let processor = EditProcessor::new(pt_br_config);

        // ARABIC-INDIC DIGIT SEVEN
        let result = processor.evaluate(&insert_at_end("R$ 0,00", "\u{0667}"));

        assert_eq!(result.new_value, Some(dec!(0.07)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 0,07"));
    }

    #[rstest]
    fn test_legacy_accepts_digits(legacy_config: Configuration) {
        let processor = EditProcessor::new(legacy_config);

        let result = processor.evaluate(&insert_at_end("R$ 0,00", "1"));

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(dec!(0.01)));
    }

    #[rstest]
    #[case("a")]
    #[case("1,")]
    #[case(" ")]
    fn test_legacy_rejects_non_numeric(legacy_config: Configuration, #[case] replacement: &str) {
        let processor = EditProcessor::new(legacy_config);

        let result = processor.evaluate(&insert_at_end("R$ 0,00", replacement));

        assert_eq!(result.rejection, Some(RejectReason::NonNumericReplacement));
    }

    #[rstest]
    fn test_legacy_rejects_empty_text(legacy_config: Configuration) {
        let processor = EditProcessor::new(legacy_config);

        let request = EditRequest::new("R$ 0,12", Utf16Range::new(0, 7), "");
        let result = processor.evaluate(&request);

        assert_eq!(result.rejection, Some(RejectReason::EmptyText));
    }

    #[rstest]
    fn test_legacy_digit_budget(legacy_config: Configuration) {
        let processor = EditProcessor::new(legacy_config);

        let at_budget = processor.evaluate(&insert_at_end("R$ 99.999.999,99", "9"));
        assert_eq!(at_budget.new_value, Some(dec!(999999999.99)));

        let over_budget = processor.evaluate(&insert_at_end("R$ 999.999.999,99", "1"));
        assert_eq!(
            over_budget.rejection,
            Some(RejectReason::DigitBudgetExceeded)
        );
    }

    #[rstest]
    fn test_legacy_has_no_ceiling() {
        let config = Configuration::new(settings(
            EditProfile::Legacy,
            FormatterKind::Precise,
            dec!(100.00),
            false,
        ));
        let processor = EditProcessor::new(config);

        let result = processor.evaluate(&insert_at_end("R$ 100,00", "1"));

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(dec!(1000.01)));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_legacy_rejects_typing_into_prefix(legacy_config: Configuration, #[case] caret: usize) {
        let processor = EditProcessor::new(legacy_config);

        let request = EditRequest::new("R$ 0,00", Utf16Range::caret(caret), "5");
        let result = processor.evaluate(&request);

        assert_eq!(result.rejection, Some(RejectReason::InsideSymbolPrefix));
    }

    #[rstest]
    fn test_legacy_allows_typing_after_prefix(legacy_config: Configuration) {
        let processor = EditProcessor::new(legacy_config);

        let request = EditRequest::new("R$ 0,00", Utf16Range::caret(3), "5");
        let result = processor.evaluate(&request);

        assert!(result.accepted);
        assert_eq!(result.new_value, Some(dec!(50.00)));
    }

    #[rstest]
    fn test_legacy_suffix_symbol_guard() {
        let config = Configuration::new(FieldSettings {
            currency_code: Ustr::from("EUR"),
            locale: Locale::new("de_DE"),
            profile: EditProfile::Legacy,
            ..FieldSettings::test_default()
        });
        let processor = EditProcessor::new(config);
        assert_eq!(processor.display_text_for(Decimal::ZERO), "0,00 €");

        let after_symbol = processor.evaluate(&insert_at_end("0,00 €", "5"));
        assert_eq!(
            after_symbol.rejection,
            Some(RejectReason::InsideSymbolPrefix)
        );

        let request = EditRequest::new("0,00 €", Utf16Range::caret(4), "5");
        let before_symbol = processor.evaluate(&request);
        assert_eq!(before_symbol.new_value, Some(dec!(0.05)));
        assert_eq!(before_symbol.new_display_text.as_deref(), Some("0,05 €"));
    }

    #[rstest]
    fn test_fallback_formatter_profile() {
        let config = Configuration::new(settings(
            EditProfile::Decimal,
            FormatterKind::Fallback,
            dec!(10_000),
            false,
        ));
        let processor = EditProcessor::new(config);

        // 10001.00
        let result = processor.evaluate(&insert_at_end("R$ 1.000,10", "0"));
        assert_eq!(result.rejection, Some(RejectReason::ExceedsMaximum));

        let result = processor.evaluate(&insert_at_end("R$ 1.000,00", "0"));
        assert_eq!(result.new_value, Some(dec!(10000.00)));
        assert_eq!(result.new_display_text.as_deref(), Some("R$ 10.000,00"));
    }
}

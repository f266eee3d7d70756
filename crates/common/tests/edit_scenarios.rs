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

//! End-to-end keystroke scenarios driven through [`CurrencyField`].

use std::{cell::RefCell, rc::Rc};

use currency_field_common::{
    binding::ValueBinding,
    field::CurrencyField,
    handler::TypedHandler,
    processor::{EditProcessor, LEGACY_TOTAL_DIGITS},
};
use currency_field_core::{
    digits::count_digits,
    string::{Utf16Range, utf16_len},
};
use currency_field_model::{
    config::{Configuration, FieldSettings, FieldSettingsBuilder},
    edit::EditRequest,
    enums::{EditProfile, FormatterKind, RejectReason},
    locale::Locale,
    stubs::{TestDefault, capped_config, legacy_config, pt_br_config, settings},
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use ustr::Ustr;

struct Harness {
    field: CurrencyField,
    notified: Rc<RefCell<Vec<Decimal>>>,
}

impl Harness {
    fn new(value: Decimal, configuration: Configuration) -> Self {
        let binding = ValueBinding::new(value);
        let notified = Rc::new(RefCell::new(Vec::new()));
        let notified_clone = notified.clone();
        binding.subscribe(TypedHandler::from(move |value: &Decimal| {
            notified_clone.borrow_mut().push(*value);
        }));

        Self {
            field: CurrencyField::new(binding, configuration),
            notified,
        }
    }

    /// Types `keys` one at a time at the end of the display text.
    fn type_keys(&self, keys: &str) {
        for key in keys.chars() {
            let end = utf16_len(&self.field.display_text());
            let vetoed = !self
                .field
                .should_change_characters(Utf16Range::caret(end), &key.to_string());
            assert!(vetoed, "native edit must always be vetoed");
        }
    }

    fn backspace(&self) {
        let text = self.field.display_text();
        let end = utf16_len(&text);
        if end > 0 {
            self.field
                .should_change_characters(Utf16Range::new(end - 1, 1), "");
        }
    }

    fn rejection(&self) -> Option<RejectReason> {
        self.field.last_result().and_then(|r| r.rejection)
    }
}

#[rstest]
fn test_pt_br_typing_scenario(pt_br_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, pt_br_config);
    assert_eq!(harness.field.display_text(), "R$ 0,00");

    harness
        .field
        .should_change_characters(Utf16Range::caret(7), "1");
    assert_eq!(harness.field.value(), dec!(0.01));
    assert_eq!(harness.field.display_text(), "R$ 0,01");

    harness
        .field
        .should_change_characters(Utf16Range::caret(7), "2");
    assert_eq!(harness.field.value(), dec!(0.12));
    assert_eq!(harness.field.display_text(), "R$ 0,12");

    assert_eq!(*harness.notified.borrow(), vec![dec!(0.01), dec!(0.12)]);
}

#[rstest]
fn test_typing_then_deleting(pt_br_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, pt_br_config);

    harness.type_keys("123456");
    assert_eq!(harness.field.display_text(), "R$ 1.234,56");

    harness.backspace();
    harness.backspace();
    assert_eq!(harness.field.display_text(), "R$ 12,34");
    assert_eq!(harness.field.value(), dec!(12.34));
}

#[rstest]
fn test_ceiling_at_one_hundred(capped_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, capped_config);

    harness.type_keys("10000");
    assert_eq!(harness.field.value(), dec!(100.00));
    let notified_before = harness.notified.borrow().len();

    // Would be 1000.00
    harness.type_keys("0");
    assert_eq!(harness.rejection(), Some(RejectReason::ExceedsMaximum));
    assert_eq!(harness.field.value(), dec!(100.00));
    assert_eq!(harness.field.display_text(), "R$ 100,00");
    assert_eq!(harness.notified.borrow().len(), notified_before);

    // 100.01
    harness
        .field
        .should_change_characters(Utf16Range::caret(9), "1");
    assert_eq!(harness.rejection(), Some(RejectReason::ExceedsMaximum));
    assert_eq!(harness.field.value(), dec!(100.00));
}

#[rstest]
fn test_ceiling_at_ten_thousand() {
    let harness = Harness::new(
        Decimal::ZERO,
        Configuration::new(settings(
            EditProfile::Decimal,
            FormatterKind::Precise,
            dec!(10_000),
            false,
        )),
    );

    harness.type_keys("100010");
    assert_eq!(harness.field.value(), dec!(1000.10));

    // 10001.00
    harness.type_keys("0");
    assert_eq!(harness.rejection(), Some(RejectReason::ExceedsMaximum));
    assert_eq!(harness.field.value(), dec!(1000.10));
    assert_eq!(harness.field.display_text(), "R$ 1.000,10");
}

#[rstest]
#[case(true, "")]
#[case(false, "R$ 0,00")]
fn test_zero_clear_policy(#[case] allow_clear: bool, #[case] expected: &str) {
    let harness = Harness::new(
        Decimal::ZERO,
        Configuration::new(settings(
            EditProfile::Decimal,
            FormatterKind::Precise,
            dec!(1000),
            allow_clear,
        )),
    );
    assert_eq!(harness.field.display_text(), expected);

    harness.type_keys("7");
    assert_eq!(harness.field.display_text(), "R$ 0,07");

    harness.backspace();
    assert_eq!(harness.field.value(), Decimal::ZERO);
    assert_eq!(harness.field.display_text(), expected);
}

#[rstest]
fn test_legacy_digit_budget(legacy_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, legacy_config);

    harness.type_keys("99999999999");
    assert_eq!(
        count_digits(&harness.field.display_text()),
        LEGACY_TOTAL_DIGITS
    );
    assert_eq!(harness.field.display_text(), "R$ 999.999.999,99");

    harness.type_keys("1");
    assert_eq!(harness.rejection(), Some(RejectReason::DigitBudgetExceeded));
    assert_eq!(harness.field.value(), dec!(999999999.99));
}

#[rstest]
fn test_legacy_rejections(legacy_config: Configuration) {
    let harness = Harness::new(dec!(0.12), legacy_config);
    let before = harness.field.display_text();

    harness
        .field
        .should_change_characters(Utf16Range::new(0, utf16_len(&before)), "");
    assert_eq!(harness.rejection(), Some(RejectReason::EmptyText));

    harness.type_keys("x");
    assert_eq!(harness.rejection(), Some(RejectReason::NonNumericReplacement));

    harness
        .field
        .should_change_characters(Utf16Range::caret(0), "4");
    assert_eq!(harness.rejection(), Some(RejectReason::InsideSymbolPrefix));

    assert_eq!(harness.field.display_text(), before);
    assert_eq!(harness.field.value(), dec!(0.12));
    assert!(harness.notified.borrow().is_empty());
}

#[rstest]
fn test_decimal_profile_delete_all_accepts_zero(pt_br_config: Configuration) {
    let harness = Harness::new(dec!(0.12), pt_br_config);

    harness
        .field
        .should_change_characters(Utf16Range::new(0, 7), "");

    assert_eq!(harness.rejection(), None);
    assert_eq!(harness.field.value(), Decimal::ZERO);
    assert_eq!(harness.field.display_text(), "R$ 0,00");
    assert_eq!(*harness.notified.borrow(), vec![Decimal::ZERO]);
}

#[rstest]
fn test_paste_with_separators(pt_br_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, pt_br_config);

    harness
        .field
        .should_change_characters(Utf16Range::new(0, 7), "1.234,56");

    assert_eq!(harness.field.value(), dec!(1234.56));
    assert_eq!(harness.field.display_text(), "R$ 1.234,56");
}

#[rstest]
fn test_unicode_digit_keystrokes(pt_br_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, pt_br_config);

    // ARABIC-INDIC DIGITS ONE, TWO, THREE
    harness.type_keys("\u{0661}\u{0662}\u{0663}");

    assert_eq!(harness.field.value(), dec!(1.23));
    assert_eq!(harness.field.display_text(), "R$ 1,23");
}

#[rstest]
fn test_surrogate_pair_split_rejected(pt_br_config: Configuration) {
    let harness = Harness::new(Decimal::ZERO, pt_br_config);
    harness
        .field
        .should_change_characters(Utf16Range::new(0, 7), "\u{1F4B0}1");
    let text = harness.field.display_text();
    assert_eq!(text, "R$ 0,01");

    // Replacing one code unit of an emoji in text supplied by the host
    let processor = EditProcessor::new(harness.field.configuration().clone());
    let request = EditRequest::new("\u{1F4B0}R$ 0,01", Utf16Range::new(1, 1), "");
    assert_eq!(
        processor.evaluate(&request).rejection,
        Some(RejectReason::InvalidRange)
    );
}

#[rstest]
fn test_read_only_field() {
    let settings = FieldSettingsBuilder::default()
        .locale(Locale::pt_br())
        .read_only(true)
        .build()
        .unwrap();
    let harness = Harness::new(dec!(5.00), Configuration::new(settings));

    harness.type_keys("1");

    assert_eq!(harness.rejection(), Some(RejectReason::ReadOnly));
    assert_eq!(harness.field.display_text(), "R$ 5,00");
}

#[rstest]
fn test_settings_from_json_drive_field() {
    let settings = FieldSettings::from_json(
        r#"{
            "currency_code": "USD",
            "locale": "en_US",
            "maximum_value": "500",
            "allow_clear_field_when_value_is_zero": true
        }"#,
    )
    .unwrap();
    let harness = Harness::new(Decimal::ZERO, Configuration::new(settings));
    assert_eq!(harness.field.display_text(), "");
    assert_eq!(harness.field.placeholder(), "$0.00");

    harness.type_keys("50000");
    assert_eq!(harness.field.display_text(), "$500.00");

    harness.type_keys("1");
    assert_eq!(harness.rejection(), Some(RejectReason::ExceedsMaximum));
}

#[rstest]
fn test_unsubscribed_handler_not_notified() {
    let harness = Harness::new(Decimal::ZERO, Configuration::test_default());
    let binding = harness.field.binding();
    let late = Rc::new(RefCell::new(0));
    let late_clone = late.clone();
    binding.subscribe(TypedHandler::from_with_id("late", move |_: &Decimal| {
        *late_clone.borrow_mut() += 1;
    }));

    harness.type_keys("1");
    assert!(binding.unsubscribe(&Ustr::from("late")));
    harness.type_keys("2");

    assert_eq!(*late.borrow(), 1);
    assert_eq!(harness.notified.borrow().len(), 2);
}

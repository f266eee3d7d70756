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

//! Type stubs to facilitate testing.

use rstest::fixture;
use rust_decimal::Decimal;
use ustr::Ustr;

use crate::{
    config::{Configuration, FieldSettings},
    currency::Currency,
    enums::{EditProfile, FormatterKind},
    formatter::{FormatContext, TextAttributes},
    locale::Locale,
    types::fixed::DEFAULT_MAXIMUM_VALUE,
};

/// A trait for providing test-specific default values.
pub trait TestDefault {
    /// Creates a new instance with test-appropriate default values.
    fn test_default() -> Self;
}

impl TestDefault for FieldSettings {
    /// Creates BRL settings for `pt_BR`, independent of the host locale.
    fn test_default() -> Self {
        Self {
            currency_code: Ustr::from("BRL"),
            locale: Locale::pt_br(),
            ..Self::default()
        }
    }
}

impl TestDefault for Configuration {
    /// Creates a new test default [`Configuration`] instance.
    fn test_default() -> Self {
        Self::new(FieldSettings::test_default())
    }
}

/// Returns a format context for the given locale, currency and decimal places.
#[must_use]
pub fn format_context(
    locale: Locale,
    currency: Currency,
    decimal_places: u32,
    allow_clear_field_when_value_is_zero: bool,
) -> FormatContext {
    FormatContext {
        currency,
        locale,
        decimal_places,
        allow_clear_field_when_value_is_zero,
        attributes: TextAttributes::default(),
    }
}

/// Builds settings differing from the `pt_BR` BRL defaults in the given fields.
#[must_use]
pub fn settings(
    profile: EditProfile,
    formatter_kind: FormatterKind,
    maximum_value: Decimal,
    allow_clear_field_when_value_is_zero: bool,
) -> FieldSettings {
    FieldSettings {
        profile,
        formatter_kind,
        maximum_value,
        allow_clear_field_when_value_is_zero,
        ..FieldSettings::test_default()
    }
}

#[fixture]
pub fn pt_br_context() -> FormatContext {
    format_context(Locale::pt_br(), Currency::BRL(), 2, false)
}

#[fixture]
pub fn pt_br_settings() -> FieldSettings {
    FieldSettings::test_default()
}

#[fixture]
pub fn pt_br_config() -> Configuration {
    Configuration::test_default()
}

/// Returns a `pt_BR` configuration rejecting values above 100.00.
#[fixture]
pub fn capped_config() -> Configuration {
    Configuration::new(settings(
        EditProfile::Decimal,
        FormatterKind::Precise,
        Decimal::new(10_000, 2),
        false,
    ))
}

/// Returns a `pt_BR` configuration using the legacy edit rules.
#[fixture]
pub fn legacy_config() -> Configuration {
    Configuration::new(settings(
        EditProfile::Legacy,
        FormatterKind::Precise,
        DEFAULT_MAXIMUM_VALUE,
        false,
    ))
}

/// Returns a `pt_BR` configuration clearing the field on zero.
#[fixture]
pub fn zero_clear_config() -> Configuration {
    Configuration::new(settings(
        EditProfile::Decimal,
        FormatterKind::Precise,
        DEFAULT_MAXIMUM_VALUE,
        true,
    ))
}

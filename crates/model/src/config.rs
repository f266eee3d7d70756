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

//! Field settings and the immutable per-field configuration built from them.

use std::{fmt::Debug, rc::Rc};

use currency_field_core::correctness::{FAILED, check_non_negative_decimal, check_predicate_true};
use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    currency::Currency,
    enums::{EditProfile, FormatterKind},
    formatter::{BuiltinFormatter, FormatContext, Formatter, TextAttributes},
    locale::Locale,
    types::fixed::{DEFAULT_DECIMAL_PLACES, DEFAULT_MAXIMUM_VALUE, check_decimal_places},
};

/// User-facing settings for a currency field.
///
/// Every field is optional in JSON and in the builder, falling back to its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default)]
pub struct FieldSettings {
    /// The ISO 4217 currency code.
    pub currency_code: Ustr,
    /// The locale whose conventions drive formatting, the host locale by default.
    pub locale: Locale,
    /// The number of fractional digits.
    pub decimal_places: u32,
    /// The largest accepted value.
    pub maximum_value: Decimal,
    /// Whether a zero value displays as empty text.
    pub allow_clear_field_when_value_is_zero: bool,
    /// Whether edits are refused outright.
    pub read_only: bool,
    /// The rule set applied to edits.
    pub profile: EditProfile,
    /// The built-in formatting strategy.
    pub formatter_kind: FormatterKind,
    /// Cosmetic attributes attached to formatted text.
    pub text_attributes: TextAttributes,
    /// The text shown while the field is empty, the formatted zero value when unset.
    #[builder(setter(into, strip_option))]
    pub placeholder: Option<String>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            currency_code: Ustr::from("BRL"),
            locale: Locale::host_default(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            maximum_value: DEFAULT_MAXIMUM_VALUE,
            allow_clear_field_when_value_is_zero: false,
            read_only: false,
            profile: EditProfile::default(),
            formatter_kind: FormatterKind::default(),
            text_attributes: TextAttributes::default(),
            placeholder: None,
        }
    }
}

impl FieldSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed or holds an invalid value.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings can build a [`Configuration`].
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is malformed, the decimal places exceed the
    /// maximum, the maximum value is negative or the font size is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        Currency::new_checked(self.currency_code)?;
        check_decimal_places(self.decimal_places)?;
        check_non_negative_decimal(self.maximum_value, stringify!(maximum_value))?;
        check_predicate_true(
            self.text_attributes.font_size > 0,
            "invalid 'font_size', was zero",
        )?;
        Ok(())
    }
}

/// Immutable configuration of one currency field: its settings and bound formatter.
#[derive(Clone)]
pub struct Configuration {
    settings: FieldSettings,
    currency: Currency,
    formatter: Rc<dyn Formatter>,
    placeholder: String,
}

impl Configuration {
    /// Creates a new [`Configuration`] instance with the built-in formatter selected by
    /// `settings.formatter_kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` fails validation.
    pub fn new_checked(settings: FieldSettings) -> anyhow::Result<Self> {
        settings.validate()?;

        let currency = Currency::new_checked(settings.currency_code)?;
        let context = FormatContext {
            currency,
            locale: settings.locale,
            decimal_places: settings.decimal_places,
            allow_clear_field_when_value_is_zero: settings.allow_clear_field_when_value_is_zero,
            attributes: settings.text_attributes,
        };
        let formatter = BuiltinFormatter::new(settings.formatter_kind, context.clone());
        let placeholder = settings.placeholder.clone().unwrap_or_else(|| {
            // Zero-clear never applies to the placeholder
            let context = FormatContext {
                allow_clear_field_when_value_is_zero: false,
                ..context
            };
            BuiltinFormatter::new(settings.formatter_kind, context)
                .formatted(Decimal::ZERO)
                .text
        });

        log::debug!(
            "Configured {currency} field for {} with {} formatter",
            settings.locale,
            settings.formatter_kind,
        );

        Ok(Self {
            settings,
            currency,
            formatter: Rc::new(formatter),
            placeholder,
        })
    }

    /// Creates a new [`Configuration`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `settings` fails validation.
    #[must_use]
    pub fn new(settings: FieldSettings) -> Self {
        Self::new_checked(settings).expect(FAILED)
    }

    /// Replaces the built-in formatter with a custom one.
    ///
    /// Without an explicit placeholder, the custom formatter's zero rendering becomes the
    /// placeholder unless it renders zero as empty text.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Rc<dyn Formatter>) -> Self {
        if self.settings.placeholder.is_none() {
            let zero = formatter.formatted(Decimal::ZERO).text;
            if !zero.is_empty() {
                self.placeholder = zero;
            }
        }
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    #[must_use]
    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Returns the text shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.settings.locale
    }

    /// Returns the currency symbol as displayed under the configured locale.
    #[must_use]
    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol_for(&self.settings.locale)
    }

    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.settings.decimal_places
    }

    #[must_use]
    pub fn maximum_value(&self) -> Decimal {
        self.settings.maximum_value
    }

    #[must_use]
    pub fn allow_clear_field_when_value_is_zero(&self) -> bool {
        self.settings.allow_clear_field_when_value_is_zero
    }

    #[must_use]
    pub fn read_only(&self) -> bool {
        self.settings.read_only
    }

    #[must_use]
    pub fn profile(&self) -> EditProfile {
        self.settings.profile
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(FieldSettings::default())
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Configuration))
            .field("settings", &self.settings)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

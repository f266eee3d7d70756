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

//! The value formatter capability and its built-in strategies.
//!
//! A [`Formatter`] is bound to one configuration and answers two questions: what value does a
//! digit string represent, and how is a value displayed. Two interchangeable strategies ship:
//!
//! - [`DecimalFormatter`]: exact-decimal rendering straight from the locale conventions.
//! - [`FallbackFormatter`]: rendering through the pattern-driven [`NumberFormatter`].
//!
//! Both produce identical text for every built-in locale and currency.

pub mod fallback;
pub mod number;
pub mod precise;

use std::fmt::Display;

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use crate::formatter::{
    fallback::FallbackFormatter, number::NumberFormatter, precise::DecimalFormatter,
};
use crate::{
    currency::Currency,
    enums::{FormatterKind, TextAlignment},
    locale::Locale,
};

/// The default font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 30;

/// An RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TextColor {
    /// The dark text color, the default of a bare color.
    pub const DARK_TEXT: Self = Self::rgb(0, 0, 0);
    /// The muted gray used for field text by default.
    pub const SYSTEM_GRAY: Self = Self::rgb(142, 142, 147);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::DARK_TEXT
    }
}

impl Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Cosmetic display metadata attached to formatted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    pub alignment: TextAlignment,
    pub font_size: u16,
    pub color: TextColor,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::default(),
            font_size: DEFAULT_FONT_SIZE,
            color: TextColor::SYSTEM_GRAY,
        }
    }
}

/// Formatted text together with its display attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayText {
    pub text: String,
    pub attributes: TextAttributes,
}

impl DisplayText {
    #[must_use]
    pub fn new(text: String, attributes: TextAttributes) -> Self {
        Self { text, attributes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Everything a formatter needs from the field configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatContext {
    pub currency: Currency,
    pub locale: Locale,
    pub decimal_places: u32,
    pub allow_clear_field_when_value_is_zero: bool,
    pub attributes: TextAttributes,
}

impl FormatContext {
    /// Returns whether `value` renders as empty text under the zero-clear policy.
    #[must_use]
    pub fn clears(&self, value: Decimal) -> bool {
        self.allow_clear_field_when_value_is_zero && value.is_zero()
    }
}

/// Converts digit strings to values and values to display text.
#[enum_dispatch]
pub trait Formatter {
    /// Interprets a digit-only string as a normalized value.
    ///
    /// The empty string is zero. Returns `None` if `digits` is not a digit string or the
    /// value is not representable.
    fn value(&self, digits: &str) -> Option<Decimal>;

    /// Renders `value` for display with exactly the configured number of fractional digits.
    ///
    /// A zero value renders as empty text when the zero-clear policy is set.
    fn formatted(&self, value: Decimal) -> DisplayText;
}

/// The built-in formatting strategies.
#[derive(Clone, Debug)]
#[enum_dispatch(Formatter)]
pub enum BuiltinFormatter {
    Precise(DecimalFormatter),
    Fallback(FallbackFormatter),
}

impl BuiltinFormatter {
    /// Creates the strategy selected by `kind` for `context`.
    #[must_use]
    pub fn new(kind: FormatterKind, context: FormatContext) -> Self {
        match kind {
            FormatterKind::Precise => Self::Precise(DecimalFormatter::new(context)),
            FormatterKind::Fallback => Self::Fallback(FallbackFormatter::new(context)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormatterKind {
        match self {
            Self::Precise(_) => FormatterKind::Precise,
            Self::Fallback(_) => FormatterKind::Fallback,
        }
    }
}

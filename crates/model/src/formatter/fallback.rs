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

//! Currency formatter backed by the general-purpose [`NumberFormatter`].

use rust_decimal::{Decimal, RoundingStrategy};

use super::{DisplayText, FormatContext, Formatter, NumberFormatter};
use crate::enums::NumberStyle;

/// Formats through a [`NumberFormatter`] configured with the field's currency, locale and
/// fraction digits.
#[derive(Clone, Debug)]
pub struct FallbackFormatter {
    context: FormatContext,
    number_formatter: NumberFormatter,
}

impl FallbackFormatter {
    /// Creates a new [`FallbackFormatter`] instance.
    #[must_use]
    pub fn new(context: FormatContext) -> Self {
        let number_formatter = NumberFormatter {
            style: NumberStyle::Currency,
            currency: context.currency,
            locale: context.locale,
            minimum_fraction_digits: context.decimal_places,
            maximum_fraction_digits: context.decimal_places,
            rounding: RoundingStrategy::MidpointNearestEven,
        };

        Self {
            context,
            number_formatter,
        }
    }

    #[must_use]
    pub fn number_formatter(&self) -> &NumberFormatter {
        &self.number_formatter
    }
}

impl Formatter for FallbackFormatter {
    fn value(&self, digits: &str) -> Option<Decimal> {
        self.number_formatter.number_from_digits(digits)
    }

    fn formatted(&self, value: Decimal) -> DisplayText {
        if self.context.clears(value) {
            return DisplayText::new(String::new(), self.context.attributes);
        }

        let text = self.number_formatter.string(value).unwrap_or_else(|| {
            log::warn!("Value {value} exceeds the minor-unit range, rendering unformatted");
            value.to_string()
        });

        DisplayText::new(text, self.context.attributes)
    }
}

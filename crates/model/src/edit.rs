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

//! Proposed edits and their outcomes.

use std::fmt::Display;

use currency_field_core::string::{Utf16Range, replace_utf16_range};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::RejectReason;

/// One proposed replacement of a text range, as a text-field delegate receives it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EditRequest {
    /// The text currently displayed.
    pub current_text: String,
    /// The replaced range in UTF-16 code units.
    pub range: Utf16Range,
    /// The inserted text, empty for a deletion.
    pub replacement: String,
}

impl EditRequest {
    /// Creates a new [`EditRequest`] instance.
    #[must_use]
    pub fn new<T, R>(current_text: T, range: Utf16Range, replacement: R) -> Self
    where
        T: Into<String>,
        R: Into<String>,
    {
        Self {
            current_text: current_text.into(),
            range,
            replacement: replacement.into(),
        }
    }

    /// Returns the text after applying the replacement, or `None` if the range does not lie
    /// within the current text.
    #[must_use]
    pub fn proposed_text(&self) -> Option<String> {
        replace_utf16_range(&self.current_text, self.range, &self.replacement)
    }
}

impl Display for EditRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(current_text='{}', range={}, replacement='{}')",
            stringify!(EditRequest),
            self.current_text,
            self.range,
            self.replacement,
        )
    }
}

/// Receives the value assignment of an accepted edit.
pub trait ValueSink {
    fn set_value(&self, value: Decimal);
}

/// The single atomic assignment an accepted edit performs on the bound value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a value write does nothing until applied"]
pub struct ValueWrite {
    pub value: Decimal,
}

impl ValueWrite {
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Assigns the value to `sink`.
    pub fn apply(self, sink: &dyn ValueSink) {
        sink.set_value(self.value);
    }
}

/// The outcome of processing an [`EditRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditResult {
    /// Whether the edit was accepted.
    pub accepted: bool,
    /// The new normalized value, set when accepted.
    pub new_value: Option<Decimal>,
    /// The text the field must display, set when accepted.
    pub new_display_text: Option<String>,
    /// Why the edit was refused, set when rejected.
    pub rejection: Option<RejectReason>,
}

impl EditResult {
    #[must_use]
    pub fn accept(value: Decimal, display_text: String) -> Self {
        Self {
            accepted: true,
            new_value: Some(value),
            new_display_text: Some(display_text),
            rejection: None,
        }
    }

    #[must_use]
    pub fn reject(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            new_value: None,
            new_display_text: None,
            rejection: Some(reason),
        }
    }

    /// Returns the value assignment to perform, `None` for a rejected edit.
    pub fn write_back(&self) -> Option<ValueWrite> {
        self.new_value
            .filter(|_| self.accepted)
            .map(ValueWrite::new)
    }
}

impl Display for EditResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.new_value, &self.new_display_text, self.rejection) {
            (Some(value), Some(text), _) if self.accepted => {
                write!(f, "Accepted(value={value}, display_text='{text}')")
            }
            (_, _, Some(reason)) => write!(f, "Rejected({reason})"),
            _ => write!(f, "Rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    struct CellSink(Cell<Decimal>);

    impl ValueSink for CellSink {
        fn set_value(&self, value: Decimal) {
            self.0.set(value);
        }
    }

    #[rstest]
    fn test_proposed_text() {
        let request = EditRequest::new("R$ 0,00", Utf16Range::caret(7), "1");
        assert_eq!(request.proposed_text().as_deref(), Some("R$ 0,001"));
    }

    #[rstest]
    fn test_proposed_text_out_of_bounds() {
        let request = EditRequest::new("R$ 0,00", Utf16Range::new(5, 9), "");
        assert_eq!(request.proposed_text(), None);
    }

    #[rstest]
    fn test_request_display() {
        let request = EditRequest::new("R$ 0,00", Utf16Range::caret(7), "1");
        assert_eq!(
            request.to_string(),
            "EditRequest(current_text='R$ 0,00', range={7, 0}, replacement='1')"
        );
    }

    #[rstest]
    fn test_accept_write_back() {
        let result = EditResult::accept(dec!(0.12), "R$ 0,12".to_string());
        let sink = CellSink(Cell::new(Decimal::ZERO));
        result.write_back().unwrap().apply(&sink);
        assert_eq!(sink.0.get(), dec!(0.12));
        assert_eq!(result.to_string(), "Accepted(value=0.12, display_text='R$ 0,12')");
    }

    #[rstest]
    fn test_reject_has_no_write_back() {
        let result = EditResult::reject(RejectReason::ExceedsMaximum);
        assert!(!result.accepted);
        assert_eq!(result.write_back(), None);
        assert_eq!(result.new_display_text, None);
        assert_eq!(result.to_string(), "Rejected(EXCEEDS_MAXIMUM)");
    }
}

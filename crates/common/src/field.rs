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

//! A headless currency text field.
//!
//! [`CurrencyField`] plays the part of a text-field delegate: the host forwards every proposed
//! edit to [`CurrencyField::should_change_characters`], which always vetoes the native edit and
//! instead overwrites the display text itself when the edit is accepted.

use std::{
    cell::{Cell, RefCell},
    fmt::Debug,
    rc::Rc,
};

use currency_field_core::string::Utf16Range;
use currency_field_model::{
    config::Configuration,
    edit::{EditRequest, EditResult},
};
use rust_decimal::Decimal;
use ustr::Ustr;

use crate::{
    binding::ValueBinding,
    dispatch::{Dispatcher, ImmediateDispatcher},
    handler::TypedHandler,
    processor::EditProcessor,
};

/// The UI glue around an [`EditProcessor`] and its bound value.
pub struct CurrencyField {
    processor: EditProcessor,
    binding: ValueBinding,
    dispatcher: Rc<dyn Dispatcher>,
    display_text: RefCell<String>,
    focused: Cell<bool>,
    focus_handlers: RefCell<Vec<TypedHandler<bool>>>,
    last_result: RefCell<Option<EditResult>>,
}

impl CurrencyField {
    /// Creates a new [`CurrencyField`] instance displaying the bound value.
    #[must_use]
    pub fn new(binding: ValueBinding, configuration: Configuration) -> Self {
        let processor = EditProcessor::new(configuration);
        let display_text = processor.display_text_for(binding.get());

        Self {
            processor,
            binding,
            dispatcher: Rc::new(ImmediateDispatcher),
            display_text: RefCell::new(display_text),
            focused: Cell::new(false),
            focus_handlers: RefCell::new(Vec::new()),
            last_result: RefCell::new(None),
        }
    }

    /// Replaces the dispatcher running value write-backs.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: Rc<dyn Dispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Handles a proposed replacement of `range` with `replacement`.
    ///
    /// Always returns `false`: the native edit is vetoed. When the edit is accepted the display
    /// text is overwritten and the new value is dispatched to the binding.
    pub fn should_change_characters(&self, range: Utf16Range, replacement: &str) -> bool {
        let request = EditRequest::new(self.display_text(), range, replacement);
        let result = self.processor.evaluate(&request);

        if let Some(text) = &result.new_display_text {
            self.display_text.replace(text.clone());
        }
        if let Some(write) = result.write_back() {
            self.dispatcher.dispatch(write, &self.binding);
        }

        self.last_result.replace(Some(result));
        false
    }

    /// Records a focus change reported by the host, notifying handlers on transitions only.
    pub fn set_focused(&self, focused: bool) {
        let previous = self.focused.replace(focused);
        if previous == focused {
            return;
        }

        let handlers = self.focus_handlers.borrow().clone();
        for handler in &handlers {
            handler.handle(&focused);
        }
    }

    /// Subscribes `handler` to focus changes.
    pub fn subscribe_focus(&self, handler: TypedHandler<bool>) {
        let mut handlers = self.focus_handlers.borrow_mut();
        if handlers.iter().any(|h| h.id() == handler.id()) {
            log::warn!("Handler {} already subscribed to focus changes", handler.id());
            return;
        }
        handlers.push(handler);
    }

    /// Unsubscribes the focus handler with `id`, returning whether one was removed.
    pub fn unsubscribe_focus(&self, id: &Ustr) -> bool {
        let mut handlers = self.focus_handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|h| h.id() != *id);
        handlers.len() != before
    }

    /// Re-renders the display text from the bound value.
    ///
    /// Call after the value was changed outside the field.
    pub fn refresh_display(&self) {
        let text = self.processor.display_text_for(self.binding.get());
        self.display_text.replace(text);
    }

    /// Returns the text shown while the field is empty.
    ///
    /// Defaults to the formatted zero value, rendered even when zero clears the field.
    #[must_use]
    pub fn placeholder(&self) -> String {
        self.processor.config().placeholder().to_string()
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.display_text.borrow().clone()
    }

    #[must_use]
    pub fn value(&self) -> Decimal {
        self.binding.get()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    /// Returns whether the value is positive and within the maximum value.
    #[must_use]
    pub fn is_value_valid(&self) -> bool {
        let value = self.value();
        value > Decimal::ZERO && value <= self.processor.config().maximum_value()
    }

    /// Returns the outcome of the most recent edit.
    #[must_use]
    pub fn last_result(&self) -> Option<EditResult> {
        self.last_result.borrow().clone()
    }

    #[must_use]
    pub fn binding(&self) -> &ValueBinding {
        &self.binding
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        self.processor.config()
    }
}

impl Debug for CurrencyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(CurrencyField))
            .field("display_text", &self.display_text.borrow())
            .field("binding", &self.binding)
            .field("dispatcher", &self.dispatcher)
            .field("focused", &self.focused.get())
            .finish_non_exhaustive()
    }
}

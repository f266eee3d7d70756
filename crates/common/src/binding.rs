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

//! The bound value of a currency field.
//!
//! A [`ValueBinding`] is an explicit shared cell: the embedding application keeps one handle,
//! the field keeps another, and accepted edits write through [`ValueBinding::set`], which
//! notifies every subscribed `on_value_changed` handler.

use std::{
    cell::{Cell, RefCell},
    fmt::Debug,
    rc::Rc,
};

use currency_field_model::edit::ValueSink;
use rust_decimal::Decimal;
use ustr::Ustr;

use crate::handler::TypedHandler;

#[derive(Default)]
struct BindingState {
    value: Cell<Decimal>,
    handlers: RefCell<Vec<TypedHandler<Decimal>>>,
}

/// A shared handle to a bound decimal value and its change handlers.
///
/// Cloning the handle shares the underlying value.
#[derive(Clone, Default)]
pub struct ValueBinding(Rc<BindingState>);

impl ValueBinding {
    /// Creates a new [`ValueBinding`] instance holding `value`.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(Rc::new(BindingState {
            value: Cell::new(value),
            handlers: RefCell::new(Vec::new()),
        }))
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0.value.get()
    }

    /// Stores `value` and notifies every handler, in subscription order.
    ///
    /// Handlers are notified even when `value` equals the previous value.
    pub fn set(&self, value: Decimal) {
        self.0.value.set(value);

        // Snapshot so handlers may subscribe or unsubscribe while being notified
        let handlers = self.0.handlers.borrow().clone();
        for handler in &handlers {
            handler.handle(&value);
        }
    }

    /// Subscribes `handler` to value changes.
    ///
    /// A handler whose id is already subscribed is ignored.
    pub fn subscribe(&self, handler: TypedHandler<Decimal>) {
        let mut handlers = self.0.handlers.borrow_mut();
        if handlers.iter().any(|h| h.id() == handler.id()) {
            log::warn!("Handler {} already subscribed to value changes", handler.id());
            return;
        }
        handlers.push(handler);
    }

    /// Unsubscribes the handler with `id`, returning whether one was removed.
    pub fn unsubscribe(&self, id: &Ustr) -> bool {
        let mut handlers = self.0.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|h| h.id() != *id);
        handlers.len() != before
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Returns whether `other` shares this binding's value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ValueSink for ValueBinding {
    fn set_value(&self, value: Decimal) {
        self.set(value);
    }
}

impl Debug for ValueBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(ValueBinding))
            .field("value", &self.get())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

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

//! Scheduling of value write-backs onto the host's UI context.

use std::{cell::RefCell, collections::VecDeque, fmt::Debug};

use currency_field_model::edit::ValueWrite;

use crate::binding::ValueBinding;

/// Runs an accepted edit's write-back on the host's chosen context.
pub trait Dispatcher: Debug {
    /// Schedules `write` to be applied to `binding`.
    fn dispatch(&self, write: ValueWrite, binding: &ValueBinding);
}

/// Applies write-backs immediately on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateDispatcher;

impl Dispatcher for ImmediateDispatcher {
    fn dispatch(&self, write: ValueWrite, binding: &ValueBinding) {
        write.apply(binding);
    }
}

/// Defers write-backs until the host loop calls [`QueuedDispatcher::drain`].
#[derive(Debug, Default)]
pub struct QueuedDispatcher {
    pending: RefCell<VecDeque<(ValueWrite, ValueBinding)>>,
}

impl QueuedDispatcher {
    /// Creates a new empty [`QueuedDispatcher`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every pending write in FIFO order, returning how many were applied.
    ///
    /// Writes dispatched by handlers during the drain are applied in the same call.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            // Release the borrow before applying, handlers may dispatch again
            let next = self.pending.borrow_mut().pop_front();
            let Some((write, binding)) = next else {
                break;
            };
            write.apply(&binding);
            count += 1;
        }

        if count > 0 {
            log::trace!("Drained {count} value write(s)");
        }
        count
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Dispatcher for QueuedDispatcher {
    fn dispatch(&self, write: ValueWrite, binding: &ValueBinding) {
        self.pending.borrow_mut().push_back((write, binding.clone()));
    }
}

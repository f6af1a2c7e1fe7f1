// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, Ref, RefCell};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::event::{Event, EventId, Listener, ListenerHandle};
use crate::runtime::{self, Pending, ShouldRender, StateId, Then, Trigger};

/// An owned handle to the state of a mounted [`Stateful`](super::Stateful) view.
///
/// A `Signal` doesn't keep the state alive. Once the view is dropped, updates are ignored.
pub struct Signal<S> {
    inner: Weak<RefCell<S>>,
    pending: Weak<Cell<bool>>,
    id: StateId,
}

impl<S> Clone for Signal<S> {
    fn clone(&self) -> Self {
        Signal {
            inner: self.inner.clone(),
            pending: self.pending.clone(),
            id: self.id,
        }
    }
}

impl<S> Signal<S> {
    /// Update the state behind this `Signal`.
    ///
    /// ```
    /// # use trellis::prelude::*;
    /// fn example(count: Signal<i32>) {
    ///     // increment count and request a render
    ///     count.update(|count| *count += 1);
    ///
    ///     // increment count if less than 10, only render on change
    ///     count.update(|count| {
    ///         if *count < 10 {
    ///             *count += 1;
    ///             Then::Render
    ///         } else {
    ///             Then::Stop
    ///         }
    ///     })
    /// }
    /// ```
    ///
    /// The render itself happens on the next [`App::flush`](crate::runtime::App::flush)
    /// or event dispatch of the app this state is mounted in.
    pub fn update<F, O>(&self, mutator: F)
    where
        F: FnOnce(&mut S) -> O,
        O: ShouldRender,
    {
        let Some(inner) = self.inner.upgrade() else {
            log::warn!("state {:?} was dropped, ignoring update", self.id);
            return;
        };

        let Ok(mut state) = inner.try_borrow_mut() else {
            log::warn!("state {:?} is borrowed, ignoring update", self.id);
            return;
        };

        if mutator(&mut *state).should_render() {
            if let Some(pending) = self.pending.upgrade() {
                pending.set(true);
            }
        }
    }

    /// Same as [`update`](Signal::update), but it never renders updates.
    pub fn update_silent<F>(&self, mutator: F)
    where
        F: FnOnce(&mut S),
    {
        self.update(move |state| {
            mutator(state);
            Then::Stop
        })
    }

    /// Replace the entire state with a new value and request a render.
    pub fn set(&self, val: S) {
        self.update(move |s| *s = val);
    }
}

pub struct Hook<S> {
    inner: Rc<RefCell<S>>,
    pending: Pending,
    id: StateId,
}

impl<S> Hook<S> {
    pub(crate) fn new(inner: S) -> Self {
        Hook {
            inner: Rc::new(RefCell::new(inner)),
            pending: runtime::pending_flag(),
            id: StateId::next(),
        }
    }

    /// Borrow the current state for reading.
    pub fn read(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }

    /// Get the value of state if state implements `Copy`.
    pub fn get(&self) -> S
    where
        S: Copy,
    {
        *self.inner.borrow()
    }

    /// Create a [`Signal`] that can update this state from outside of the view.
    pub fn signal(&self) -> Signal<S> {
        Signal {
            inner: Rc::downgrade(&self.inner),
            pending: Rc::downgrade(&self.pending),
            id: self.id,
        }
    }

    /// Binds a closure to a mutable reference of the state, producing a [`Listener`].
    /// The [`event!`](crate::event) macro is a shorthand for this.
    pub fn bind<F, O>(&self, callback: F) -> Bound<S, F>
    where
        S: 'static,
        F: Fn(&mut S, &Event) -> O + 'static,
        O: ShouldRender,
    {
        Bound {
            state: self.inner.clone(),
            callback,
        }
    }
}

pub struct Bound<S, F> {
    state: Rc<RefCell<S>>,
    callback: F,
}

pub struct BoundProduct<S, F, O> {
    eid: EventId,
    state: Rc<RefCell<S>>,
    callback: F,
    _marker: PhantomData<fn() -> O>,
}

impl<S, F, O> Listener for Bound<S, F>
where
    S: 'static,
    F: Fn(&mut S, &Event) -> O + 'static,
    O: ShouldRender,
{
    type Product = BoundProduct<S, F, O>;

    fn build(self) -> Self::Product {
        BoundProduct {
            eid: EventId::next(),
            state: self.state,
            callback: self.callback,
            _marker: PhantomData,
        }
    }

    fn update(self, p: &mut Self::Product) {
        p.state = self.state;
        p.callback = self.callback;
    }
}

impl<S, F, O> ListenerHandle for BoundProduct<S, F, O>
where
    S: 'static,
    F: Fn(&mut S, &Event) -> O + 'static,
    O: ShouldRender,
{
    fn eid(&self) -> Option<EventId> {
        Some(self.eid)
    }
}

impl<S, F, O> Trigger for BoundProduct<S, F, O>
where
    S: 'static,
    F: Fn(&mut S, &Event) -> O + 'static,
    O: ShouldRender,
{
    fn trigger(&self, event: &Event) -> Option<Then> {
        if event.eid() != self.eid {
            return None;
        }

        let Ok(mut state) = self.state.try_borrow_mut() else {
            log::warn!("state bound to {} is borrowed, skipping handler", self.eid);
            return Some(Then::Stop);
        };

        Some((self.callback)(&mut *state, event).then())
    }
}

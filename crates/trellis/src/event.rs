// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for handling activation events

use std::fmt;

use crate::runtime::{Then, Trigger};

/// Identifies a mounted listener. Hosts address events with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
#[repr(transparent)]
pub struct EventId(pub(crate) u32);

impl EventId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU32, Ordering};

        static ID: AtomicU32 = AtomicU32::new(0);

        EventId(ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Rebuild an id previously obtained through [`get`](EventId::get),
    /// for hosts that store ids outside of Rust.
    pub const fn from_raw(raw: u32) -> Self {
        EventId(raw)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user activation delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    eid: EventId,
    target_text: String,
}

impl Event {
    pub fn new(eid: EventId, target_text: impl Into<String>) -> Self {
        Event {
            eid,
            target_text: target_text.into(),
        }
    }

    pub fn eid(&self) -> EventId {
        self.eid
    }

    /// Text content of the element that was activated.
    pub fn target_text(&self) -> &str {
        &self.target_text
    }
}

/// Something that can be attached to an element and invoked on activation.
pub trait Listener
where
    Self: Sized + 'static,
{
    type Product: ListenerHandle;

    fn build(self) -> Self::Product;

    fn update(self, p: &mut Self::Product);
}

pub trait ListenerHandle: Trigger + 'static {
    /// The id hosts should use to address this listener, if it listens at all.
    fn eid(&self) -> Option<EventId>;
}

impl<F> Listener for F
where
    F: Fn(&Event) + 'static,
{
    type Product = ListenerProduct<Self>;

    fn build(self) -> Self::Product {
        ListenerProduct {
            closure: self,
            eid: EventId::next(),
        }
    }

    fn update(self, p: &mut ListenerProduct<Self>) {
        p.closure = self;
    }
}

pub struct ListenerProduct<F> {
    closure: F,
    eid: EventId,
}

impl<F> ListenerHandle for ListenerProduct<F>
where
    F: Fn(&Event) + 'static,
{
    fn eid(&self) -> Option<EventId> {
        Some(self.eid)
    }
}

impl<F> Trigger for ListenerProduct<F>
where
    F: Fn(&Event) + 'static,
{
    fn trigger(&self, event: &Event) -> Option<Then> {
        if event.eid() == self.eid {
            (self.closure)(event);

            Some(Then::Stop)
        } else {
            None
        }
    }
}

/// Placeholder for elements that don't listen to anything.
pub struct NoListener;

impl Listener for NoListener {
    type Product = NoListener;

    fn build(self) -> NoListener {
        self
    }

    fn update(self, _: &mut NoListener) {}
}

impl ListenerHandle for NoListener {
    fn eid(&self) -> Option<EventId> {
        None
    }
}

impl Trigger for NoListener {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn closure_fires_only_for_its_own_id() {
        let hits = Rc::new(Cell::new(0));
        let product = {
            let hits = hits.clone();
            (move |_: &Event| hits.set(hits.get() + 1)).build()
        };

        let eid = product.eid().unwrap();
        let other = EventId(eid.get().wrapping_add(1));

        assert_eq!(product.trigger(&Event::new(other, "")), None);
        assert_eq!(hits.get(), 0);

        assert_eq!(product.trigger(&Event::new(eid, "")), Some(Then::Stop));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn update_keeps_the_id() {
        fn noop(_: &Event) {}

        let mut product = (noop as fn(&Event)).build();
        let eid = product.eid();

        (noop as fn(&Event)).update(&mut product);

        assert_eq!(product.eid(), eid);
    }

    #[test]
    fn no_listener_has_no_id() {
        assert_eq!(NoListener.build().eid(), None);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dom::{self, Mountable, Node};
use crate::event::Event;
use crate::{markup, Error, View};

/// Describes whether or not a component should be rendered after state changes.
/// For uses see:
///
/// * [`Hook::bind`](crate::state::Hook::bind)
/// * [`Signal::update`](crate::state::Signal::update)
pub trait ShouldRender: 'static {
    fn should_render(self) -> bool;

    fn then(self) -> Then;
}

/// Closures without return type always update their view.
impl ShouldRender for () {
    fn should_render(self) -> bool {
        true
    }

    fn then(self) -> Then {
        Then::Render
    }
}

/// An enum that implements the [`ShouldRender`] trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Then {
    /// This is a silent update
    Stop,
    /// Render the view after this update
    Render,
}

impl ShouldRender for Then {
    fn should_render(self) -> bool {
        match self {
            Then::Stop => false,
            Then::Render => true,
        }
    }

    fn then(self) -> Then {
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct StateId(pub(crate) u32);

impl StateId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU32, Ordering};

        static ID: AtomicU32 = AtomicU32::new(0);

        StateId(ID.fetch_add(1, Ordering::Relaxed))
    }
}

pub trait Trigger {
    /// Deliver `event` to the listener it addresses, if that listener lives in
    /// this product. Returns `None` when the event didn't reach any listener.
    fn trigger(&self, _: &Event) -> Option<Then> {
        None
    }
}

/// Render flag shared by one [`App`] and every state built under it.
pub(crate) type Pending = Rc<Cell<bool>>;

thread_local! {
    static MOUNTING: RefCell<Option<Pending>> = const { RefCell::new(None) };
}

/// Run `then` with `pending` as the render flag of any state it builds.
fn mounting<R>(pending: &Pending, then: impl FnOnce() -> R) -> R {
    let outer = MOUNTING.replace(Some(pending.clone()));

    let ret = then();

    MOUNTING.set(outer);

    ret
}

/// The render flag of the app currently building, or a detached one
/// for state built outside of any app.
pub(crate) fn pending_flag() -> Pending {
    MOUNTING.with_borrow(|pending| pending.clone()).unwrap_or_default()
}

/// Object-safe view of an [`App`], for hosts that need to store one
/// without naming its render function.
pub trait Runtime {
    /// Deliver `event` and re-render if the handler asks for it.
    fn dispatch(&mut self, event: &Event) -> Result<Then, Error>;

    /// Activate the first listening element whose text content is `label`.
    fn activate(&mut self, label: &str) -> Result<Then, Error>;

    /// Render if any [`Signal`](crate::state::Signal) has requested it since the last render.
    fn flush(&mut self) -> bool;

    /// Snapshot of the mounted document.
    fn document(&self) -> Vec<Node>;

    /// The mounted document as HTML.
    fn html(&self) -> String {
        markup::to_html(&self.document())
    }
}

/// Owns the root product and re-renders it from `render` on demand.
pub struct App<F, P> {
    render: F,
    product: P,
    pending: Pending,
}

impl<F, V> App<F, V::Product>
where
    F: Fn() -> V,
    V: View,
{
    /// Build the view returned by `render` and mount it.
    pub fn new(render: F) -> Self {
        let pending = Pending::default();
        let product = mounting(&pending, || render().build());

        // Nothing is pending for a view that was just built.
        pending.set(false);

        log::debug!("mounted {}", std::any::type_name::<V>());

        App {
            render,
            product,
            pending,
        }
    }

    /// Re-run the render function and update the mounted product.
    pub fn update(&mut self) {
        mounting(&self.pending, || (self.render)().update(&mut self.product));

        self.pending.set(false);
    }

    pub fn dispatch(&mut self, event: &Event) -> Result<Then, Error> {
        let Some(then) = self.product.trigger(event) else {
            return Err(Error::Unhandled(event.eid()));
        };

        log::debug!("dispatched {} ({then:?})", event.eid());

        if then.should_render() || self.pending.take() {
            self.update();
        }

        Ok(then)
    }

    pub fn activate(&mut self, label: &str) -> Result<Then, Error> {
        let eid = self
            .document()
            .iter()
            .find_map(|node| node.find_listener(label))
            .ok_or_else(|| Error::NoSuchTarget(label.to_owned()))?;

        self.dispatch(&Event::new(eid, label))
    }

    pub fn flush(&mut self) -> bool {
        if self.pending.take() {
            self.update();
            true
        } else {
            false
        }
    }

    pub fn document(&self) -> Vec<Node> {
        let mut out = Vec::new();
        self.product.mount(&mut out);
        out
    }

    pub fn html(&self) -> String {
        markup::to_html(&self.document())
    }

    /// Text content of the whole document.
    pub fn text(&self) -> String {
        dom::text_content(&self.document())
    }
}

impl<F, V> Runtime for App<F, V::Product>
where
    F: Fn() -> V,
    V: View,
{
    fn dispatch(&mut self, event: &Event) -> Result<Then, Error> {
        App::dispatch(self, event)
    }

    fn activate(&mut self, label: &str) -> Result<Then, Error> {
        App::activate(self, label)
    }

    fn flush(&mut self) -> bool {
        App::flush(self)
    }

    fn document(&self) -> Vec<Node> {
        App::document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventId;
    use crate::html::{button, div, p};
    use crate::state::{stateful, Hook, Signal};

    fn counter() -> impl View {
        stateful(0_u32, |count: &Hook<u32>| {
            div((
                p(count.get().to_string()),
                button("+").onclick(count.bind(|count, _| *count += 1)),
                button("silent").onclick(count.bind(|count, _| {
                    *count += 10;
                    Then::Stop
                })),
            ))
        })
    }

    #[test]
    fn activation_renders() {
        let mut app = App::new(counter);

        assert_eq!(app.text(), "0+silent");
        assert_eq!(app.activate("+"), Ok(Then::Render));
        assert_eq!(app.activate("+"), Ok(Then::Render));
        assert_eq!(app.text(), "2+silent");
    }

    #[test]
    fn stop_skips_render_until_next_update() {
        let mut app = App::new(counter);

        assert_eq!(app.activate("silent"), Ok(Then::Stop));
        assert_eq!(app.text(), "0+silent");

        app.update();
        assert_eq!(app.text(), "10+silent");
    }

    #[test]
    fn unknown_targets_are_errors() {
        let mut app = App::new(counter);

        assert_eq!(
            app.activate("-"),
            Err(Error::NoSuchTarget("-".to_owned()))
        );

        let stray = EventId(u32::MAX);
        assert_eq!(
            app.dispatch(&Event::new(stray, "+")),
            Err(Error::Unhandled(stray))
        );
    }

    #[test]
    fn runtime_is_object_safe() {
        let mut app: Box<dyn Runtime> = Box::new(App::new(counter));

        app.activate("+").unwrap();

        assert_eq!(app.html(), "<div><p>1</p><button>+</button><button>silent</button></div>");
        assert!(!app.flush());
    }

    fn labelled(slot: Rc<RefCell<Option<Signal<String>>>>) -> impl View {
        stateful(|| String::from("first"), |label: &Hook<String>| p(label.read().clone()))
            .once(move |signal| *slot.borrow_mut() = Some(signal))
    }

    #[test]
    fn signals_only_flush_their_own_app() {
        let slot = Rc::new(RefCell::new(None));
        let mut first = App::new({
            let slot = slot.clone();
            move || labelled(slot.clone())
        });
        let signal = slot.borrow_mut().take().unwrap();

        signal.set("second".into());

        // Mounting and flushing another app on this thread leaves the request alone.
        let mut other = App::new(counter);
        assert!(!other.flush());
        other.update();

        assert!(first.flush());
        assert_eq!(first.html(), "<p>second</p>");
        assert!(!first.flush());
    }

    #[test]
    fn dispatch_elsewhere_keeps_render_request() {
        let slot = Rc::new(RefCell::new(None));
        let mut app = App::new(counter);
        let mut other = App::new({
            let slot = slot.clone();
            move || labelled(slot.clone())
        });
        let signal = slot.borrow_mut().take().unwrap();

        signal.update(|label| label.push('!'));
        app.activate("+").unwrap();

        assert!(!app.flush());
        assert!(other.flush());
        assert_eq!(other.text(), "first!");
    }
}

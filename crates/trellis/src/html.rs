// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element builders
//!
//! Elements take their children as a single [`View`]. Tuples of views are views
//! themselves, so several children are passed as a tuple:
//!
//! ```
//! use trellis::html::{div, p};
//! use trellis::prelude::*;
//!
//! let app = App::new(|| div((p("Hello"), p("World"))).class("flex"));
//!
//! assert_eq!(app.html(), "<div class=\"flex\"><p>Hello</p><p>World</p></div>");
//! ```

use crate::dom::{Mountable, Node};
use crate::event::{Event, Listener, ListenerHandle, NoListener};
use crate::runtime::{Then, Trigger};
use crate::View;

pub struct Element<C, L = NoListener> {
    tag: &'static str,
    class: Option<&'static str>,
    children: C,
    listener: L,
}

/// Create an element with arbitrary tag name.
pub fn element<C: View>(tag: &'static str, children: C) -> Element<C> {
    Element {
        tag,
        class: None,
        children,
        listener: NoListener,
    }
}

macro_rules! elements {
    ($($tag:ident),*) => {
        $(
            #[doc = concat!("Create a `<", stringify!($tag), ">` element.")]
            pub fn $tag<C: View>(children: C) -> Element<C> {
                element(stringify!($tag), children)
            }
        )*
    };
}

elements!(div, p, button, span, section);

impl<C, L> Element<C, L> {
    /// Set the `class` attribute.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Attach a listener invoked whenever this element is activated.
    pub fn onclick<M>(self, listener: M) -> Element<C, M>
    where
        M: Listener,
    {
        Element {
            tag: self.tag,
            class: self.class,
            children: self.children,
            listener,
        }
    }
}

pub struct ElementProduct<C, L> {
    tag: &'static str,
    class: Option<&'static str>,
    children: C,
    listener: L,
}

impl<C, L> View for Element<C, L>
where
    C: View,
    L: Listener,
{
    type Product = ElementProduct<C::Product, L::Product>;

    fn build(self) -> Self::Product {
        ElementProduct {
            tag: self.tag,
            class: self.class,
            children: self.children.build(),
            listener: self.listener.build(),
        }
    }

    fn update(self, p: &mut Self::Product) {
        p.tag = self.tag;
        p.class = self.class;
        self.children.update(&mut p.children);
        self.listener.update(&mut p.listener);
    }
}

impl<C, L> Trigger for ElementProduct<C, L>
where
    C: Mountable,
    L: ListenerHandle,
{
    fn trigger(&self, event: &Event) -> Option<Then> {
        self.listener
            .trigger(event)
            .or_else(|| self.children.trigger(event))
    }
}

impl<C, L> Mountable for ElementProduct<C, L>
where
    C: Mountable,
    L: ListenerHandle,
{
    fn mount(&self, out: &mut Vec<Node>) {
        let mut children = Vec::new();
        self.children.mount(&mut children);

        out.push(Node::Element {
            tag: self.tag,
            class: self.class,
            listener: self.listener.eid(),
            children,
        });
    }
}

impl View for () {
    type Product = ();

    fn build(self) {}

    fn update(self, _: &mut ()) {}
}

macro_rules! tuple {
    ($($var:ident $idx:tt),*) => {
        impl<$($var),*> View for ($($var,)*)
        where
            $(
                $var: View,
            )*
        {
            type Product = ($($var::Product,)*);

            fn build(self) -> Self::Product {
                ($(self.$idx.build(),)*)
            }

            fn update(self, p: &mut Self::Product) {
                $(
                    self.$idx.update(&mut p.$idx);
                )*
            }
        }

        impl<$($var),*> Trigger for ($($var,)*)
        where
            $(
                $var: Mountable,
            )*
        {
            fn trigger(&self, event: &Event) -> Option<Then> {
                None
                $(
                    .or_else(|| self.$idx.trigger(event))
                )*
            }
        }

        impl<$($var),*> Mountable for ($($var,)*)
        where
            $(
                $var: Mountable,
            )*
        {
            fn mount(&self, out: &mut Vec<Node>) {
                $(
                    self.$idx.mount(out);
                )*
            }
        }
    };
}

tuple!(A 0);
tuple!(A 0, B 1);
tuple!(A 0, B 1, C 2);
tuple!(A 0, B 1, C 2, D 3);
tuple!(A 0, B 1, C 2, D 3, E 4);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::runtime::App;

    #[test]
    fn nested_elements_mount_in_order() {
        let app = App::new(|| {
            section((
                p("one").class("p-2"),
                div((span("two"), span("three"))),
                "four",
            ))
        });

        assert_eq!(
            app.html(),
            "<section><p class=\"p-2\">one</p><div><span>two</span><span>three</span></div>four</section>"
        );
    }

    #[test]
    fn listener_id_is_mounted() {
        let app = App::new(|| div((p("x"), button("go").onclick(|_: &Event| ()))));

        let doc = app.document();
        let Node::Element { children, .. } = &doc[0] else {
            panic!("expected an element");
        };

        assert!(matches!(children[0], Node::Element { listener: None, .. }));
        assert!(matches!(
            children[1],
            Node::Element {
                listener: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn nested_listener_receives_event() {
        let hits = Rc::new(Cell::new(0));
        let mut app = App::new({
            let hits = hits.clone();
            move || {
                let hits = hits.clone();
                div(div(button("deep").onclick(move |e: &Event| {
                    assert_eq!(e.target_text(), "deep");
                    hits.set(hits.get() + 1);
                })))
            }
        });

        app.activate("deep").unwrap();
        app.activate("deep").unwrap();

        assert_eq!(hits.get(), 2);
    }
}

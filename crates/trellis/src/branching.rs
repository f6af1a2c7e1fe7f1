// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Utilities for conditional rendering
//!
//! Builders produce distinct types, so you will run into compile errors when branching:
//!
//! ```compile_fail
//! # use trellis::prelude::*;
//! # use trellis::html::{div, p};
//! fn conditional(illuminatus: bool) -> impl View {
//!     if illuminatus {
//!         p("It was the year when they finally immanentized the Eschaton.")
//!     } else {
//!         div(p("It was love at first sight."))
//!     }
//! }
//! ```
//!
//! Wrap the arms in [`Branch2`] to give them the same type:
//!
//! ```
//! # use trellis::prelude::*;
//! # use trellis::html::{div, p};
//! use trellis::branching::Branch2;
//!
//! fn conditional(illuminatus: bool) -> impl View {
//!     if illuminatus {
//!         Branch2::A(p("It was the year when they finally immanentized the Eschaton."))
//!     } else {
//!         Branch2::B(div(p("It was love at first sight.")))
//!     }
//! }
//! ```
//!
//! Matching on a two-variant enum and mapping each variant to its own `Branch2` variant keeps the
//! match exhaustive, so there is no fallback arm to get wrong.
//!
//! For simple optional renders you can always use the standard library [`Option`], which
//! renders `None` as [`Empty`].

use crate::dom::{Mountable, Node};
use crate::event::Event;
use crate::runtime::{Then, Trigger};
use crate::View;

macro_rules! branch {
    ($name:ident < $($var:ident),* >) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name<$($var),*> {
            $(
                $var($var),
            )*
        }

        impl<$($var),*> View for $name<$($var),*>
        where
            $(
                $var: View,
            )*
        {
            type Product = $name<$($var::Product),*>;

            fn build(self) -> Self::Product {
                match self {
                    $(
                        $name::$var(view) => $name::$var(view.build()),
                    )*
                }
            }

            fn update(self, p: &mut Self::Product) {
                match (self, p) {
                    $(
                        ($name::$var(view), $name::$var(p)) => view.update(p),
                    )*

                    (view, p) => {
                        log::debug!("switching branch of {}", std::any::type_name::<Self>());

                        *p = view.build();
                    }
                }
            }
        }

        impl<$($var),*> Trigger for $name<$($var),*>
        where
            $(
                $var: Mountable,
            )*
        {
            fn trigger(&self, event: &Event) -> Option<Then> {
                match self {
                    $(
                        $name::$var(p) => p.trigger(event),
                    )*
                }
            }
        }

        impl<$($var),*> Mountable for $name<$($var),*>
        where
            $(
                $var: Mountable,
            )*
        {
            fn mount(&self, out: &mut Vec<Node>) {
                match self {
                    $(
                        $name::$var(p) => p.mount(out),
                    )*
                }
            }
        }
    };
}

branch!(Branch2<A, B>);

/// A view that renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

/// Product of [`Empty`].
pub struct EmptyNode;

impl Trigger for EmptyNode {}

impl Mountable for EmptyNode {
    fn mount(&self, _: &mut Vec<Node>) {}
}

impl View for Empty {
    type Product = EmptyNode;

    fn build(self) -> EmptyNode {
        EmptyNode
    }

    fn update(self, _: &mut EmptyNode) {}
}

impl<T: View> View for Option<T> {
    type Product = Branch2<T::Product, EmptyNode>;

    fn build(self) -> Self::Product {
        match self {
            Some(view) => Branch2::A(view.build()),
            None => Branch2::B(EmptyNode),
        }
    }

    fn update(self, p: &mut Self::Product) {
        match (self, p) {
            (Some(view), Branch2::A(p)) => view.update(p),
            (None, Branch2::B(_)) => (),

            (view, p) => *p = view.build(),
        }
    }
}

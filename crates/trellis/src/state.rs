// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Utilities for building stateful views
//!
//! Plain views are transient: there is no way to change what they display short of
//! the parent re-rendering them. To get around this the [`stateful`] function creates
//! views that own some arbitrary mutable state.
//!
//! The state lives in the mounted product. Render functions read it through a
//! [`Hook`], handlers write it through [`Hook::bind`], and code outside of the view
//! tree can hold on to a [`Signal`] obtained from [`Stateful::once`].

use crate::dom::{Mountable, Node};
use crate::event::Event;
use crate::runtime::{Then, Trigger};
use crate::View;

mod hook;
mod into_state;

pub use hook::{Bound, BoundProduct, Hook, Signal};
pub use into_state::IntoState;

/// Create a stateful [`View`] over some mutable state. The state
/// needs to be created using the [`IntoState`] trait.
///
/// ```
/// # use trellis::prelude::*;
/// // `IntoState` is implemented for primitive values
/// let int_view = stateful(0, |count: &Hook<i32>| count.get().to_string());
///
/// // Another easy way to create arbitrary state is using a closure...
/// let string_view = stateful(|| String::from("foo"), |text: &Hook<String>| text.read().clone());
///
/// // ...or a function with no parameters
/// let vec_view = stateful(Vec::new, |counts: &Hook<Vec<i32>>| counts.read().len().to_string());
/// ```
pub fn stateful<S, F, V>(state: S, render: F) -> Stateful<S, F>
where
    S: IntoState,
    F: Fn(&Hook<S::State>) -> V,
    V: View,
{
    Stateful { state, render }
}

pub struct Stateful<S, F> {
    state: S,
    render: F,
}

pub struct StatefulProduct<S, P> {
    state: Hook<S>,
    product: P,
}

impl<S, F, V> View for Stateful<S, F>
where
    S: IntoState,
    F: Fn(&Hook<S::State>) -> V,
    V: View,
{
    type Product = StatefulProduct<S::State, V::Product>;

    fn build(self) -> Self::Product {
        let state = Hook::new(self.state.init());
        let product = (self.render)(&state).build();

        StatefulProduct { state, product }
    }

    fn update(self, p: &mut Self::Product) {
        (self.render)(&p.state).update(&mut p.product)
    }
}

impl<S, P> Trigger for StatefulProduct<S, P>
where
    S: 'static,
    P: Mountable,
{
    fn trigger(&self, event: &Event) -> Option<Then> {
        self.product.trigger(event)
    }
}

impl<S, P> Mountable for StatefulProduct<S, P>
where
    S: 'static,
    P: Mountable,
{
    fn mount(&self, out: &mut Vec<Node>) {
        self.product.mount(out)
    }
}

impl<S, R> Stateful<S, R>
where
    S: IntoState,
{
    /// Run `handler` once, when this view is first built. Whatever the handler
    /// returns is kept alive for as long as the view stays mounted.
    pub fn once<F, D>(self, handler: F) -> Once<S, R, F>
    where
        F: FnOnce(Signal<S::State>) -> D,
    {
        Once {
            with_state: self,
            handler,
        }
    }
}

pub struct Once<S, R, F> {
    with_state: Stateful<S, R>,
    handler: F,
}

pub struct OnceProduct<S, P, D> {
    inner: StatefulProduct<S, P>,
    _no_drop: D,
}

impl<S, P, D> Trigger for OnceProduct<S, P, D>
where
    StatefulProduct<S, P>: Mountable,
{
    fn trigger(&self, event: &Event) -> Option<Then> {
        self.inner.trigger(event)
    }
}

impl<S, P, D> Mountable for OnceProduct<S, P, D>
where
    StatefulProduct<S, P>: Mountable,
    D: 'static,
{
    fn mount(&self, out: &mut Vec<Node>) {
        self.inner.mount(out)
    }
}

impl<S, R, F, V, D> View for Once<S, R, F>
where
    S: IntoState,
    R: Fn(&Hook<S::State>) -> V,
    F: FnOnce(Signal<S::State>) -> D,
    V: View,
    D: 'static,
{
    type Product = OnceProduct<S::State, V::Product, D>;

    fn build(self) -> Self::Product {
        let inner = self.with_state.build();
        let _no_drop = (self.handler)(inner.state.signal());

        OnceProduct { inner, _no_drop }
    }

    fn update(self, p: &mut Self::Product) {
        self.with_state.update(&mut p.inner)
    }
}

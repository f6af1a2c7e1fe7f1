// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Trellis
//!
//! _Declarative views over owned component state._
//!
//! Key features:
//!
//! * Element builders that compose into opaque [`impl View`](View) types.
//! * Per-component state created with [`stateful`](state::stateful) and written by bound handlers.
//! * Exhaustive two-way conditional rendering with [`Branch2`](branching::Branch2).
//! * A host-independent [`Node`](dom::Node) snapshot, serializable to HTML or JSON.
//!
//! ### Example
//!
//! ```
//! use trellis::prelude::*;
//! use trellis::html::{button, div, p};
//!
//! fn counter() -> impl View {
//!     stateful(0_u32, |count: &Hook<u32>| {
//!         div((
//!             p(count.get().to_string()),
//!             button("Increment").onclick(count.bind(|count, _| *count += 1)),
//!         ))
//!     })
//! }
//!
//! let mut app = App::new(counter);
//! assert_eq!(app.html(), "<div><p>0</p><button>Increment</button></div>");
//!
//! app.activate("Increment").unwrap();
//! assert_eq!(app.html(), "<div><p>1</p><button>Increment</button></div>");
//! ```
//!
//! The render closure passed to [`stateful`](state::stateful) receives a [`&Hook`](state::Hook)
//! that can be read from and bound to. Views own the values they display, so read what you need
//! out of the hook and hand it to the builders.
//!
//! ### Conditional Rendering
//!
//! Every arm of an `if` or `match` has to produce the same type. Wrap each arm in a variant
//! of [`Branch2`](branching::Branch2); switching arms rebuilds the subtree, staying in the
//! same arm updates it in place.
//!
//! ### Hosts
//!
//! The [`App`](runtime::App) runtime owns the mounted product tree. Tests and the command line
//! drive it directly, and on `wasm32` the [`web`] module mounts it into the document body.

pub mod branching;
pub mod diff;
pub mod dom;
pub mod error;
pub mod event;
pub mod html;
pub mod markup;
pub mod runtime;
pub mod state;

mod value;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::Error;

/// The prelude module with most commonly used types.
///
/// Intended use is:
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::branching::{Branch2, Empty};
    pub use crate::event::{Event, Listener};
    pub use crate::runtime::{App, Runtime, Then};
    pub use crate::state::{stateful, Hook, IntoState, Signal};
    pub use crate::View;
}

use dom::Mountable;

/// Trait that describes types that can be rendered into the document.
pub trait View {
    /// The product holds the mounted state of this view and
    /// any data it needs to update itself.
    type Product: Mountable;

    /// Build a product that can be mounted from this type.
    fn build(self) -> Self::Product;

    /// Update the product, changing it only where values differ.
    fn update(self, p: &mut Self::Product);
}

/// Shorthand for binding a handler to a [`Hook`](state::Hook).
///
/// ```
/// # use trellis::prelude::*;
/// # use trellis::html::button;
/// fn reset(count: &Hook<u32>) -> impl View {
///     button("Reset").onclick(trellis::event!(*count = 0))
/// }
/// ```
#[macro_export]
macro_rules! event {
    (move |$state:ident| $body:expr) => {
        $state.bind(move |$state, _| $body)
    };

    (move |$state:ident, $e:tt $(: $e_ty:ty)?| $body:expr) => {
        $state.bind(move |$state, $e $(: $e_ty)*| $body)
    };

    (|$state:ident| $body:expr) => {
        $state.bind(|$state, _| $body)
    };

    (|$state:ident, $e:tt $(: $e_ty:ty)?| $body:expr) => {
        $state.bind(|$state, $e $(: $e_ty)*| $body)
    };

    (*$state:ident $($body:tt)+) => {
        $state.bind(move |$state, _| *$state $($body)*)
    };

    ($state:ident $($body:tt)+) => {
        $state.bind(move |$state, _| $state $($body)*)
    };
}

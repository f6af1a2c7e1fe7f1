// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two small pages built from owned component state:
//!
//! * [`simple_view`]: a title and a button that replaces it.
//! * [`complex_view`]: a title, a subtitle and an image reference, with a selector
//!   choosing which of two sub-views is shown.
//!
//! Both use the shared [`action_button`].

use trellis::View;

mod button;
mod complex;
mod simple;

pub use button::{action_button, ActionButton};
pub use complex::{
    complex_view, complex_view_with, current_view, ActiveView, ComplexState, ParseViewError,
};
pub use simple::{simple_view, SimpleState};

/// Both pages, one after the other.
pub fn showcase() -> impl View {
    (simple_view(), complex_view())
}

#[cfg(target_arch = "wasm32")]
mod start {
    use wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(start)]
    fn trellis_main() {
        trellis::web::start(super::showcase);
    }
}

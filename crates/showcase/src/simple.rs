// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use trellis::html::{div, p};
use trellis::prelude::*;

use crate::button::action_button;

pub(crate) const DEFAULT_TITLE: &str = "Hello, World!";
pub(crate) const REPLACEMENT_TITLE: &str = "Now THIS is web development!";
pub(crate) const EDIT_LABEL: &str = "Edit on page";

const TITLE_CLASS: &str = "p-2 rounded bg-gray text-red";

/// State of the [`simple_view`]: a single title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleState {
    title: String,
}

impl Default for SimpleState {
    fn default() -> Self {
        SimpleState {
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl SimpleState {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title with a fixed line, whatever it was before.
    pub fn replace_title(&mut self) {
        REPLACEMENT_TITLE.clone_into(&mut self.title);
    }
}

pub fn simple_view() -> impl View {
    stateful(SimpleState::default, render)
}

fn render(state: &Hook<SimpleState>) -> impl View {
    let title = state.read().title.clone();

    div((
        p(title).class(TITLE_CLASS),
        action_button(EDIT_LABEL, state.bind(|state, _| state.replace_title())),
    ))
    .class("flex flex-col justify-center")
}

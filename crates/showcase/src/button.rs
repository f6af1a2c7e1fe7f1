// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use trellis::event::Listener;
use trellis::html::{button, Element};

pub(crate) const BUTTON_CLASS: &str = "p-2 rounded bg-gray text-red";

/// A labelled button. Stateless: all it does is hand activations to `action`.
pub type ActionButton<L> = Element<&'static str, L>;

/// Build an [`ActionButton`] showing `label` and invoking `action` once per activation.
pub fn action_button<L>(label: &'static str, action: L) -> ActionButton<L>
where
    L: Listener,
{
    button(label).class(BUTTON_CLASS).onclick(action)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use trellis::prelude::*;

    use super::*;

    #[test]
    fn renders_label_with_button_class() {
        let app = App::new(|| action_button("Change title", |_: &Event| ()));

        assert_eq!(
            app.html(),
            "<button class=\"p-2 rounded bg-gray text-red\">Change title</button>"
        );
    }

    #[test]
    fn invokes_action_once_per_activation() {
        let calls = Rc::new(Cell::new(0));
        let mut app = App::new({
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                action_button("Go", move |_: &Event| calls.set(calls.get() + 1))
            }
        });

        app.activate("Go").unwrap();
        assert_eq!(calls.get(), 1);

        app.activate("Go").unwrap();
        app.activate("Go").unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn bound_action_writes_owner_state() {
        let mut app = App::new(|| {
            stateful(0_u32, |count: &Hook<u32>| {
                (
                    count.get().to_string(),
                    action_button("+1", count.bind(|count, _| *count += 1)),
                )
            })
        });

        app.activate("+1").unwrap();
        app.activate("+1").unwrap();

        assert_eq!(app.text(), "2+1");
    }
}

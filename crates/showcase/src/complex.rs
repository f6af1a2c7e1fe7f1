// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use trellis::html::{div, p};
use trellis::prelude::*;

use crate::button::action_button;

pub(crate) const DEFAULT_TITLE: &str = "Default title";
pub(crate) const DEFAULT_SUBTITLE: &str = "Default subtitle";
pub(crate) const DEFAULT_IMAGE: &str = "https://www.imagelocation.com.png";
pub(crate) const REPLACEMENT_IMAGE: &str = "https://www.anotherimagelocation.com.png";

pub(crate) const CHANGE_TITLE: &str = "Change title";
pub(crate) const CHANGE_SUBTITLE: &str = "Change subtitle";
pub(crate) const CHANGE_IMAGE: &str = "Change image";

const CONTAINER_CLASS: &str = "p-2 flex flex-col justify-center border rounded";

/// Which of the two sub-views the [`complex_view`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    One,
    Two,
}

impl ActiveView {
    pub const fn name(self) -> &'static str {
        match self {
            ActiveView::One => "viewOne",
            ActiveView::Two => "viewTwo",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view `{0}`, expected `viewOne` or `viewTwo`")]
pub struct ParseViewError(String);

impl FromStr for ActiveView {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewOne" => Ok(ActiveView::One),
            "viewTwo" => Ok(ActiveView::Two),
            _ => Err(ParseViewError(s.to_owned())),
        }
    }
}

/// State of the [`complex_view`]. Every slot is written by exactly one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexState {
    title: String,
    subtitle: String,
    image: String,
    view: ActiveView,
}

impl Default for ComplexState {
    fn default() -> Self {
        ComplexState {
            title: DEFAULT_TITLE.to_owned(),
            subtitle: DEFAULT_SUBTITLE.to_owned(),
            image: DEFAULT_IMAGE.to_owned(),
            view: ActiveView::default(),
        }
    }
}

impl ComplexState {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn active_view(&self) -> ActiveView {
        self.view
    }

    pub fn set_new_title(&mut self, text: &str) {
        text.clone_into(&mut self.title);
    }

    pub fn set_new_subtitle(&mut self, text: &str) {
        text.clone_into(&mut self.subtitle);
    }

    /// Always stores the second image URL. `text` is accepted and ignored.
    pub fn set_new_image(&mut self, _text: &str) {
        REPLACEMENT_IMAGE.clone_into(&mut self.image);
    }

    /// Nothing on the page switches views; this is for whoever holds the
    /// [`Signal`] from [`complex_view_with`].
    pub fn set_active_view(&mut self, view: ActiveView) {
        log::debug!("active view {} -> {view}", self.view);

        self.view = view;
    }
}

/// The sub-view selected by `state`, with its button bound through `hook`.
pub fn current_view(state: &ComplexState, hook: &Hook<ComplexState>) -> impl View {
    match state.view {
        ActiveView::One => Branch2::A(div((
            p(state.subtitle.clone()),
            action_button(
                CHANGE_SUBTITLE,
                hook.bind(|state, e| state.set_new_subtitle(e.target_text())),
            ),
        ))),
        ActiveView::Two => Branch2::B(div((
            p(state.image.clone()),
            action_button(
                CHANGE_IMAGE,
                hook.bind(|state, e| state.set_new_image(e.target_text())),
            ),
        ))),
    }
}

fn render(hook: &Hook<ComplexState>) -> impl View {
    let state = hook.read();

    div((
        p(state.title.clone()),
        action_button(
            CHANGE_TITLE,
            hook.bind(|state, e| state.set_new_title(e.target_text())),
        ),
        current_view(&state, hook),
    ))
    .class(CONTAINER_CLASS)
}

pub fn complex_view() -> impl View {
    stateful(ComplexState::default, render)
}

/// Same as [`complex_view`], but hands a [`Signal`] to `handler` when the view is
/// first built, so the state can be assigned from outside of the page.
pub fn complex_view_with<F, D>(handler: F) -> impl View
where
    F: FnOnce(Signal<ComplexState>) -> D,
    D: 'static,
{
    stateful(ComplexState::default, render).once(handler)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use trellis::dom::Node;

    use super::*;

    type Slot = Rc<RefCell<Option<Signal<ComplexState>>>>;

    fn mounted() -> (impl Runtime, Signal<ComplexState>) {
        let slot: Slot = Rc::default();
        let app = App::new({
            let slot = slot.clone();
            move || {
                let slot = slot.clone();
                complex_view_with(move |signal| *slot.borrow_mut() = Some(signal))
            }
        });
        let signal = slot.borrow_mut().take().unwrap();

        (app, signal)
    }

    fn paragraphs(doc: &[Node]) -> Vec<String> {
        fn walk(node: &Node, out: &mut Vec<String>) {
            if let Node::Element { tag, children, .. } = node {
                if *tag == "p" {
                    out.push(node.text_content());
                }
                for child in children {
                    walk(child, out);
                }
            }
        }

        let mut out = Vec::new();
        for node in doc {
            walk(node, &mut out);
        }
        out
    }

    #[test]
    fn title_tracks_last_write() {
        let mut state = ComplexState::default();

        for text in ["Hi", "", "Now THIS is web development!", "<b>"] {
            state.set_new_title(text);
            assert_eq!(state.title(), text);
        }
    }

    #[test]
    fn image_ignores_its_argument() {
        for text in ["", "not a url", "https://example.com/cat.png"] {
            let mut state = ComplexState::default();
            state.set_new_image(text);

            assert_eq!(state.image(), "https://www.anotherimagelocation.com.png");
        }
    }

    #[test]
    fn view_names_round_trip() {
        assert_eq!("viewOne".parse(), Ok(ActiveView::One));
        assert_eq!("viewTwo".parse(), Ok(ActiveView::Two));
        assert_eq!(ActiveView::Two.to_string(), "viewTwo");
        assert_eq!(
            "viewThree".parse::<ActiveView>(),
            Err(ParseViewError("viewThree".into()))
        );
    }

    #[test]
    fn initial_render_then_new_title() {
        let (mut app, signal) = mounted();

        assert_eq!(
            paragraphs(&app.document()),
            ["Default title", "Default subtitle"]
        );

        signal.update(|state| state.set_new_title("Hi"));
        assert!(app.flush());

        assert_eq!(paragraphs(&app.document()), ["Hi", "Default subtitle"]);
        assert!(app.activate("Change subtitle").is_ok());
    }

    #[test]
    fn view_one_hides_image() {
        let (app, _signal) = mounted();
        let html = app.html();

        assert!(html.contains("Default subtitle"));
        assert!(html.contains("Change subtitle"));
        assert!(!html.contains(DEFAULT_IMAGE));
        assert!(!html.contains("Change image"));
    }

    #[test]
    fn view_two_hides_subtitle() {
        let (mut app, signal) = mounted();

        signal.update(|state| state.set_active_view(ActiveView::Two));
        app.flush();

        let html = app.html();
        assert!(html.contains(DEFAULT_IMAGE));
        assert!(html.contains("Change image"));
        assert!(!html.contains("Default subtitle"));
        assert!(!html.contains("Change subtitle"));
    }

    #[test]
    fn selector_survives_another_mount() {
        let (mut app, signal) = mounted();

        signal.update(|state| state.set_active_view(ActiveView::Two));

        let mut other = App::new(complex_view);
        assert!(!other.flush());

        assert!(app.flush());
        assert!(app.html().contains(DEFAULT_IMAGE));
        assert!(!other.html().contains(DEFAULT_IMAGE));
    }

    #[test]
    fn buttons_pass_their_label() {
        let (mut app, signal) = mounted();

        app.activate("Change title").unwrap();
        app.activate("Change subtitle").unwrap();
        assert_eq!(
            paragraphs(&app.document()),
            ["Change title", "Change subtitle"]
        );

        signal.update(|state| state.set_active_view(ActiveView::Two));
        app.flush();
        app.activate("Change image").unwrap();
        assert_eq!(
            paragraphs(&app.document()),
            ["Change title", "https://www.anotherimagelocation.com.png"]
        );
    }

    #[test]
    fn rerender_without_changes_is_identical() {
        let (mut app, _signal) = mounted();

        app.activate("Change title").unwrap();
        let once = app.document();

        // Writes the same title again, so the render sees unchanged state.
        app.activate("Change title").unwrap();
        assert_eq!(app.document(), once);
    }

    #[test]
    fn current_view_is_deterministic() {
        let initial = ComplexState::default();
        let html = |state: &ComplexState| {
            let state = state.clone();
            App::new(move || {
                let state = state.clone();
                stateful(move || state, |hook: &Hook<ComplexState>| {
                    current_view(&hook.read(), hook)
                })
            })
            .html()
        };

        assert_eq!(html(&initial), html(&initial));
        assert_eq!(
            html(&initial),
            "<div><p>Default subtitle</p>\
             <button class=\"p-2 rounded bg-gray text-red\">Change subtitle</button></div>"
        );
    }
}

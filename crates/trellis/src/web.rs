// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser host: mounts an [`App`] under the document `body`.
//!
//! The snapshot is mounted under a single container element. After every render the
//! host [diffs](crate::diff) the new snapshot against the mounted one and patches
//! only what changed. Elements that listen for activation carry a `data-eid`
//! attribute, and one delegated `click` listener on the container turns clicks
//! into [`Event`]s.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::diff::{self, Patch};
use crate::dom::Node;
use crate::event::{Event, EventId};
use crate::runtime::{App, Runtime};
use crate::View;

const EID_ATTR: &str = "data-eid";

struct Host {
    document: Document,
    container: Element,
    app: Box<dyn Runtime>,
    mounted: Vec<Node>,
}

thread_local! {
    static INIT: Cell<bool> = const { Cell::new(false) };

    static HOST: RefCell<Option<Host>> = const { RefCell::new(None) };
}

/// Start the app by mounting given render function in the document `body`.
pub fn start<F, V>(render: F)
where
    F: Fn() -> V + 'static,
    V: View + 'static,
{
    if INIT.get() {
        return;
    }
    INIT.set(true);

    init_panic_hook();

    if let Err(err) = mount(Box::new(App::new(render))) {
        log::error!("failed to start: {err:?}");
    }
}

fn mount(app: Box<dyn Runtime>) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let container = document.create_element("div")?;
    body.append_child(&container)?;

    let onclick = Closure::<dyn FnMut(web_sys::Event)>::new(on_click);
    container.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;

    // The listener lives as long as the page.
    onclick.forget();

    let mut host = Host {
        document,
        container,
        app,
        mounted: Vec::new(),
    };
    host.render()?;

    HOST.set(Some(host));

    Ok(())
}

fn on_click(event: web_sys::Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|target| target.closest(&format!("[{EID_ATTR}]")).ok().flatten())
    else {
        return;
    };

    let Some(eid) = target
        .get_attribute(EID_ATTR)
        .and_then(|raw| raw.parse().ok())
        .map(EventId::from_raw)
    else {
        return;
    };

    let text = target
        .dyn_ref::<HtmlElement>()
        .map(HtmlElement::inner_text)
        .unwrap_or_default();

    HOST.with_borrow_mut(|host| {
        let Some(host) = host else {
            return;
        };

        if let Err(err) = host.app.dispatch(&Event::new(eid, text)) {
            log::warn!("{err}");
        }

        if let Err(err) = host.render() {
            log::error!("failed to render: {err:?}");
        }
    });
}

impl Host {
    fn render(&mut self) -> Result<(), JsValue> {
        let next = self.app.document();

        for patch in diff::diff(&self.mounted, &next) {
            self.apply(patch)?;
        }

        self.mounted = next;

        Ok(())
    }

    fn apply(&self, patch: Patch) -> Result<(), JsValue> {
        match patch {
            Patch::Text { path, text } => self.lookup(&path)?.set_text_content(Some(text)),
            Patch::Class { path, class } => {
                let el = self.lookup(&path)?.unchecked_into::<Element>();

                match class {
                    Some(class) => el.set_class_name(class),
                    None => el.remove_attribute("class")?,
                }
            }
            Patch::Listener { path, eid } => {
                let el = self.lookup(&path)?.unchecked_into::<Element>();

                match eid {
                    Some(eid) => el.set_attribute(EID_ATTR, &eid.get().to_string())?,
                    None => el.remove_attribute(EID_ATTR)?,
                }
            }
            Patch::Replace { path, node } => {
                let old = self.lookup(&path)?;
                let parent = old
                    .parent_node()
                    .ok_or_else(|| JsValue::from_str("patched node has no parent"))?;

                parent.replace_child(&self.build(node)?, &old)?;
            }
            Patch::Append { parent, node } => {
                self.lookup(&parent)?.append_child(&self.build(node)?)?;
            }
            Patch::Truncate { parent, len } => {
                let parent = self.lookup(&parent)?;

                while parent.child_nodes().length() > len {
                    if let Some(last) = parent.last_child() {
                        parent.remove_child(&last)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk child indices down from the container.
    fn lookup(&self, path: &[u32]) -> Result<web_sys::Node, JsValue> {
        let mut node: web_sys::Node = self.container.clone().into();

        for &idx in path {
            node = node
                .child_nodes()
                .item(idx)
                .ok_or_else(|| JsValue::from_str("mounted tree is out of sync"))?;
        }

        Ok(node)
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text { text } => Ok(self.document.create_text_node(text).into()),
            Node::Element {
                tag,
                class,
                listener,
                children,
            } => {
                let el = self.document.create_element(tag)?;

                if let Some(class) = class {
                    el.set_class_name(class);
                }
                if let Some(eid) = listener {
                    el.set_attribute(EID_ATTR, &eid.get().to_string())?;
                }
                for child in children {
                    el.append_child(&self.build(child)?)?;
                }

                Ok(el.into())
            }
        }
    }
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

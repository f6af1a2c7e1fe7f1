// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Patches that turn one mounted [`Node`] snapshot into the next.
//!
//! Hosts that keep a live tree, like the browser host, apply these in order
//! instead of rebuilding everything after each render. Paths are child indices
//! starting from the host container.

use crate::dom::Node;
use crate::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<'a> {
    /// Set the text of the text node at `path`.
    Text { path: Vec<u32>, text: &'a str },
    /// Set or remove the `class` attribute of the element at `path`.
    Class {
        path: Vec<u32>,
        class: Option<&'static str>,
    },
    /// Set or remove the listener id of the element at `path`.
    Listener {
        path: Vec<u32>,
        eid: Option<EventId>,
    },
    /// Build `node` and put it in place of whatever is at `path`.
    Replace { path: Vec<u32>, node: &'a Node },
    /// Build `node` and append it to the children of `parent`.
    Append { parent: Vec<u32>, node: &'a Node },
    /// Remove children of `parent` past the first `len`.
    Truncate { parent: Vec<u32>, len: u32 },
}

/// Patches turning `old` into `new`. Nothing is emitted for equal snapshots.
pub fn diff<'a>(old: &[Node], new: &'a [Node]) -> Vec<Patch<'a>> {
    let mut patches = Vec::new();
    let mut path = Vec::new();

    diff_children(&mut path, old, new, &mut patches);

    patches
}

fn diff_children<'a>(
    path: &mut Vec<u32>,
    old: &[Node],
    new: &'a [Node],
    out: &mut Vec<Patch<'a>>,
) {
    for (idx, (prev, next)) in old.iter().zip(new).enumerate() {
        path.push(idx as u32);
        diff_node(path, prev, next, out);
        path.pop();
    }

    for node in new.iter().skip(old.len()) {
        out.push(Patch::Append {
            parent: path.clone(),
            node,
        });
    }

    if old.len() > new.len() {
        out.push(Patch::Truncate {
            parent: path.clone(),
            len: new.len() as u32,
        });
    }
}

fn diff_node<'a>(path: &mut Vec<u32>, old: &Node, new: &'a Node, out: &mut Vec<Patch<'a>>) {
    match (old, new) {
        (Node::Text { text: prev }, Node::Text { text }) => {
            if prev != text {
                out.push(Patch::Text {
                    path: path.clone(),
                    text,
                });
            }
        }
        (
            Node::Element {
                tag: prev_tag,
                class: prev_class,
                listener: prev_listener,
                children: prev_children,
            },
            Node::Element {
                tag,
                class,
                listener,
                children,
            },
        ) if prev_tag == tag => {
            if prev_class != class {
                out.push(Patch::Class {
                    path: path.clone(),
                    class: *class,
                });
            }
            if prev_listener != listener {
                out.push(Patch::Listener {
                    path: path.clone(),
                    eid: *listener,
                });
            }

            diff_children(path, prev_children, children, out);
        }
        _ => out.push(Patch::Replace {
            path: path.clone(),
            node: new,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{button, div, p};
    use crate::runtime::App;
    use crate::state::{stateful, Hook};

    fn text(t: &str) -> Node {
        Node::Text { text: t.into() }
    }

    fn el(tag: &'static str, listener: Option<u32>, children: Vec<Node>) -> Node {
        Node::Element {
            tag,
            class: None,
            listener: listener.map(EventId),
            children,
        }
    }

    #[test]
    fn equal_snapshots_need_nothing() {
        let doc = [el("div", None, vec![el("p", None, vec![text("Hi")])])];

        assert!(diff(&doc, &doc).is_empty());
    }

    #[test]
    fn changed_text_is_patched_in_place() {
        let old = [el("div", None, vec![el("p", None, vec![text("Hello, World!")])])];
        let new = [el("div", None, vec![el("p", None, vec![text("Now THIS")])])];

        assert_eq!(
            diff(&old, &new),
            [Patch::Text {
                path: vec![0, 0, 0],
                text: "Now THIS",
            }]
        );
    }

    #[test]
    fn switched_branch_is_replaced() {
        let old = [el("div", None, vec![text("title"), el("div", Some(1), vec![])])];
        let new = [el("div", None, vec![text("title"), el("section", Some(2), vec![])])];

        let Node::Element { children, .. } = &new[0] else {
            unreachable!()
        };

        assert_eq!(
            diff(&old, &new),
            [Patch::Replace {
                path: vec![0, 1],
                node: &children[1],
            }]
        );
    }

    #[test]
    fn attributes_and_length_changes() {
        let old = [
            el("button", Some(1), vec![text("a")]),
            text("b"),
            text("c"),
        ];
        let new = [Node::Element {
            tag: "button",
            class: Some("p-2"),
            listener: None,
            children: vec![text("a"), text("!")],
        }];

        assert_eq!(
            diff(&old, &new),
            [
                Patch::Class {
                    path: vec![0],
                    class: Some("p-2"),
                },
                Patch::Listener {
                    path: vec![0],
                    eid: None,
                },
                Patch::Append {
                    parent: vec![0],
                    node: &text("!"),
                },
                Patch::Truncate {
                    parent: vec![],
                    len: 1,
                },
            ]
        );
    }

    #[test]
    fn activation_patches_only_changed_text() {
        let mut app = App::new(|| {
            stateful(0_u32, |count: &Hook<u32>| {
                div((
                    p(count.get().to_string()),
                    button("+").onclick(count.bind(|count, _| *count += 1)),
                ))
            })
        });
        let before = app.document();

        app.activate("+").unwrap();
        let after = app.document();

        assert_eq!(
            diff(&before, &after),
            [Patch::Text {
                path: vec![0, 0, 0],
                text: "1",
            }]
        );
    }
}

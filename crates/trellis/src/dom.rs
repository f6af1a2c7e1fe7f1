// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host-independent document produced by mounted views.

use crate::event::EventId;
use crate::runtime::Trigger;

/// A node of the rendered document.
///
/// This is a snapshot: products rebuild it on every [`mount`](Mountable::mount), and
/// hosts translate it into whatever they display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Node {
    Element {
        tag: &'static str,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        class: Option<&'static str>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        listener: Option<EventId>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

impl Node {
    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Find the first element, in document order, that listens for activation
    /// and whose text content equals `label`.
    pub fn find_listener(&self, label: &str) -> Option<EventId> {
        let Node::Element {
            listener, children, ..
        } = self
        else {
            return None;
        };

        if let Some(eid) = listener {
            if self.text_content() == label {
                return Some(*eid);
            }
        }

        children.iter().find_map(|child| child.find_listener(label))
    }
}

/// Text content of a whole document.
pub fn text_content(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text_content).collect()
}

/// A built [`View`](crate::View) product that can place itself into the document.
pub trait Mountable: Trigger + 'static {
    /// Append the nodes of this product to `out`.
    fn mount(&self, out: &mut Vec<Node>);
}

impl Trigger for () {}

impl Mountable for () {
    fn mount(&self, _: &mut Vec<Node>) {}
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML serialization of the [`Node`] document.
//!
//! Listener ids are not written out, so the output of two renders of the same
//! state is identical even though their products were built separately.

use std::fmt::{self, Display, Write};

use crate::dom::Node;

/// Serialize a whole document.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();

    for node in nodes {
        // Writing into a `String` can't fail.
        let _ = write!(out, "{node}");
    }

    out
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { text } => Display::fmt(&Escaped(text), f),
            Node::Element {
                tag,
                class,
                children,
                ..
            } => {
                write!(f, "<{tag}")?;
                if let Some(class) = class {
                    write!(f, " class=\"{}\"", Escaped(class))?;
                }
                f.write_char('>')?;

                for child in children {
                    Display::fmt(child, f)?;
                }

                write!(f, "</{tag}>")
            }
        }
    }
}

struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;

        while let Some(idx) = rest.find(['<', '>', '&', '"']) {
            f.write_str(&rest[..idx])?;
            f.write_str(match rest.as_bytes()[idx] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            })?;
            rest = &rest[idx + 1..];
        }

        f.write_str(rest)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{Mountable, Node};
use crate::runtime::Trigger;
use crate::View;

/// Product of text views. Keeps its own copy so updates can be diffed by value.
pub struct TextProduct {
    text: String,
}

impl Trigger for TextProduct {}

impl Mountable for TextProduct {
    fn mount(&self, out: &mut Vec<Node>) {
        out.push(Node::Text {
            text: self.text.clone(),
        });
    }
}

impl View for String {
    type Product = TextProduct;

    fn build(self) -> TextProduct {
        TextProduct { text: self }
    }

    fn update(self, p: &mut TextProduct) {
        if p.text != self {
            p.text = self;
        }
    }
}

impl View for &str {
    type Product = TextProduct;

    fn build(self) -> TextProduct {
        TextProduct {
            text: self.to_owned(),
        }
    }

    fn update(self, p: &mut TextProduct) {
        if p.text != self {
            self.clone_into(&mut p.text);
        }
    }
}

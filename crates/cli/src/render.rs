use std::io::{self, Write};

use trellis::dom::Node;
use trellis::markup;
use trellis_showcase::ActiveView;

use crate::log;
use crate::report::{ErrorExt, Report};
use crate::session::Session;
use crate::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Format::Json
        } else {
            Format::Html
        }
    }
}

pub fn render(page: Page, view: Option<ActiveView>, format: Format) -> Report<()> {
    log::status!("Rendering", "{page} page");

    let mut session = Session::open(page);

    if let Some(view) = view {
        session.select(view)?;
    }

    print(&session.document(), format)
}

/// Write `document` to stdout, followed by a newline.
pub fn print(document: &[Node], format: Format) -> Report<()> {
    let out = match format {
        Format::Html => markup::to_html(document),
        Format::Json => {
            serde_json::to_string_pretty(document).message("failed to serialize the document")?
        }
    };

    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{out}").message("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_picks_format() {
        assert_eq!(Format::from_json_flag(true), Format::Json);
        assert_eq!(Format::from_json_flag(false), Format::Html);
    }

    #[test]
    fn json_document_is_tagged() {
        let session = Session::open(Page::Simple);
        let json = serde_json::to_value(session.document()).unwrap();

        assert_eq!(json[0]["type"], "element");
        assert_eq!(json[0]["tag"], "div");
    }
}

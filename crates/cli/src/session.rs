use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use trellis::dom::{self, Node};
use trellis::prelude::*;
use trellis_showcase::{complex_view_with, simple_view, ActiveView, ComplexState};

use crate::log;
use crate::render::{print, Format};
use crate::report::{Error, ErrorExt, Report};
use crate::Page;

/// A mounted page, plus the selector of the complex page when there is one.
pub struct Session {
    page: Page,
    app: Box<dyn Runtime>,
    selector: Option<Signal<ComplexState>>,
}

impl Session {
    pub fn open(page: Page) -> Self {
        match page {
            Page::Simple => Session {
                page,
                app: Box::new(App::new(simple_view)),
                selector: None,
            },
            Page::Complex => {
                let slot: Rc<RefCell<Option<Signal<ComplexState>>>> = Rc::default();
                let app = App::new({
                    let slot = slot.clone();
                    move || {
                        let slot = slot.clone();
                        complex_view_with(move |signal| *slot.borrow_mut() = Some(signal))
                    }
                });
                let selector = slot.borrow_mut().take();

                Session {
                    page,
                    app: Box::new(app),
                    selector,
                }
            }
        }
    }

    pub fn activate(&mut self, label: &str) -> Report<()> {
        log::status!("Activating", "`{label}`");

        let then = self
            .app
            .activate(label)
            .with_message(|| format!("cannot activate `{label}` on the {} page", self.page))?;

        log::info!("handler finished with {then:?}");

        Ok(())
    }

    pub fn select(&mut self, view: ActiveView) -> Report<()> {
        let Some(selector) = &self.selector else {
            return Err(Error::message(format!(
                "the {} page has no view selector",
                self.page
            )));
        };

        log::status!("Selecting", "{view}");

        selector.update(move |state| state.set_active_view(view));

        if !self.app.flush() {
            log::info!("selector didn't request a render");
        }

        Ok(())
    }

    pub fn expect(&self, text: &str) -> Report<()> {
        let content = dom::text_content(&self.app.document());

        if !content.contains(text) {
            return Err(Error::message(format!(
                "expected `{text}` in the document, found `{content}`"
            )));
        }

        log::status!("Checked", "`{text}`");

        Ok(())
    }

    pub fn document(&self) -> Vec<Node> {
        self.app.document()
    }
}

/// A page and the steps to replay against it, read from JSON:
///
/// ```json
/// {
///     "page": "complex",
///     "steps": [
///         { "activate": "Change title" },
///         { "select": "viewTwo" },
///         { "expect": "Change image" }
///     ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct Script {
    pub page: Page,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Activate the element with this label
    Activate(String),
    /// Switch the complex page to `viewOne` or `viewTwo`
    Select(String),
    /// Fail unless the document text contains this
    Expect(String),
}

impl Script {
    pub fn parse(json: &str) -> Report<Self> {
        serde_json::from_str(json).message("invalid session script")
    }

    pub fn replay(&self) -> Report<Session> {
        let mut session = Session::open(self.page);

        for (n, step) in self.steps.iter().enumerate() {
            log::info!("step {}: {step:?}", n + 1);

            match step {
                Step::Activate(label) => session.activate(label)?,
                Step::Select(view) => {
                    let view = view
                        .parse()
                        .with_message(|| format!("step {} has a bad view", n + 1))?;
                    session.select(view)?;
                }
                Step::Expect(text) => session.expect(text)?,
            }
        }

        Ok(session)
    }
}

pub fn run(path: &Path, format: Format) -> Report<()> {
    let json = fs::read_to_string(path)
        .with_message(|| format!("failed to read `{}`", path.display()))?;

    let script = Script::parse(&json)?;

    log::status!("Rendering", "{} page with {} steps", script.page, script.steps.len());

    let session = script.replay()?;

    print(&session.document(), format)
}

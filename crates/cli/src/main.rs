use std::fmt;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use trellis_showcase::ActiveView;

use crate::render::{render, Format};
use crate::session::run;

mod log;
mod render;
mod report;
mod session;

/// Render trellis pages and replay scripted sessions against them
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print every intermediate step
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Coloring of status output
    #[arg(long, value_enum, default_value_t = When::Auto, global = true)]
    color: When,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a page once and print its document
    #[command(visible_alias = "r")]
    Render(Render),

    /// Replay a scripted session against a page
    Run(Run),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// A title and a button that replaces it
    Simple,
    /// A title plus one of two selectable sub-views
    Complex,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Simple => "simple",
            Page::Complex => "complex",
        })
    }
}

#[derive(Debug, Args)]
pub struct Render {
    /// Page to render
    page: Page,

    /// Sub-view to select before rendering, `viewOne` or `viewTwo`
    #[arg(long)]
    view: Option<ActiveView>,

    /// Print the document as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct Run {
    /// Path to the JSON session script
    script: PathBuf,

    /// Print the document as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum When {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    if cli.verbose {
        log::enable_verbose_output();
    }

    let color = match cli.color {
        When::Auto => io::stderr().is_terminal(),
        When::Always => true,
        When::Never => false,
    };
    if color {
        log::enable_color_output();
    }

    let res = match cli.command {
        Command::Render(r) => render(r.page, r.view, Format::from_json_flag(r.json)),
        Command::Run(r) => run(&r.script, Format::from_json_flag(r.json)),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

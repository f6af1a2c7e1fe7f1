use std::fmt;
use std::sync::OnceLock;

use crossterm::style::Stylize;

static VERBOSE_OUTPUT: OnceLock<()> = OnceLock::new();

pub fn enable_verbose_output() {
    let _ = VERBOSE_OUTPUT.set(());
}

pub fn is_verbose_output_enabled() -> bool {
    VERBOSE_OUTPUT.get().is_some()
}

static COLOR_OUTPUT: OnceLock<()> = OnceLock::new();

pub fn enable_color_output() {
    let _ = COLOR_OUTPUT.set(());
}

pub fn is_color_output_enabled() -> bool {
    COLOR_OUTPUT.get().is_some()
}

/// Print a step of the session under a right-aligned title, e.g.
/// `log::status!("Rendering", "{page} page")`.
#[macro_export]
macro_rules! status {
    ($title:literal, $($arg:tt)*) => {{
        eprintln!("{} {}", $crate::log::Title($title), format_args!($($arg)*));
    }};
}

pub use status;

/// Same as [`status!`], printed only with `--verbose`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::log::is_verbose_output_enabled() {
            $crate::log::status!("Info", $($arg)*);
        }
    }};
}

pub use info;

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        eprintln!("{}: {}", $crate::log::Error, format_args!($($arg)*));
    }};
}

pub use error;

const TITLE_WIDTH: usize = 12;

pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_color_output_enabled() {
            write!(f, "{}", "error".dark_red().bold())
        } else {
            f.write_str("error")
        }
    }
}

pub struct Title(pub &'static str);

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("{:>TITLE_WIDTH$}", self.0);

        if is_color_output_enabled() {
            write!(f, "{}", title.dark_green().bold())
        } else {
            f.write_str(&title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_right_aligned() {
        assert_eq!(Title("Rendering").to_string(), "   Rendering");
        assert_eq!(Title("Info").to_string(), "        Info");
        assert_eq!(Title("Longer than twelve").to_string(), "Longer than twelve");
    }
}

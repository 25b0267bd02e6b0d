//! Terminal color decoration for failure messages
//!
//! Only failure messages are decorated, so there is a single color. The raw
//! escape sequences are public so callers can build expected output.

use console::Style;

use crate::config::ColorMode;

/// Escape sequence that starts the failure color (red)
pub const FAILURE: &str = "\x1b[31m";

/// Escape sequence that resets all terminal attributes
pub const RESET: &str = "\x1b[0m";

fn failure_style() -> Style {
    Style::new().red()
}

/// Wrap `text` in the failure color and a reset sequence.
///
/// The output is always `FAILURE + text + RESET`, whether or not the
/// current terminal supports colors.
///
/// # Example
/// ```
/// assert_eq!(vial::color::wrap("boom"), "\x1b[31mboom\x1b[0m");
/// ```
pub fn wrap(text: &str) -> String {
    failure_style()
        .force_styling(true)
        .apply_to(text)
        .to_string()
}

/// Decorate `text` according to `mode`.
///
/// `Always` wraps, `Never` returns the text untouched and `Auto` wraps only
/// when stderr supports color, since failures are printed there.
pub fn paint(text: &str, mode: ColorMode) -> String {
    if mode.enabled() {
        wrap(text)
    } else {
        text.to_string()
    }
}

//! Color theme constants for the jokecard UI.
//!
//! A dark terminal palette with a warm accent that matches the share card.

use ratatui::style::Color;

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focus ring, title and the selection marker.
pub const COLOR_ACCENT: Color = Color::Rgb(255, 107, 107);

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_TEXT: Color = Color::Gray;

/// Hints and other secondary text.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner while a request is in flight.
pub const COLOR_LOADING: Color = Color::Yellow;

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_ERROR: Color = Color::Red;

/// Row under the candidate cursor.
pub const COLOR_CURSOR_BG: Color = Color::Rgb(40, 40, 55);

pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

//! Reusable UI components.
//!
//! - `TabSelector` - horizontal selector with an arrow marker
//! - `StatusIndicator` - spinner, success and error lines
//! - `DialogFrame` - centered overlay with rounded borders

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{dialog_area, render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
pub use tab_selector::render_tab_selector;

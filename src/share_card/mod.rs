//! The share card: model, widget, off-screen capture and PNG export.
//!
//! The same [`ShareCardWidget`] draws the card in the TUI and into the
//! off-screen buffer that [`raster`] turns into pixels, so the exported image
//! matches what is on screen.

pub mod export;
pub mod font;
pub mod raster;
pub mod widget;

use chrono::{DateTime, Local};

pub use export::{encode_png, export_file_name, CardExporter};
pub use font::{check_coverage, has_glyph, load_font, system_fonts};
pub use raster::{rasterize_buffer, CaptureOptions};
pub use widget::{card_size, wrap_text, ShareCardWidget, TEXT_FIRST_ROW};

/// Timestamp format on the card: local time, minute precision.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Text placed on the card before anything is selected.
pub const PLACEHOLDER_TEXT: &str = "选择一个笑话，生成你的分享卡片";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub text: String,
    pub timestamp: String,
}

impl ShareCard {
    pub fn new(text: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            timestamp: format_timestamp(now),
        }
    }

    /// Text to draw: the joke, or the placeholder while empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER_TEXT
        } else {
            &self.text
        }
    }
}

pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_minute_precision() {
        let now = Local.with_ymd_and_hms(2023, 12, 1, 8, 7, 59).unwrap();
        assert_eq!(format_timestamp(now), "2023/12/01 08:07");
    }

    #[test]
    fn test_placeholder_until_text_set() {
        let now = Local.with_ymd_and_hms(2023, 12, 1, 8, 7, 0).unwrap();
        assert_eq!(ShareCard::new("", now).display_text(), PLACEHOLDER_TEXT);
        assert_eq!(ShareCard::new("笑话", now).display_text(), "笑话");
    }
}

//! Capture the share card and write it to disk as PNG.

use ab_glyph::FontVec;
use image::RgbaImage;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::path::{Path, PathBuf};

use super::font::{check_coverage, has_glyph, load_font, system_fonts};
use super::raster::{rasterize_buffer, CaptureOptions};
use super::widget::{card_size, ShareCardWidget, CARD_BRAND, CARD_TITLE};
use super::ShareCard;
use crate::config::AppConfig;
use crate::error::ExportError;

/// `<label>_<epoch-millis>.png`
pub fn export_file_name(label: &str, epoch_millis: i64) -> String {
    format!("{}_{}.png", label, epoch_millis)
}

/// Encode an image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, image::ImageFormat::Png)?;
    Ok(buf)
}

/// Every string drawn on the card that needs glyphs from the font.
fn card_text(card: &ShareCard) -> String {
    format!("{}{}{}", CARD_TITLE, card.display_text(), CARD_BRAND)
}

/// Renders share cards off-screen and saves them.
///
/// The font is loaded on first use and kept while it covers the cards being
/// exported.
pub struct CardExporter {
    output_dir: PathBuf,
    file_label: String,
    font_path: Option<PathBuf>,
    font: Option<FontVec>,
}

impl CardExporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_label: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_label: file_label.into(),
            font_path: None,
            font: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let exporter = Self::new(config.output_dir.clone(), config.file_label.clone());
        match &config.font_path {
            Some(path) => exporter.with_font_path(path.clone()),
            None => exporter,
        }
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self.font = None;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// A font that can draw `text`, reusing the loaded one when it covers it.
    fn font_for(&mut self, text: &str) -> Result<&FontVec, ExportError> {
        let cached_covers = self
            .font
            .as_ref()
            .is_some_and(|font| check_coverage(text, |ch| has_glyph(font, ch)).is_ok());
        if !cached_covers {
            self.font = Some(self.load_covering_font(text)?);
        }
        self.font.as_ref().ok_or(ExportError::NoFont)
    }

    fn load_covering_font(&self, text: &str) -> Result<FontVec, ExportError> {
        if let Some(path) = &self.font_path {
            let font = load_font(path)?;
            check_coverage(text, |ch| has_glyph(&font, ch))?;
            return Ok(font);
        }

        let mut last_err = ExportError::NoFont;
        for path in system_fonts() {
            let attempt = load_font(&path).and_then(|font| {
                check_coverage(text, |ch| has_glyph(&font, ch))?;
                Ok(font)
            });
            match attempt {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "loading card font");
                    return Ok(font);
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping card font");
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }

    /// Draw the card into an off-screen buffer sized to fit it.
    pub fn render_buffer(card: &ShareCard) -> Buffer {
        let size = card_size(card);
        let area = Rect::new(0, 0, size.width, size.height);
        let mut buf = Buffer::empty(area);
        ShareCardWidget::new(card).render(area, &mut buf);
        buf
    }

    /// Rasterize the card.
    ///
    /// Fails with [`ExportError::MissingGlyphs`] rather than producing a card
    /// whose text would be blank.
    pub fn capture(&mut self, card: &ShareCard) -> Result<RgbaImage, ExportError> {
        let buf = Self::render_buffer(card);
        if buf.area.is_empty() {
            return Err(ExportError::EmptyCapture);
        }
        let font = self.font_for(&card_text(card))?;
        Ok(rasterize_buffer(&buf, CaptureOptions::default(), Some(font)))
    }

    /// Capture the card and write `<label>_<epoch_millis>.png` into the
    /// output directory. Returns the written path.
    pub fn export(&mut self, card: &ShareCard, epoch_millis: i64) -> Result<PathBuf, ExportError> {
        let img = self.capture(card)?;
        let bytes = encode_png(&img)?;

        std::fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self
            .output_dir
            .join(export_file_name(&self.file_label, epoch_millis));
        std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "share card exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share_card::raster::CELL_H;
    use crate::share_card::widget::TEXT_FIRST_ROW;
    use chrono::{Local, TimeZone};

    const LATIN_FONTS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ];

    fn card() -> ShareCard {
        ShareCard::new("猫为什么讨厌周一", Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 0).unwrap())
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("冷笑话", 1700000000123), "冷笑话_1700000000123.png");
    }

    #[test]
    fn test_encode_png_magic() {
        let img = RgbaImage::new(2, 2);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_missing_configured_font_fails_export() {
        let tmp = tempfile::tempdir().unwrap();
        let mut exporter =
            CardExporter::new(tmp.path(), "冷笑话").with_font_path("/definitely/not/here.ttf");

        let err = exporter.export(&card(), 1).unwrap_err();
        assert!(matches!(err, ExportError::FontLoad { .. }));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_render_buffer_matches_card_size() {
        let card = card();
        let buf = CardExporter::render_buffer(&card);
        let size = card_size(&card);
        assert_eq!((buf.area.width, buf.area.height), (size.width, size.height));
    }

    /// Pixels in the first joke text row that differ between two rasters.
    fn text_row_diff(a: &RgbaImage, b: &RgbaImage) -> usize {
        let row_h = CELL_H * CaptureOptions::default().scale;
        let top = u32::from(TEXT_FIRST_ROW) * row_h;
        (top..top + row_h)
            .flat_map(|y| (0..a.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| a.get_pixel(x, y) != b.get_pixel(x, y))
            .count()
    }

    fn blank_raster(card: &ShareCard) -> RgbaImage {
        rasterize_buffer::<FontVec>(
            &CardExporter::render_buffer(card),
            CaptureOptions::default(),
            None,
        )
    }

    #[test]
    fn test_text_row_layout() {
        let buf = CardExporter::render_buffer(&card());
        let row: String = (0..buf.area.width)
            .map(|x| buf[(x, TEXT_FIRST_ROW)].symbol().to_string())
            .collect();
        assert!(row.contains('猫'), "{}", row);
    }

    #[test]
    fn test_export_draws_joke_text() {
        // Only meaningful where a CJK system font is installed.
        if system_fonts().next().is_none() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        let mut exporter = CardExporter::new(tmp.path(), "冷笑话");

        let path = exporter.export(&card(), 42).unwrap();
        assert_eq!(path.file_name().unwrap().to_string_lossy(), "冷笑话_42.png");

        let img = image::open(&path).unwrap().to_rgba8();
        let size = card_size(&card());
        assert_eq!(img.width(), u32::from(size.width) * 20);
        assert_eq!(img.height(), u32::from(size.height) * 40);
        assert!(text_row_diff(&img, &blank_raster(&card())) > 0);
    }

    #[test]
    fn test_latin_only_font_rejects_cjk_card() {
        let Some(latin) = LATIN_FONTS.iter().map(Path::new).find(|p| p.is_file()) else {
            return;
        };
        let tmp = tempfile::tempdir().unwrap();
        let mut exporter = CardExporter::new(tmp.path(), "冷笑话").with_font_path(latin);

        let err = exporter.export(&card(), 1).unwrap_err();
        assert!(matches!(err, ExportError::MissingGlyphs { .. }), "{err:?}");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}

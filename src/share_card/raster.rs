//! Turn a rendered ratatui [`Buffer`] into pixels.
//!
//! Each terminal cell becomes a `CELL_W x CELL_H` block (times the scale).
//! Backgrounds are filled per cell, box-drawing borders are drawn as lines,
//! and every other symbol is rasterized with the supplied font. Cells whose
//! background is `Color::Reset` stay fully transparent.

use ab_glyph::{point, Font, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use ratatui::{buffer::Buffer, style::Color};

/// Cell size in pixels at scale 1.
pub const CELL_W: u32 = 10;
pub const CELL_H: u32 = 20;

const DEFAULT_FG: Rgba<u8> = Rgba([51, 51, 51, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Pixel density multiplier.
    pub scale: u32,
    /// Fill for cells without a background; `None` keeps them transparent.
    pub background: Option<Rgba<u8>>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            background: None,
        }
    }
}

/// Rasterize every cell of `buf`.
///
/// With `font == None` only backgrounds and borders are drawn.
pub fn rasterize_buffer<F: Font>(buf: &Buffer, options: CaptureOptions, font: Option<&F>) -> RgbaImage {
    let scale = options.scale.max(1);
    let cell_w = CELL_W * scale;
    let cell_h = CELL_H * scale;
    let area = buf.area;
    let mut img = RgbaImage::from_pixel(
        u32::from(area.width) * cell_w,
        u32::from(area.height) * cell_h,
        options.background.unwrap_or(TRANSPARENT),
    );

    // Backgrounds first so wide glyphs can overlap the neighbouring cell.
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(bg) = to_rgba(buf[(x, y)].bg) {
                let (px, py) = cell_origin(area.x, area.y, x, y, cell_w, cell_h);
                fill_rect(&mut img, px, py, cell_w, cell_h, bg);
            }
        }
    }

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buf[(x, y)];
            let Some(ch) = cell.symbol().chars().next() else {
                continue;
            };
            if ch.is_whitespace() {
                continue;
            }
            let fg = to_rgba(cell.fg).unwrap_or(DEFAULT_FG);
            let (px, py) = cell_origin(area.x, area.y, x, y, cell_w, cell_h);

            if !draw_box_char(&mut img, ch, px, py, cell_w, cell_h, scale, fg) {
                if let Some(font) = font {
                    draw_glyph(&mut img, font, ch, px, py, cell_h, fg);
                }
            }
        }
    }

    img
}

fn cell_origin(ox: u16, oy: u16, x: u16, y: u16, cell_w: u32, cell_h: u32) -> (u32, u32) {
    (u32::from(x - ox) * cell_w, u32::from(y - oy) * cell_h)
}

/// Map a ratatui color to RGBA. `Reset` has no fixed color.
pub fn to_rgba(color: Color) -> Option<Rgba<u8>> {
    let rgb = match color {
        Color::Reset => return None,
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Black => [0, 0, 0],
        Color::Red => [205, 49, 49],
        Color::Green => [13, 188, 121],
        Color::Yellow => [229, 229, 16],
        Color::Blue => [36, 114, 200],
        Color::Magenta => [188, 63, 188],
        Color::Cyan => [17, 168, 205],
        Color::Gray => [204, 204, 204],
        Color::DarkGray => [118, 118, 118],
        Color::LightRed => [241, 76, 76],
        Color::LightGreen => [35, 209, 139],
        Color::LightYellow => [245, 245, 67],
        Color::LightBlue => [59, 142, 234],
        Color::LightMagenta => [214, 112, 214],
        Color::LightCyan => [41, 184, 219],
        Color::White => [255, 255, 255],
        // Palette lookup is terminal specific; grey ramp is close enough.
        Color::Indexed(i) => [i, i, i],
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Draw rounded/square box-drawing characters as straight lines.
///
/// Returns false for characters it does not handle.
#[allow(clippy::too_many_arguments)]
fn draw_box_char(
    img: &mut RgbaImage,
    ch: char,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    thickness: u32,
    color: Rgba<u8>,
) -> bool {
    // (left, right, up, down) arms from the cell centre.
    let arms = match ch {
        '─' | '━' => (true, true, false, false),
        '│' | '┃' => (false, false, true, true),
        '╭' | '┌' => (false, true, false, true),
        '╮' | '┐' => (true, false, false, true),
        '╰' | '└' => (false, true, true, false),
        '╯' | '┘' => (true, false, true, false),
        _ => return false,
    };

    let cx = x + w / 2 - thickness / 2;
    let cy = y + h / 2 - thickness / 2;
    let (left, right, up, down) = arms;
    if left {
        fill_rect(img, x, cy, cx - x + thickness, thickness, color);
    }
    if right {
        fill_rect(img, cx, cy, x + w - cx, thickness, color);
    }
    if up {
        fill_rect(img, cx, y, thickness, cy - y + thickness, color);
    }
    if down {
        fill_rect(img, cx, cy, thickness, y + h - cy, color);
    }
    true
}

fn draw_glyph<F: Font>(img: &mut RgbaImage, font: &F, ch: char, x: u32, y: u32, cell_h: u32, color: Rgba<u8>) {
    let id = font.glyph_id(ch);
    if id.0 == 0 {
        return;
    }

    let px_size = cell_h as f32 * 0.8;
    let scaled = font.as_scaled(PxScale::from(px_size));
    let glyph_height = scaled.ascent() - scaled.descent();
    let top = y as f32 + (cell_h as f32 - glyph_height) / 2.0;
    let glyph = id.with_scale_and_position(px_size, point(x as f32, top + scaled.ascent()));

    let Some(outlined) = font.outline_glyph(glyph) else {
        return;
    };
    let bounds = outlined.px_bounds();
    let (width, height) = (img.width() as i64, img.height() as i64);

    outlined.draw(|gx, gy, coverage| {
        let px = bounds.min.x as i64 + i64::from(gx);
        let py = bounds.min.y as i64 + i64::from(gy);
        if px < 0 || py < 0 || px >= width || py >= height {
            return;
        }
        let dst = img.get_pixel_mut(px as u32, py as u32);
        *dst = blend(*dst, color, coverage.clamp(0.0, 1.0));
    });
}

/// Source-over blend of `src` at `coverage` onto `dst`.
fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let sa = coverage * f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= f32::EPSILON {
        return TRANSPARENT;
    }
    let channel = |i: usize| {
        let v = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::FontVec;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_image_size_follows_scale() {
        let buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        let img = rasterize_buffer::<FontVec>(&buf, CaptureOptions::default(), None);
        assert_eq!(img.dimensions(), (4 * CELL_W * 2, 3 * CELL_H * 2));

        let img = rasterize_buffer::<FontVec>(
            &buf,
            CaptureOptions {
                scale: 1,
                background: None,
            },
            None,
        );
        assert_eq!(img.dimensions(), (4 * CELL_W, 3 * CELL_H));
    }

    #[test]
    fn test_reset_background_is_transparent() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        buf.set_style(Rect::new(1, 0, 1, 1), Style::default().bg(Color::Rgb(10, 20, 30)));

        let img = rasterize_buffer::<FontVec>(&buf, CaptureOptions::default(), None);
        assert_eq!(img.get_pixel(1, 1)[3], 0);
        assert_eq!(*img.get_pixel(CELL_W * 2 + 1, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_background_fallback_option() {
        let buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        let white = Rgba([255, 255, 255, 255]);
        let img = rasterize_buffer::<FontVec>(
            &buf,
            CaptureOptions {
                scale: 1,
                background: Some(white),
            },
            None,
        );
        assert_eq!(*img.get_pixel(0, 0), white);
    }

    #[test]
    fn test_box_drawing_without_font() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        buf[(0, 0)].set_symbol("─").set_fg(Color::Rgb(255, 0, 0));

        let img = rasterize_buffer::<FontVec>(
            &buf,
            CaptureOptions {
                scale: 1,
                background: None,
            },
            None,
        );
        // Horizontal line through the vertical centre, full width.
        assert_eq!(*img.get_pixel(0, CELL_H / 2), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(CELL_W - 1, CELL_H / 2), Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(to_rgba(Color::Reset), None);
        assert_eq!(to_rgba(Color::Rgb(1, 2, 3)), Some(Rgba([1, 2, 3, 255])));
        assert_eq!(to_rgba(Color::White), Some(Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_blend() {
        let red = Rgba([255, 0, 0, 255]);
        assert_eq!(blend(TRANSPARENT, red, 1.0), red);
        assert_eq!(blend(TRANSPARENT, red, 0.0), TRANSPARENT);

        let white = Rgba([255, 255, 255, 255]);
        let half = blend(white, Rgba([0, 0, 0, 255]), 0.5);
        assert_eq!(half[3], 255);
        assert!((126..=129).contains(&half[0]));
    }
}

//! Font discovery for card export.
//!
//! Exported cards need a font with CJK coverage. An explicit path wins;
//! otherwise a short list of well-known system locations is searched and the
//! first font that covers the card text is used.

use ab_glyph::{Font, FontVec};
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Probed in order when no font is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

/// System font candidates present on this machine, in search order.
pub fn system_fonts() -> impl Iterator<Item = PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|p| p.is_file())
}

/// Whether `font` has a real glyph (not `.notdef`) for `ch`.
pub fn has_glyph<F: Font>(font: &F, ch: char) -> bool {
    font.glyph_id(ch).0 != 0
}

/// Characters of `text` the font must draw but `covered` rejects, in order
/// of first appearance.
///
/// Letters, digits and CJK ideographs must be covered. Whitespace,
/// punctuation and emoji may be left blank.
pub fn uncovered_chars(text: &str, covered: impl Fn(char) -> bool) -> Vec<char> {
    let mut missing = Vec::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() && !covered(ch) && !missing.contains(&ch) {
            missing.push(ch);
        }
    }
    missing
}

/// Fail with [`ExportError::MissingGlyphs`] unless every required character
/// of `text` is covered.
pub fn check_coverage(text: &str, covered: impl Fn(char) -> bool) -> Result<(), ExportError> {
    let missing = uncovered_chars(text, covered);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExportError::MissingGlyphs {
            missing: missing.into_iter().collect(),
        })
    }
}

/// Read and parse a font file. Collections (`.ttc`) use their first face.
pub fn load_font(path: &Path) -> Result<FontVec, ExportError> {
    let data = std::fs::read(path).map_err(|e| ExportError::FontLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    FontVec::try_from_vec_and_index(data, 0).map_err(|e| ExportError::FontLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

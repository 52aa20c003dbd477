use crate::canvas::Canvas;
use crate::error::FontError;
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A font sized to a fixed pixel height, able to measure and draw text
pub trait GlyphFont {
    /// Pixel height the font was loaded at
    fn pixel_size(&self) -> f32;

    /// Horizontal advance of `text` in pixels
    fn measure(&self, text: &str) -> f32;

    /// Draw `text` with its top-left corner at `origin`, clipping to the canvas
    fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32));
}

/// Produces a font for a pixel height chosen at session start
pub trait FontLoader {
    type Font: GlyphFont;

    fn load(&self, pixel_size: f32) -> Result<Self::Font, FontError>;
}

/// TrueType/OpenType font backed by fontdue
pub struct TrueTypeFont {
    font: Font,
    pixel_size: f32,
}

impl TrueTypeFont {
    /// Load a font file from disk at the given pixel height
    pub fn open(path: &Path, pixel_size: f32) -> Result<Self, FontError> {
        check_pixel_size(pixel_size)?;
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(path, data, pixel_size)?;
        info!("Loaded font from: {} at {}px", path.display(), pixel_size);
        Ok(font)
    }

    /// Parse font data; `origin` is only used for error messages
    pub fn from_bytes(origin: &Path, data: Vec<u8>, pixel_size: f32) -> Result<Self, FontError> {
        check_pixel_size(pixel_size)?;
        let settings = FontSettings {
            scale: pixel_size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|reason| FontError::Parse {
            path: origin.to_path_buf(),
            reason: reason.to_string(),
        })?;

        Ok(Self { font, pixel_size })
    }
}

impl GlyphFont for TrueTypeFont {
    fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.pixel_size).advance_width)
            .sum()
    }

    fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32)) {
        // Fresh layout per call keeps drawing free of state between frames
        let mut layout: Layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.pixel_size, 0));

        let right_edge = canvas.width() as f32 - origin.0 as f32;
        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue; // Whitespace
            }
            if glyph.x >= right_edge {
                break; // Everything after this is off the right edge
            }

            let (metrics, bitmap) = self.font.rasterize_config(glyph.key);
            let glyph_x = origin.0 + glyph.x.floor() as i32;
            let glyph_y = origin.1 + glyph.y.floor() as i32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx];
                    canvas.paint(glyph_x + gx as i32, glyph_y + gy as i32, coverage);
                }
            }
        }
    }
}

fn check_pixel_size(pixel_size: f32) -> Result<(), FontError> {
    if pixel_size.is_finite() && pixel_size > 0.0 {
        Ok(())
    } else {
        Err(FontError::InvalidSize(pixel_size))
    }
}

/// Loads a TrueType font from a fixed path for each display session
#[derive(Debug, Clone)]
pub struct TrueTypeLoader {
    path: PathBuf,
}

impl TrueTypeLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FontLoader for TrueTypeLoader {
    type Font = TrueTypeFont;

    fn load(&self, pixel_size: f32) -> Result<TrueTypeFont, FontError> {
        debug!("Loading {} at {}px", self.path.display(), pixel_size);
        TrueTypeFont::open(&self.path, pixel_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::rasterize;
    use std::io::Write;

    const MONO: &[u8] = include_bytes!("../tests/fixtures/DejaVuSansMono.ttf");

    fn mono(pixel_size: f32) -> TrueTypeFont {
        TrueTypeFont::from_bytes(Path::new("DejaVuSansMono.ttf"), MONO.to_vec(), pixel_size)
            .unwrap()
    }

    #[test]
    fn test_space_has_an_advance() {
        let font = mono(16.0);
        let space = font.measure(" ");
        assert!(space > 0.0);
        assert_eq!(font.pixel_size(), 16.0);
        // Monospace: every character advances the same
        assert!((font.measure("HI") - 2.0 * space).abs() < 0.01);
    }

    #[test]
    fn test_truetype_grid_size_and_idempotence() {
        let font = mono(16.0);
        let first = rasterize(&font, "HIgj", 79, 23);
        let second = rasterize(&font, "HIgj", 79, 23);
        assert_eq!((first.width(), first.height()), (79, 23));
        assert_eq!(first, second);
    }

    #[test]
    fn test_truetype_hi_inks_top_left() {
        // 24-row viewport: 16px font on a 79x23 canvas
        let font = mono(16.0);
        let grid = rasterize(&font, "HI", 79, 23);

        assert!(grid.ink_count() > 0);
        let first = grid.first_ink_column().unwrap();
        assert!(first < 4, "H starts at column {}", first);
        // Capital letters have no descenders: nothing below the font height
        for y in 16..23 {
            for x in 0..79 {
                assert!(!grid.is_ink(x, y), "ink at ({}, {})", x, y);
            }
        }
        // Two glyphs of ~10px advance: nothing past the third cell
        let advance = font.measure(" ").ceil() as usize;
        for y in 0..23 {
            for x in 3 * advance..79 {
                assert!(!grid.is_ink(x, y), "ink at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_truetype_clips_offscreen_text() {
        let font = mono(16.0);
        let padded = format!("{}HI", " ".repeat(20));
        assert_eq!(rasterize(&font, &padded, 79, 23).ink_count(), 0);

        let long = "W".repeat(200);
        let grid = rasterize(&font, &long, 30, 10);
        assert_eq!((grid.width(), grid.height()), (30, 10));
        assert!(grid.ink_count() > 0);
    }

    #[test]
    fn test_missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");

        let err = TrueTypeLoader::new(&path).load(16.0).err().unwrap();
        match err {
            FontError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_font_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let err = TrueTypeFont::open(file.path(), 16.0).err().unwrap();
        assert!(matches!(err, FontError::Parse { .. }));
    }

    #[test]
    fn test_invalid_pixel_size() {
        let err = TrueTypeFont::from_bytes(Path::new("x.ttf"), Vec::new(), 0.0)
            .err()
            .unwrap();
        assert!(matches!(err, FontError::InvalidSize(_)));

        let err = TrueTypeFont::from_bytes(Path::new("x.ttf"), Vec::new(), f32::NAN)
            .err()
            .unwrap();
        assert!(matches!(err, FontError::InvalidSize(_)));
    }
}

/// Layout and timing constants shared by the rasterizer and the display loop
///
/// These values define how a viewport maps onto the font and the canvas, and
/// must stay consistent between:
/// - Font sizing (pixel height derived from terminal rows)
/// - Canvas sizing (one character cell per pixel)
/// - Frame cadence (the button poll doubles as the frame timer)

use std::time::Duration;

/// Rows subtracted from the viewport height to get the font pixel height,
/// leaving room for glyph parts that extend past the nominal size
pub const FONT_MARGIN: u16 = 8;

/// How long each frame waits on the button before advancing the scroll
pub const FRAME_INTERVAL: Duration = Duration::from_millis(95);

/// Character printed for cells where the glyph pixel differs from the background
pub const INK_CHAR: char = '#';

/// Character printed for untouched background cells
pub const BACKGROUND_CHAR: char = ' ';

/// Canvas background luminance (white)
pub const BACKGROUND_LUMA: u8 = 255;

/// Luminance glyphs are drawn with (black)
pub const INK_LUMA: u8 = 0;

/// Padding used when the font reports no usable space advance: one space per column
pub const FALLBACK_SPACE_ADVANCE: f32 = 1.0;

/// Pixel height used to check the font loads before any session starts
pub const PREFLIGHT_PIXEL_SIZE: f32 = 16.0;

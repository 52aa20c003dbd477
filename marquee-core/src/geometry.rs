/// Viewport geometry and the cell-to-pixel mapping
///
/// One character cell is one canvas pixel, so the canvas (and the glyph grid
/// derived from it) is sized directly in cells. The last column and row of the
/// viewport are left free so printing a full frame never wraps a line.

use crate::error::{MarqueeError, MarqueeResult};

/// Character-cell dimensions of the output surface, captured once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    #[inline]
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Check the viewport can hold a font of positive pixel height
    ///
    /// A viewport with `rows <= margin` would render nothing at all, so it is
    /// rejected rather than silently producing empty frames.
    pub fn validate(&self, margin: u16) -> MarqueeResult<()> {
        if self.columns == 0 || self.rows <= margin {
            return Err(MarqueeError::ViewportTooSmall {
                columns: self.columns,
                rows: self.rows,
                margin,
            });
        }
        Ok(())
    }

    /// Font pixel height for this viewport: `rows - margin`
    pub fn font_pixel_height(&self, margin: u16) -> MarqueeResult<f32> {
        self.validate(margin)?;
        Ok(f32::from(self.rows - margin))
    }

    /// Canvas size in pixels (and grid size in cells): `(columns - 1, rows - 1)`
    #[inline]
    pub fn canvas_size(&self) -> (usize, usize) {
        (
            usize::from(self.columns.saturating_sub(1)),
            usize::from(self.rows.saturating_sub(1)),
        )
    }
}

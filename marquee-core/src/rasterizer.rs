use crate::canvas::Canvas;
use crate::font::GlyphFont;

/// Frame-local grid of ink/background cells, one per canvas pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GlyphGrid {
    /// Classify every canvas pixel: anything that is not background is ink
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let (width, height) = (canvas.width(), canvas.height());
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(canvas.is_ink(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    #[cfg(test)]
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&ink| ink).count()
    }

    /// Leftmost column holding any ink
    #[cfg(test)]
    pub fn first_ink_column(&self) -> Option<usize> {
        (0..self.width).find(|&x| (0..self.height).any(|y| self.is_ink(x, y)))
    }

    /// Serialize to a printable block
    ///
    /// Every row ends with a newline and the block ends with one extra blank
    /// line.
    pub fn render(&self, ink: char, background: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height + 1);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.is_ink(x, y) { ink } else { background });
            }
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Rasterize `text` into a `width` x `height` grid of ink cells
///
/// Text is drawn from the top-left corner onto a fresh background canvas.
/// Whatever does not fit is clipped. Partial anti-aliased coverage counts as
/// ink, so glyph edges come out solid.
pub fn rasterize<F: GlyphFont + ?Sized>(
    font: &F,
    text: &str,
    width: usize,
    height: usize,
) -> GlyphGrid {
    let mut canvas = Canvas::new(width, height);
    font.draw(&mut canvas, text, (0, 0));
    GlyphGrid::from_canvas(&canvas)
}

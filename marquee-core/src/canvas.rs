use crate::constants::{BACKGROUND_LUMA, INK_LUMA};

/// Grayscale pixel buffer that fonts draw onto
///
/// Starts filled with the background luminance. Drawing composites ink over
/// the existing pixel by coverage, and anything outside the bounds is clipped
/// without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with the background color
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_LUMA; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Composite ink at `(x, y)` with the given coverage (0 = none, 255 = full)
    #[inline]
    pub fn paint(&mut self, x: i32, y: i32, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        let existing = u32::from(self.pixels[idx]);
        let alpha = u32::from(coverage);
        let ink = u32::from(INK_LUMA);
        self.pixels[idx] = ((ink * alpha + existing * (255 - alpha)) / 255) as u8;
    }

    /// Luminance at `(x, y)`, or `None` outside the canvas
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Whether the pixel deviates from the background at all
    #[inline]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.pixel(x, y).is_some_and(|luma| luma != BACKGROUND_LUMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(BACKGROUND_LUMA));
                assert!(!canvas.is_ink(x, y));
            }
        }
    }

    #[test]
    fn test_faint_coverage_still_counts_as_ink() {
        let mut canvas = Canvas::new(2, 2);
        canvas.paint(1, 1, 1);
        assert!(canvas.is_ink(1, 1));
        assert!(!canvas.is_ink(0, 0));
    }

    #[test]
    fn test_full_coverage_is_ink_luma() {
        let mut canvas = Canvas::new(2, 2);
        canvas.paint(0, 0, 255);
        assert_eq!(canvas.pixel(0, 0), Some(INK_LUMA));
    }

    #[test]
    fn test_out_of_bounds_paint_is_clipped() {
        let mut canvas = Canvas::new(2, 2);
        canvas.paint(-1, 0, 255);
        canvas.paint(0, -1, 255);
        canvas.paint(2, 0, 255);
        canvas.paint(0, 2, 255);
        assert_eq!(canvas, Canvas::new(2, 2));
        assert_eq!(canvas.pixel(5, 5), None);
    }
}

/// Deterministic stand-ins for fonts, terminals and buttons used by unit tests

use crate::button::Button;
use crate::canvas::Canvas;
use crate::cancel::CancelToken;
use crate::error::{FontError, MarqueeError, MarqueeResult};
use crate::font::{FontLoader, GlyphFont};
use crate::geometry::Viewport;
use crate::surface::OutputSurface;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Fixed-advance font: every non-space glyph is a solid block one pixel
/// narrower than its advance and as tall as the pixel size
pub struct BlockFont {
    advance: usize,
    pixel_size: f32,
}

impl BlockFont {
    pub fn new(advance: usize, pixel_size: f32) -> Self {
        Self {
            advance,
            pixel_size,
        }
    }
}

impl GlyphFont for BlockFont {
    fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn measure(&self, text: &str) -> f32 {
        (text.chars().count() * self.advance) as f32
    }

    fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32)) {
        let height = self.pixel_size.ceil() as i32;
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let left = origin.0 + (i * self.advance) as i32;
            for y in 0..height {
                for x in 0..self.advance.saturating_sub(1) as i32 {
                    canvas.paint(left + x, origin.1 + y, 255);
                }
            }
        }
    }
}

pub struct BlockLoader {
    advance: usize,
}

impl BlockLoader {
    pub fn new(advance: usize) -> Self {
        Self { advance }
    }
}

impl FontLoader for BlockLoader {
    type Font = BlockFont;

    fn load(&self, pixel_size: f32) -> Result<BlockFont, FontError> {
        Ok(BlockFont::new(self.advance, pixel_size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Begin,
    Clear,
    Write,
    End,
}

/// Records everything written instead of printing it
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    events: Vec<SurfaceEvent>,
    frames: Vec<String>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            events: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Behaves like redirected output
    pub fn without_size() -> Self {
        Self {
            viewport: None,
            events: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl OutputSurface for RecordingSurface {
    fn size(&self) -> MarqueeResult<Viewport> {
        self.viewport.ok_or(MarqueeError::NotATerminal)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::Clear);
        Ok(())
    }

    fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.events.push(SurfaceEvent::Write);
        self.frames.push(block.to_string());
        Ok(())
    }

    fn begin_session(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::Begin);
        Ok(())
    }

    fn end_session(&mut self) -> io::Result<()> {
        self.events.push(SurfaceEvent::End);
        Ok(())
    }
}

/// Button that answers from a script, then falls back to a fixed answer
pub struct ScriptedButton {
    script: VecDeque<bool>,
    otherwise: bool,
    timeouts: Vec<Duration>,
    cancel_at: Option<(usize, CancelToken)>,
}

impl ScriptedButton {
    pub fn always(pressed: bool) -> Self {
        Self {
            script: VecDeque::new(),
            otherwise: pressed,
            timeouts: Vec::new(),
            cancel_at: None,
        }
    }

    /// Not pressed until the `poll`-th wait (1-based)
    pub fn press_on(poll: usize) -> Self {
        let mut script: VecDeque<bool> = std::iter::repeat(false).take(poll - 1).collect();
        script.push_back(true);
        Self {
            script,
            otherwise: false,
            timeouts: Vec::new(),
            cancel_at: None,
        }
    }

    /// Trip `token` during the `poll`-th wait, as a signal arriving mid-wait would
    pub fn cancel_on(mut self, poll: usize, token: CancelToken) -> Self {
        self.cancel_at = Some((poll, token));
        self
    }

    pub fn polls(&self) -> usize {
        self.timeouts.len()
    }

    pub fn timeouts(&self) -> &[Duration] {
        &self.timeouts
    }
}

impl Button for ScriptedButton {
    fn wait_for_press(&mut self, timeout: Duration) -> bool {
        self.timeouts.push(timeout);
        if let Some((poll, token)) = &self.cancel_at {
            if *poll == self.timeouts.len() {
                token.cancel();
            }
        }
        self.script.pop_front().unwrap_or(self.otherwise)
    }
}

use crate::button::Button;
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::constants::{
    BACKGROUND_CHAR, FONT_MARGIN, FRAME_INTERVAL, INK_CHAR, PREFLIGHT_PIXEL_SIZE,
};
use crate::error::{MarqueeError, MarqueeResult};
use crate::font::{FontLoader, GlyphFont};
use crate::rasterizer::rasterize;
use crate::scroll::{PaddedText, ScrollState};
use crate::surface::OutputSurface;
use log::{debug, info, warn};
use std::time::Duration;

/// Why a display session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// The button was pressed; control goes back to the caller
    StoppedByButton,
    /// A termination request arrived; the caller should shut down
    StoppedBySignal,
}

impl DisplayOutcome {
    /// Process exit status for this outcome. Both stops are clean.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Tunables for a display session
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub font_margin: u16,
    pub frame_interval: Duration,
    pub ink: char,
    pub background: char,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            font_margin: FONT_MARGIN,
            frame_interval: FRAME_INTERVAL,
            ink: INK_CHAR,
            background: BACKGROUND_CHAR,
        }
    }
}

impl From<&Config> for DisplaySettings {
    fn from(config: &Config) -> Self {
        Self {
            font_margin: config.font.margin,
            frame_interval: Duration::from_millis(config.display.frame_interval_ms),
            ink: config.display.ink,
            background: config.display.background,
        }
    }
}

/// Everything fixed at session start
struct Session<F> {
    font: F,
    padded: PaddedText,
    canvas: (usize, usize),
}

/// Scrolls a rasterized banner across the output surface until dismissed
pub struct BannerDisplay<L, S, B> {
    loader: L,
    surface: S,
    button: B,
    cancel: CancelToken,
    settings: DisplaySettings,
}

impl<L, S, B> BannerDisplay<L, S, B>
where
    L: FontLoader,
    S: OutputSurface,
    B: Button,
{
    pub fn new(loader: L, surface: S, button: B, cancel: CancelToken) -> Self {
        Self {
            loader,
            surface,
            button,
            cancel,
            settings: DisplaySettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Load the font once so a bad font path fails before any text is awaited
    pub fn preflight(&self) -> MarqueeResult<()> {
        self.loader.load(PREFLIGHT_PIXEL_SIZE)?;
        Ok(())
    }

    /// Show `text` as a scrolling banner until the button or a termination
    /// request stops it
    ///
    /// Startup failures (no terminal size, viewport too small, unusable font)
    /// are returned before anything is written to the surface.
    pub fn display(&mut self, text: &str) -> MarqueeResult<DisplayOutcome> {
        let session = self.start(text)?;

        self.surface.begin_session().map_err(MarqueeError::Surface)?;
        let outcome = self.run(&session);
        if let Err(e) = self.surface.end_session() {
            warn!("Failed to restore output after banner: {}", e);
        }

        let outcome = outcome?;
        info!("Banner stopped: {:?}", outcome);
        Ok(outcome)
    }

    fn start(&self, text: &str) -> MarqueeResult<Session<L::Font>> {
        let viewport = self.surface.size()?;
        let pixel_size = viewport.font_pixel_height(self.settings.font_margin)?;
        let font = self.loader.load(pixel_size)?;
        let padded = PaddedText::new(text, viewport.columns, font.measure(" "));

        info!(
            "Displaying banner on {}x{} viewport ({}px font, {} padding spaces)",
            viewport.columns,
            viewport.rows,
            font.pixel_size(),
            padded.padding()
        );

        Ok(Session {
            font,
            padded,
            canvas: viewport.canvas_size(),
        })
    }

    fn run(&mut self, session: &Session<L::Font>) -> MarqueeResult<DisplayOutcome> {
        let (width, height) = session.canvas;
        let mut scroll = ScrollState::new(session.padded.len());
        let mut frames = 0usize;

        loop {
            // Only safe point for termination: never between clear and write
            if self.cancel.is_cancelled() {
                debug!("Termination requested after {} frames", frames);
                return Ok(DisplayOutcome::StoppedBySignal);
            }

            let grid = rasterize(
                &session.font,
                session.padded.suffix(scroll.cursor()),
                width,
                height,
            );
            let block = grid.render(self.settings.ink, self.settings.background);

            self.surface.clear().map_err(MarqueeError::Surface)?;
            self.surface
                .write_block(&block)
                .map_err(MarqueeError::Surface)?;
            frames += 1;

            let cursor = scroll.advance();
            debug!("Frame {} done, cursor -> {}", frames, cursor);

            if self.button.wait_for_press(self.settings.frame_interval) {
                debug!("Button pressed after {} frames", frames);
                return Ok(DisplayOutcome::StoppedByButton);
            }
        }
    }
}

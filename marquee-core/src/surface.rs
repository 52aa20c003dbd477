use crate::error::{MarqueeError, MarqueeResult};
use crate::geometry::Viewport;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, IsTerminal, Stdout, Write};

/// Where frames are printed
pub trait OutputSurface {
    /// Current size in character cells
    fn size(&self) -> MarqueeResult<Viewport>;

    /// Remove everything previously written
    fn clear(&mut self) -> io::Result<()>;

    /// Write a frame block
    fn write_block(&mut self, block: &str) -> io::Result<()>;

    /// Called once after startup succeeds, before the first frame
    fn begin_session(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once when the session stops, whatever the reason
    fn end_session(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: OutputSurface + ?Sized> OutputSurface for &mut S {
    fn size(&self) -> MarqueeResult<Viewport> {
        (**self).size()
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn write_block(&mut self, block: &str) -> io::Result<()> {
        (**self).write_block(block)
    }

    fn begin_session(&mut self) -> io::Result<()> {
        (**self).begin_session()
    }

    fn end_session(&mut self) -> io::Result<()> {
        (**self).end_session()
    }
}

/// Terminal output driven by escape sequences
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    interactive: bool,
}

impl TerminalSurface<Stdout> {
    /// Surface on stdout; size queries fail if stdout is redirected
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self { out, interactive }
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface on an arbitrary writer; `interactive` says whether it is a terminal
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSurface for TerminalSurface<W> {
    fn size(&self) -> MarqueeResult<Viewport> {
        if !self.interactive {
            return Err(MarqueeError::NotATerminal);
        }
        let (columns, rows) = terminal::size().map_err(MarqueeError::SizeUnavailable)?;
        Ok(Viewport::new(columns, rows))
    }

    fn clear(&mut self) -> io::Result<()> {
        // Queued so the clear and the next frame reach the terminal in one flush
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.out.write_all(block.as_bytes())?;
        self.out.flush()
    }

    fn begin_session(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush()
    }

    fn end_session(&mut self) -> io::Result<()> {
        queue!(self.out, Show)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirected_output_has_no_size() {
        let surface = TerminalSurface::new(Vec::new(), false);
        assert!(matches!(surface.size(), Err(MarqueeError::NotATerminal)));
    }

    #[test]
    fn test_clear_precedes_frame() {
        let mut surface = TerminalSurface::new(Vec::new(), false);
        surface.clear().unwrap();
        surface.write_block("# #\n\n").unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "\x1b[2J\x1b[1;1H# #\n\n");
    }

    #[test]
    fn test_session_toggles_cursor() {
        let mut surface = TerminalSurface::new(Vec::new(), false);
        surface.begin_session().unwrap();
        surface.end_session().unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "\x1b[?25l\x1b[?25h");
    }
}

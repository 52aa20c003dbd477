use crossterm::event::{self, Event, KeyEventKind};
use log::warn;
use marquee_core::Button;
use std::io;
use std::time::Duration;

/// Where key events come from
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, through crossterm's global event reader
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Treats any key press on the terminal as the banner's push button
///
/// The terminal stays in cooked mode, so keys arrive once Enter is pressed and
/// Ctrl+C still raises a signal. A typed line arrives as a burst of events;
/// everything queued behind the press is discarded so it cannot dismiss the
/// next banner.
pub struct KeyboardButton<E = TerminalEvents> {
    events: E,
}

impl KeyboardButton {
    pub fn new() -> Self {
        Self::with_events(TerminalEvents)
    }
}

impl<E: EventSource> KeyboardButton<E> {
    pub fn with_events(events: E) -> Self {
        Self { events }
    }

    fn drain(&mut self) -> io::Result<()> {
        while self.events.poll(Duration::ZERO)? {
            self.events.read()?;
        }
        Ok(())
    }
}

impl<E: EventSource> Button for KeyboardButton<E> {
    fn wait_for_press(&mut self, timeout: Duration) -> bool {
        let pressed = match self.events.poll(timeout) {
            Ok(true) => match self.events.read() {
                Ok(Event::Key(key)) => key.kind == KeyEventKind::Press,
                Ok(_) => false,
                Err(e) => {
                    warn!("Failed to read key event: {}", e);
                    false
                }
            },
            Ok(false) => false,
            Err(e) => {
                // Keep the frame cadence even without a usable input device
                warn!("Failed to poll keyboard: {}", e);
                std::thread::sleep(timeout);
                false
            }
        };

        if pressed {
            if let Err(e) = self.drain() {
                warn!("Failed to discard pending key events: {}", e);
            }
        }
        pressed
    }
}

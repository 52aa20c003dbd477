use crate::button::Button;
use crate::display::{BannerDisplay, DisplayOutcome};
use crate::error::{MarqueeError, MarqueeResult};
use crate::font::FontLoader;
use crate::surface::OutputSurface;
use log::info;
use std::io;

/// Supplies utterances to display, e.g. a speech recognizer or typed lines
pub trait TextSource {
    /// Block until the next utterance in `language`; `None` when exhausted
    fn next_utterance(&mut self, language: &str) -> io::Result<Option<String>>;
}

impl<T: TextSource + ?Sized> TextSource for &mut T {
    fn next_utterance(&mut self, language: &str) -> io::Result<Option<String>> {
        (**self).next_utterance(language)
    }
}

/// How a conversation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationEnd {
    /// The text source has nothing more to say
    SourceExhausted,
    /// A termination request stopped a banner or arrived between utterances
    Terminated,
}

/// Display each utterance from `source` until it runs dry or termination is requested
///
/// Blank utterances are skipped. A button press only dismisses the current
/// banner; the conversation then waits for the next utterance.
pub fn run_conversation<T, L, S, B>(
    source: &mut T,
    display: &mut BannerDisplay<L, S, B>,
    language: &str,
) -> MarqueeResult<ConversationEnd>
where
    T: TextSource + ?Sized,
    L: FontLoader,
    S: OutputSurface,
    B: Button,
{
    loop {
        if display.cancel_token().is_cancelled() {
            return Ok(ConversationEnd::Terminated);
        }

        info!("Waiting for text ({})...", language);
        let text = match source.next_utterance(language).map_err(MarqueeError::Input)? {
            Some(text) => text,
            None => {
                info!("Text source exhausted");
                return Ok(ConversationEnd::SourceExhausted);
            }
        };

        if text.trim().is_empty() {
            continue;
        }

        info!("Conversation started: {:?}", text);
        match display.display(&text)? {
            DisplayOutcome::StoppedByButton => {}
            DisplayOutcome::StoppedBySignal => return Ok(ConversationEnd::Terminated),
        }
    }
}

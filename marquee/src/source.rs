use log::info;
use marquee_core::TextSource;
use std::io::{self, BufRead};

/// A single utterance given up front, e.g. on the command line
pub struct OneShotSource {
    text: Option<String>,
}

impl OneShotSource {
    pub fn new(text: String) -> Self {
        Self { text: Some(text) }
    }
}

impl TextSource for OneShotSource {
    fn next_utterance(&mut self, _language: &str) -> io::Result<Option<String>> {
        Ok(self.text.take())
    }
}

/// One utterance per input line; end of input exhausts the source
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> TextSource for LineSource<R> {
    fn next_utterance(&mut self, language: &str) -> io::Result<Option<String>> {
        info!("Type a line and press Enter to show it ({})", language);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

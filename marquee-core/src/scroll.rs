/// Scrolling ribbon state: the padded utterance and the cursor into it

use crate::constants::FALLBACK_SPACE_ADVANCE;

/// Utterance prefixed with enough spaces to enter from the right edge
///
/// Indexed by character, not byte, so the cursor never lands inside a
/// multi-byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedText {
    text: String,
    /// Byte offset of each character, plus one trailing entry for the end
    offsets: Vec<usize>,
    padding: usize,
}

impl PaddedText {
    /// Pad `text` with `columns / space_advance + 1` spaces
    pub fn new(text: &str, columns: u16, space_advance: f32) -> Self {
        let padding = Self::padding_for(columns, space_advance);
        let mut padded = String::with_capacity(padding + text.len());
        padded.extend(std::iter::repeat(' ').take(padding));
        padded.push_str(text);

        let offsets = padded
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(padded.len()))
            .collect();

        Self {
            text: padded,
            offsets,
            padding,
        }
    }

    /// Number of spaces needed so a run of them spans the viewport, plus one
    pub fn padding_for(columns: u16, space_advance: f32) -> usize {
        let advance = if space_advance.is_finite() && space_advance > 0.0 {
            space_advance
        } else {
            FALLBACK_SPACE_ADVANCE
        };
        (f32::from(columns) / advance) as usize + 1
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text from character `cursor` onward; empty once past the end
    pub fn suffix(&self, cursor: usize) -> &str {
        match self.offsets.get(cursor) {
            Some(&start) => &self.text[start..],
            None => "",
        }
    }
}

/// Cursor into the padded text, advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    cursor: usize,
    len: usize,
}

impl ScrollState {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move one character left; wraps to zero only once the cursor passes
    /// `len`, so each cycle includes one frame starting at the very end.
    pub fn advance(&mut self) -> usize {
        self.cursor += 1;
        if self.cursor > self.len {
            self.cursor = 0;
        }
        self.cursor
    }
}

use log::debug;

use crate::error::SessionError;
use crate::formats::po::Catalog;
use crate::formats::rst::Paragraph;
use crate::pairing::{clear_msgstr, fill_msgstr};

/// A change to one message's `msgstr` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub message: usize,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    pub paragraphs: usize,
    pub messages: usize,
    pub translated: usize,
}

/// Paragraphs on one side, catalog records on the other, and one
/// selected row in each list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingSession {
    paragraphs: Vec<Paragraph>,
    catalog: Catalog,
    selected_paragraph: Option<usize>,
    selected_message: Option<usize>,
}

impl PairingSession {
    pub fn new(paragraphs: Vec<Paragraph>, catalog: Catalog) -> Self {
        let selected_paragraph = (!paragraphs.is_empty()).then_some(0);
        let selected_message = (!catalog.messages.is_empty()).then_some(0);
        Self {
            paragraphs,
            catalog,
            selected_paragraph,
            selected_message,
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_paragraph(&self) -> Option<usize> {
        self.selected_paragraph
    }

    pub fn selected_message(&self) -> Option<usize> {
        self.selected_message
    }

    pub fn select_paragraph(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.paragraphs.len() {
            return Err(SessionError::ParagraphOutOfRange(index));
        }
        self.selected_paragraph = Some(index);
        Ok(())
    }

    pub fn select_message(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.catalog.messages.len() {
            return Err(SessionError::MessageOutOfRange(index));
        }
        self.selected_message = Some(index);
        Ok(())
    }

    /// Writes paragraph `index` into the selected message, then moves both
    /// selections one row down.
    pub fn pair_paragraph(&mut self, index: usize) -> Result<PairOutcome, SessionError> {
        self.select_paragraph(index)?;
        let target = self
            .selected_message
            .ok_or(SessionError::NoMessageSelected)?;

        let message = &mut self.catalog.messages[target];
        let before = message.msgstr.clone();
        fill_msgstr(message, &self.paragraphs[index]).map_err(|source| {
            SessionError::Pairing {
                index: target,
                source,
            }
        })?;
        let after = message.msgstr.clone();
        debug!("paired paragraph {index} into message {target}");

        self.selected_paragraph = Some(next_row(index, self.paragraphs.len()));
        self.selected_message = Some(next_row(target, self.catalog.messages.len()));
        Ok(PairOutcome {
            message: target,
            before,
            after,
        })
    }

    pub fn pair_selected(&mut self) -> Result<PairOutcome, SessionError> {
        let index = self
            .selected_paragraph
            .ok_or(SessionError::NoParagraphSelected)?;
        self.pair_paragraph(index)
    }

    /// Resets the `msgstr` of message `index` and selects it.
    pub fn clear_message(&mut self, index: usize) -> Result<PairOutcome, SessionError> {
        let message = self
            .catalog
            .messages
            .get_mut(index)
            .ok_or(SessionError::MessageOutOfRange(index))?;
        let before = message.msgstr.clone();
        clear_msgstr(message).map_err(|source| SessionError::Pairing { index, source })?;
        let after = message.msgstr.clone();
        debug!("cleared message {index}");

        self.selected_message = Some(index);
        Ok(PairOutcome {
            message: index,
            before,
            after,
        })
    }

    /// Puts back a raw `msgstr` block. Returns false for an unknown index.
    pub fn set_msgstr(&mut self, index: usize, msgstr: &str) -> bool {
        let Some(message) = self.catalog.messages.get_mut(index) else {
            return false;
        };
        message.msgstr.clear();
        message.msgstr.push_str(msgstr);
        true
    }

    pub fn counts(&self) -> PairCounts {
        PairCounts {
            paragraphs: self.paragraphs.len(),
            messages: self.catalog.messages.len(),
            translated: self
                .catalog
                .messages
                .iter()
                .filter(|message| message.is_translated())
                .count(),
        }
    }
}

fn next_row(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

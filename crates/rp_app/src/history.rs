use rp_core::session::{PairOutcome, PairingSession};

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgstrEdit {
    pub index: usize,
    pub before: String,
    pub after: String,
}

impl From<PairOutcome> for MsgstrEdit {
    fn from(outcome: PairOutcome) -> Self {
        Self {
            index: outcome.message,
            before: outcome.before,
            after: outcome.after,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditHistory {
    past: Vec<MsgstrEdit>,
    future: Vec<MsgstrEdit>,
    limit: usize,
}

impl EditHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit,
        }
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn record(&mut self, edit: MsgstrEdit) -> bool {
        if edit.before == edit.after {
            return false;
        }
        self.past.push(edit);
        if self.past.len() > self.limit {
            let overflow = self.past.len() - self.limit;
            self.past.drain(..overflow);
        }
        self.future.clear();
        true
    }

    /// Returns the index of the restored message.
    pub fn undo(&mut self, session: &mut PairingSession) -> Option<usize> {
        let edit = self.past.pop()?;
        if !session.set_msgstr(edit.index, &edit.before) {
            self.clear();
            return None;
        }
        let index = edit.index;
        self.future.push(edit);
        Some(index)
    }

    pub fn redo(&mut self, session: &mut PairingSession) -> Option<usize> {
        let edit = self.future.pop()?;
        if !session.set_msgstr(edit.index, &edit.after) {
            self.clear();
            return None;
        }
        let index = edit.index;
        self.past.push(edit);
        Some(index)
    }
}

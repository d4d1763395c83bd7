//! Line-oriented reader and writer for gettext `.po` catalogs.
//!
//! Records are kept as raw text blocks so that writing a catalog back
//! reproduces the input byte for byte, except for the `msgstr` blocks
//! that were edited.

const OBSOLETE_PREFIX: &str = "#~";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Comment lines (`#:`, `#.`, `#,`, ...) and any `msgctxt` block.
    pub comments: String,
    pub msgid: String,
    pub msgstr: String,
    /// Blank lines separating this record from the next one.
    pub trailer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub header: String,
    pub messages: Vec<Message>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Block {
    Comments,
    Msgid,
    Msgstr,
}

impl Message {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
            && self.msgid.is_empty()
            && self.msgstr.is_empty()
            && self.trailer.is_empty()
    }

    pub fn has_msgid(&self) -> bool {
        !self.msgid.is_empty()
    }

    /// True when the msgid is written as `msgid ""` followed by
    /// continuation lines.
    pub fn is_multiline(&self) -> bool {
        self.msgid
            .lines()
            .next()
            .map(|first| first.trim_end() == r#"msgid """#)
            .unwrap_or(false)
    }

    pub fn is_translated(&self) -> bool {
        !self.target_text().is_empty()
    }

    pub fn reference(&self) -> String {
        self.comments
            .lines()
            .filter_map(|line| line.strip_prefix("#:"))
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_reference(&self) -> bool {
        self.comments.lines().any(|line| line.starts_with("#:"))
    }

    pub fn source_text(&self) -> String {
        block_value(&self.msgid, "msgid_plural")
    }

    pub fn target_text(&self) -> String {
        block_value(&self.msgstr, "msgstr[1]")
    }

    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.comments);
        out.push_str(&self.msgid);
        out.push_str(&self.msgstr);
        out.push_str(&self.trailer);
    }

    fn push(&mut self, block: Block, raw: &str) {
        if !self.trailer.is_empty() {
            self.trailer.push_str(raw);
            return;
        }
        match block {
            Block::Comments => self.comments.push_str(raw),
            Block::Msgid => self.msgid.push_str(raw),
            Block::Msgstr => self.msgstr.push_str(raw),
        }
    }
}

pub fn parse_catalog(content: &str) -> Catalog {
    let mut messages = Vec::new();
    let mut current = Message::default();
    let mut block = Block::Comments;
    // Inside a run of `#~` lines, which has no msgid/msgstr of its own.
    let mut obsolete = false;

    for raw in content.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            if block == Block::Msgstr || obsolete {
                current.trailer.push_str(raw);
            } else {
                current.push(block, raw);
            }
            continue;
        }

        let ends_obsolete =
            obsolete && (!line.starts_with(OBSOLETE_PREFIX) || !current.trailer.is_empty());
        if ends_obsolete || (block == Block::Msgstr && starts_record(line)) {
            messages.push(std::mem::take(&mut current));
            block = Block::Comments;
        }

        if line.starts_with("msgid") {
            block = Block::Msgid;
        } else if line.starts_with("msgstr") {
            block = Block::Msgstr;
        }
        obsolete = block == Block::Comments && line.starts_with(OBSOLETE_PREFIX);
        current.push(block, raw);
    }

    if !current.is_empty() {
        messages.push(current);
    }

    let mut header = String::new();
    if messages.first().is_some_and(is_header_entry) {
        messages.remove(0).write_to(&mut header);
    }

    Catalog { header, messages }
}

pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = catalog.header.clone();
    for message in &catalog.messages {
        message.write_to(&mut out);
    }
    out
}

/// Escapes `text` for use inside a PO string literal.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn unquote(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn starts_record(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("msgctxt") || line.starts_with("msgid")
}

fn is_header_entry(message: &Message) -> bool {
    !message.has_reference() && message.msgid.trim_end() == r#"msgid """#
}

/// Concatenated string value of a `msgid`/`msgstr` block, stopping at the
/// first line that starts with `stop`.
fn block_value(block: &str, stop: &str) -> String {
    let mut out = String::new();
    for line in block.lines() {
        if line.starts_with(stop) {
            break;
        }
        let (Some(start), Some(end)) = (line.find('"'), line.rfind('"')) else {
            continue;
        };
        if end > start {
            out.push_str(&unquote(&line[start + 1..end]));
        }
    }
    out
}

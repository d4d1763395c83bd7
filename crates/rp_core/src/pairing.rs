//! Writing paragraphs into `msgstr` blocks.

use crate::error::PairingError;
use crate::formats::po::{quote, Message};
use crate::formats::rst::Paragraph;

/// Replaces the `msgstr` of `message` with `paragraph`, using the same
/// quoting form and line ending as its `msgid`.
pub fn fill_msgstr(message: &mut Message, paragraph: &Paragraph) -> Result<(), PairingError> {
    if !message.has_msgid() {
        return Err(PairingError::NotAMessage);
    }
    let eol = line_ending(message);
    message.msgstr = if message.is_multiline() {
        multiline_msgstr(&paragraph.lines, eol)
    } else {
        format!("msgstr \"{}\"{eol}", quote(&paragraph.joined()))
    };
    Ok(())
}

pub fn clear_msgstr(message: &mut Message) -> Result<(), PairingError> {
    if !message.has_msgid() {
        return Err(PairingError::NotAMessage);
    }
    message.msgstr = empty_msgstr(line_ending(message));
    Ok(())
}

fn line_ending(message: &Message) -> &'static str {
    if message.msgid.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn empty_msgstr(eol: &str) -> String {
    format!("msgstr \"\"{eol}")
}

fn multiline_msgstr(lines: &[String], eol: &str) -> String {
    let mut out = empty_msgstr(eol);
    for (i, line) in lines.iter().enumerate() {
        // Continuation lines are concatenated, so keep a space between them.
        let sep = if i + 1 < lines.len() { " " } else { "" };
        out.push_str(&format!("\"{}{sep}\"{eol}", quote(line)));
    }
    out
}

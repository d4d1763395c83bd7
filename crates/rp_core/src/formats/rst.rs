//! Paragraph extraction from reStructuredText documents.
//!
//! This is not an RST parser. Lines are classified by a fixed set of
//! prefixes, and everything that survives is grouped into blank-line
//! separated paragraphs.

pub const DEFAULT_FOOTNOTE_RUBRIC: &str = "Lábjegyzet";

const SECTION_PREFIXES: [&str; 3] = ["---", "===", "***"];
const DIRECTIVE_PREFIX: &str = ".. ";
const INDENT_PREFIX: &str = "   ";
const BULLET_PREFIX: &str = "* ";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub lines: Vec<String>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lines reflowed into a single line.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Title of the `.. rubric::` that opens the footnote section.
    pub footnote_rubric: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            footnote_rubric: DEFAULT_FOOTNOTE_RUBRIC.to_string(),
        }
    }
}

pub fn extract_paragraphs(content: &str, options: &ExtractOptions) -> Vec<Paragraph> {
    let rubric_line = format!(".. rubric:: {}", options.footnote_rubric);
    let mut in_footnotes = false;
    let mut paragraphs = Vec::new();
    let mut current = Paragraph::default();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.lines.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }

        // Footnote bodies are `.. [#]` lines, often with indented continuations.
        if line.starts_with(&rubric_line) {
            in_footnotes = true;
            continue;
        }

        if is_throwaway(line, in_footnotes) {
            continue;
        }

        let line = line.strip_prefix(BULLET_PREFIX).unwrap_or(line);
        current.lines.push(line.trim_start().to_string());
    }

    if !current.lines.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn is_throwaway(line: &str, in_footnotes: bool) -> bool {
    if SECTION_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        return true;
    }
    !in_footnotes && (line.starts_with(DIRECTIVE_PREFIX) || line.starts_with(INDENT_PREFIX))
}

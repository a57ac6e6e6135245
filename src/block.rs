//! Line-oriented rendering of headers, lists and paragraphs

use crate::inline::style;
use tracing::debug;

/// Classification of a single line of summary text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// `#`, `##` or `###` header with the text after the marker
    Header { level: u8, text: &'a str },

    /// Bullet line (`- `, `* ` or `+ `) with the text after the marker
    ListItem(&'a str),

    /// Any other non-blank line, untrimmed
    Paragraph(&'a str),

    /// Empty or whitespace-only line
    Blank,
}

impl<'a> BlockKind<'a> {
    /// Classify a line. Headers win over list items, list items over paragraphs.
    ///
    /// Only leading whitespace is ignored when matching a marker; text after
    /// the marker keeps any trailing whitespace.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }

        let trimmed = line.trim_start();

        for (level, marker) in [(3, "### "), (2, "## "), (1, "# ")] {
            if let Some(text) = trimmed.strip_prefix(marker) {
                return Self::Header { level, text };
            }
        }

        for marker in ["- ", "* ", "+ "] {
            if let Some(text) = trimmed.strip_prefix(marker) {
                return Self::ListItem(text);
            }
        }

        Self::Paragraph(line)
    }
}

/// Whether the scan is currently inside an open `<ul>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// No list is open
    #[default]
    Normal,

    /// A `<ul>` has been emitted and not yet closed
    InList,
}

/// Render multi-line summary text into block-level HTML.
///
/// Every header, list wrapper, list item and paragraph becomes one output
/// line; they are joined with `\n`. Consecutive bullet lines share a single
/// `<ul>`, and any other line (including a blank one) closes it. Paragraph
/// lines are never merged.
///
/// Like [`style`], this performs no HTML escaping.
#[must_use]
pub fn render(text: &str) -> String {
    let mut state = RenderState::Normal;
    let mut blocks: Vec<String> = Vec::new();

    for line in text.lines() {
        let kind = BlockKind::classify(line);

        if state == RenderState::InList && !matches!(kind, BlockKind::ListItem(_)) {
            blocks.push("</ul>".to_string());
            state = RenderState::Normal;
        }

        match kind {
            BlockKind::Header { level, text } => {
                blocks.push(format!("<h{level}>{text}</h{level}>"));
            }
            BlockKind::ListItem(text) => {
                if state == RenderState::Normal {
                    blocks.push("<ul>".to_string());
                    state = RenderState::InList;
                }
                blocks.push(format!("<li>{}</li>", style(text)));
            }
            BlockKind::Paragraph(text) => {
                blocks.push(format!("<p>{}</p>", style(text)));
            }
            BlockKind::Blank => {}
        }
    }

    if state == RenderState::InList {
        blocks.push("</ul>".to_string());
    }

    debug!(
        "Rendered summary: {} bytes into {} blocks",
        text.len(),
        blocks.len()
    );

    blocks.join("\n")
}

//! Assembly of the summary email document

use crate::block::render;
use crate::error::{ComposeError, Result};
use crate::sender::SenderDetails;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Text of the fixed header and footer pieces.
///
/// Only the wording is configurable; section order is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Title shown in the header banner
    pub title: String,

    /// Line under the title
    pub tagline: String,

    /// Heading above the rendered summary
    pub summary_heading: String,

    /// Heading above the original transcript
    pub transcript_heading: String,

    /// Footer paragraphs, in order
    pub footer_lines: Vec<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "RecapFlow".into(),
            tagline: "AI-Generated Meeting Summary".into(),
            summary_heading: "Summary".into(),
            transcript_heading: "Original Transcript".into(),
            footer_lines: vec![
                "Generated by RecapFlow".into(),
                "This is an automated email. Please do not reply.".into(),
            ],
        }
    }
}

impl Branding {
    /// Load branding from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ComposeError::Branding(e.to_string()))
    }
}

const DOCUMENT_STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.header { background-color: #4F46E5; color: white; padding: 20px; text-align: center; }
.content { padding: 20px; }
.summary { background-color: #F3F4F6; padding: 15px; border-radius: 5px; margin: 15px 0; }
.sender-details { border-top: 1px solid #E5E7EB; padding-top: 10px; margin-top: 20px; }
.transcript { background-color: #F9FAFB; padding: 15px; border-radius: 5px; margin-top: 20px; max-height: 300px; overflow-y: auto; }
.footer { background-color: #E5E7EB; padding: 10px; text-align: center; font-size: 12px; }";

/// Builds summary email fragments and documents in a fixed section order:
/// header, summary, sender details, transcript, footer.
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    branding: Branding,
}

impl DocumentComposer {
    /// Create a composer using the given header and footer text
    #[must_use]
    pub const fn new(branding: Branding) -> Self {
        Self { branding }
    }

    /// Header and footer text in use
    #[must_use]
    pub const fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Compose the HTML fragment for one summary email.
    ///
    /// `summary` is rendered as markdown. `transcript` is inserted verbatim
    /// apart from newline to `<br>` conversion. The sender block is omitted
    /// when `sender` is `None` or has no present field; the transcript block
    /// is omitted when `transcript` is `None` or blank.
    ///
    /// Nothing is HTML-escaped. Callers must escape untrusted text first.
    #[must_use]
    pub fn compose(
        &self,
        summary: &str,
        sender: Option<&SenderDetails>,
        transcript: Option<&str>,
    ) -> String {
        let sender_block = sender.and_then(sender_section);
        let transcript_block = transcript
            .filter(|t| !t.trim().is_empty())
            .map(|t| self.transcript_section(t));

        debug!(
            "Composing summary email: summary {} bytes, sender details: {}, transcript: {}",
            summary.len(),
            sender_block.is_some(),
            transcript_block.is_some()
        );

        let mut sections = vec![
            self.header_section(),
            "<div class=\"content\">".to_string(),
            self.summary_section(summary),
        ];
        sections.extend(sender_block);
        sections.extend(transcript_block);
        sections.push("</div>".to_string());
        sections.push(self.footer_section());

        sections.join("\n")
    }

    /// Compose the fragment and wrap it in a complete HTML document with
    /// the stylesheet the fragment's classes refer to.
    #[must_use]
    pub fn document(
        &self,
        summary: &str,
        sender: Option<&SenderDetails>,
        transcript: Option<&str>,
    ) -> String {
        let fragment = self.compose(summary, sender, transcript);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>\n{DOCUMENT_STYLE}\n</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n"
        )
    }

    fn header_section(&self) -> String {
        format!(
            "<div class=\"header\">\n<h1>{}</h1>\n<p>{}</p>\n</div>",
            self.branding.title, self.branding.tagline
        )
    }

    fn summary_section(&self, summary: &str) -> String {
        format!(
            "<h2>{}</h2>\n<div class=\"summary\">\n{}\n</div>",
            self.branding.summary_heading,
            render(summary)
        )
    }

    fn transcript_section(&self, transcript: &str) -> String {
        format!(
            "<h3>{}</h3>\n<div class=\"transcript\">\n<small>{}</small>\n</div>",
            self.branding.transcript_heading,
            line_breaks(transcript)
        )
    }

    fn footer_section(&self) -> String {
        let lines: String = self
            .branding
            .footer_lines
            .iter()
            .map(|line| format!("<p>{line}</p>\n"))
            .collect();
        format!("<div class=\"footer\">\n{lines}</div>")
    }
}

fn sender_section(sender: &SenderDetails) -> Option<String> {
    let lines = sender.html_lines();
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"sender-details\">\n{}\n</div>",
        lines.join("\n")
    ))
}

/// Literal text with `\n` (and `\r\n`) turned into `<br>`
fn line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

/// Compose a summary email fragment with the default branding.
///
/// See [`DocumentComposer::compose`].
#[must_use]
pub fn compose(
    summary: &str,
    sender: Option<&SenderDetails>,
    transcript: Option<&str>,
) -> String {
    DocumentComposer::default().compose(summary, sender, transcript)
}

//! Plain-text alternative body

use crate::compose::DocumentComposer;
use crate::sender::SenderDetails;
use regex::Regex;
use std::fmt::Write;
use tracing::debug;

static FENCED_CODE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static HEADER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").unwrap());

static RULE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").unwrap());

static BULLET_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());

static NUMBERED_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());

static BOLD_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static BOLD_UNDERSCORE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

static ITALIC_UNDERSCORE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

static INLINE_CODE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

static LINK_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

static BLANK_RUN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").unwrap());

/// Strip markdown formatting, keeping the readable text.
///
/// Line-level markers (fenced code, headers, rules, list markers) are removed
/// before emphasis so a `* ` bullet is never mistaken for an italic opener.
#[must_use]
pub fn markdown_to_plain_text(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let text = FENCED_CODE_REGEX.replace_all(markdown, "");
    let text = HEADER_REGEX.replace_all(&text, "");
    let text = RULE_REGEX.replace_all(&text, "");
    let text = BULLET_REGEX.replace_all(&text, "");
    let text = NUMBERED_REGEX.replace_all(&text, "");
    let text = BOLD_REGEX.replace_all(&text, "${1}");
    let text = ITALIC_REGEX.replace_all(&text, "${1}");
    let text = BOLD_UNDERSCORE_REGEX.replace_all(&text, "${1}");
    let text = ITALIC_UNDERSCORE_REGEX.replace_all(&text, "${1}");
    let text = INLINE_CODE_REGEX.replace_all(&text, "${1}");
    let text = LINK_REGEX.replace_all(&text, "${1}");
    let text = BLANK_RUN_REGEX.replace_all(&text, "\n\n");

    text.trim().to_string()
}

impl DocumentComposer {
    /// Compose the text/plain body matching [`DocumentComposer::compose`].
    ///
    /// The summary is stripped of markdown; the transcript is kept verbatim.
    /// The sign-off always names the product team. Sender details, when
    /// present, follow as a signature under a `---` line.
    #[must_use]
    pub fn plain_text(
        &self,
        summary: &str,
        sender: Option<&SenderDetails>,
        transcript: Option<&str>,
    ) -> String {
        let title = &self.branding().title;
        let signature = sender
            .filter(|s| !s.is_empty())
            .map(SenderDetails::signature);
        let transcript = transcript.filter(|t| !t.trim().is_empty());

        let mut body = String::new();
        let _ = write!(
            body,
            "Hello,\n\nHere's your AI-generated meeting summary from {title}:\n\n\
             --- SUMMARY ---\n{}\n\n",
            markdown_to_plain_text(summary)
        );

        if let Some(transcript) = transcript {
            let _ = write!(body, "--- ORIGINAL TRANSCRIPT ---\n{transcript}\n\n");
        }

        let _ = write!(body, "Best regards,\n{title} Team\n\n");

        if let Some(signature) = &signature {
            let _ = write!(body, "---\n{signature}\n\n");
        }

        let _ = write!(body, "---\nThis email was sent automatically by {title}.\n");

        debug!(
            "Composed plain body: {} bytes, signature: {}, transcript: {}",
            body.len(),
            signature.is_some(),
            transcript.is_some()
        );

        body
    }
}

/// Compose the plain-text body with the default branding.
///
/// See [`DocumentComposer::plain_text`].
#[must_use]
pub fn compose_plain_text(
    summary: &str,
    sender: Option<&SenderDetails>,
    transcript: Option<&str>,
) -> String {
    DocumentComposer::default().plain_text(summary, sender, transcript)
}

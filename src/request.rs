//! Send-summary requests and the message parts built from them

use crate::compose::DocumentComposer;
use crate::error::{ComposeError, Result};
use crate::sender::SenderDetails;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Subject used when a request does not provide one
pub const DEFAULT_SUBJECT: &str = "Meeting Summary - RecapFlow";

static RECIPIENT_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// A request to mail a summary to a list of recipients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    /// Recipient addresses
    pub recipients: Vec<String>,

    /// Markdown summary text
    pub summary: String,

    /// Subject line, defaults to [`DEFAULT_SUBJECT`]
    #[serde(default)]
    pub subject: Option<String>,

    /// Whether `original_transcript` should be attached
    #[serde(default)]
    pub include_transcript: bool,

    /// Transcript the summary was generated from
    #[serde(default)]
    pub original_transcript: Option<String>,

    /// Contact details appended after the summary
    #[serde(default)]
    pub sender_details: Option<SenderDetails>,
}

/// Message parts ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEmail {
    /// Validated, trimmed recipient addresses
    pub recipients: Vec<String>,

    /// Subject line
    pub subject: String,

    /// Complete HTML document
    pub html: String,

    /// Plain-text alternative body
    pub text: String,
}

impl EmailRequest {
    /// Decode a request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ComposeError::Request(e.to_string()))
    }

    /// Provided subject if non-blank, else [`DEFAULT_SUBJECT`]
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
    }

    /// The transcript, only when requested and non-blank
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        if !self.include_transcript {
            return None;
        }
        self.original_transcript
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// Trimmed, non-blank recipients after validation
    pub fn recipients(&self) -> Result<Vec<String>> {
        let recipients: Vec<String> = self
            .recipients
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(ToString::to_string)
            .collect();

        if recipients.is_empty() {
            return Err(ComposeError::NoRecipients);
        }

        if let Some(invalid) = recipients
            .iter()
            .find(|r| !RECIPIENT_REGEX.is_match(r.as_str()))
        {
            return Err(ComposeError::InvalidRecipient(invalid.clone()));
        }

        Ok(recipients)
    }

    /// Build the HTML document and plain-text body for this request
    pub fn build(&self, composer: &DocumentComposer) -> Result<SummaryEmail> {
        let recipients = self.recipients()?;
        let sender = self.sender_details.as_ref();
        let transcript = self.transcript();

        let html = composer.document(&self.summary, sender, transcript);
        let text = composer.plain_text(&self.summary, sender, transcript);

        debug!(
            "Built summary email for {} recipients: html {} bytes, text {} bytes",
            recipients.len(),
            html.len(),
            text.len()
        );

        Ok(SummaryEmail {
            recipients,
            subject: self.subject().to_string(),
            html,
            text,
        })
    }
}

//! Optional contact details of the person sending a summary

use crate::error::{ComposeError, Result};
use serde::{Deserialize, Serialize};

/// Sender contact details. Every field is optional and controls its own line.
///
/// Decoding ignores unknown keys and treats `null` as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderDetails {
    /// Full name, rendered emphasized
    pub name: Option<String>,

    /// Job title
    pub position: Option<String>,

    /// Employer, joined with `position` as "position at company"
    pub company: Option<String>,

    /// Contact address, rendered as a `mailto:` link
    pub email: Option<String>,

    /// Phone number, rendered as given
    pub phone: Option<String>,

    /// Website, rendered as a link
    pub website: Option<String>,
}

impl SenderDetails {
    /// Decode sender details from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ComposeError::SenderDetails(e.to_string()))
    }

    /// Decode sender details from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ComposeError::SenderDetails(e.to_string()))
    }

    /// True when no field carries a non-blank value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.position,
            &self.company,
            &self.email,
            &self.phone,
            &self.website,
        ]
        .into_iter()
        .all(|field| present(field.as_deref()).is_none())
    }

    /// "position at company", or whichever of the two is present
    #[must_use]
    pub fn role(&self) -> Option<String> {
        match (
            present(self.position.as_deref()),
            present(self.company.as_deref()),
        ) {
            (Some(position), Some(company)) => Some(format!("{position} at {company}")),
            (Some(position), None) => Some(position.to_string()),
            (None, Some(company)) => Some(company.to_string()),
            (None, None) => None,
        }
    }

    /// One HTML line per present field, in fixed order:
    /// name, role, email, phone, website.
    #[must_use]
    pub fn html_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(name) = present(self.name.as_deref()) {
            lines.push(format!("<p><strong>{name}</strong></p>"));
        }
        if let Some(role) = self.role() {
            lines.push(format!("<p>{role}</p>"));
        }
        if let Some(email) = present(self.email.as_deref()) {
            lines.push(format!(
                "<p>Email: <a href=\"mailto:{email}\">{email}</a></p>"
            ));
        }
        if let Some(phone) = present(self.phone.as_deref()) {
            lines.push(format!("<p>Phone: {phone}</p>"));
        }
        if let Some(website) = present(self.website.as_deref()) {
            lines.push(format!(
                "<p>Website: <a href=\"{}\">{website}</a></p>",
                website_href(website)
            ));
        }

        lines
    }

    /// Plain-text signature, one present field per line
    #[must_use]
    pub fn signature(&self) -> String {
        let mut lines = Vec::new();

        if let Some(name) = present(self.name.as_deref()) {
            lines.push(name.to_string());
        }
        if let Some(role) = self.role() {
            lines.push(role);
        }
        if let Some(email) = present(self.email.as_deref()) {
            lines.push(format!("Email: {email}"));
        }
        if let Some(phone) = present(self.phone.as_deref()) {
            lines.push(format!("Phone: {phone}"));
        }
        if let Some(website) = present(self.website.as_deref()) {
            lines.push(format!("Website: {website}"));
        }

        lines.join("\n")
    }
}

fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

/// Bare domains get an https scheme so the link is clickable in mail clients
fn website_href(website: &str) -> String {
    let lower = website.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}

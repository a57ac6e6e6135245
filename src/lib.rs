// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Summary Email Renderer
//!
//! Turns an AI-generated meeting summary written in lightweight markdown
//! into an HTML email, together with optional sender details and the
//! original transcript.
//!
//! # Features
//!
//! - Inline styling: `**bold**`, `*italic*`, `` `code` ``
//! - Block rendering: `#`/`##`/`###` headers, flat bullet lists, paragraphs
//! - Fixed-order document composition with optional sections
//! - Plain-text alternative body
//! - Typed send requests with recipient validation
//!
//! # Trust boundary
//!
//! Nothing in this crate escapes HTML. Text containing `<script>` comes out
//! containing `<script>`. Escape untrusted input before rendering it.
//!
//! # Example
//!
//! ```rust
//! use recap_render::{SenderDetails, compose};
//!
//! let sender = SenderDetails {
//!     name: Some("Ada".into()),
//!     position: Some("Eng".into()),
//!     company: Some("Acme".into()),
//!     ..SenderDetails::default()
//! };
//! let html = compose("## Decisions\n- ship **friday**", Some(&sender), None);
//!
//! assert!(html.contains("<h2>Decisions</h2>"));
//! assert!(html.contains("<li>ship <strong>friday</strong></li>"));
//! assert!(html.contains("<p>Eng at Acme</p>"));
//! ```

mod block;
mod compose;
mod error;
mod inline;
mod plain;
mod request;
mod sender;

pub use block::{BlockKind, RenderState, render};
pub use compose::{Branding, DocumentComposer, compose};
pub use error::{ComposeError, Result};
pub use inline::style;
pub use plain::{compose_plain_text, markdown_to_plain_text};
pub use request::{DEFAULT_SUBJECT, EmailRequest, SummaryEmail};
pub use sender::SenderDetails;

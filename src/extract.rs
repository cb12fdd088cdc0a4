//! Document text and contact extraction.
//!
//! PDF parsing is delegated to `pdf-extract`; this module only decides what a
//! failure means. Per the screening error policy, a document that yields no
//! text is degenerate input, not an error — the batch keeps going.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern compiles")
    })
}

/// Pulls the embedded text out of a PDF document, trimmed.
///
/// Scanned pages, encrypted files, and outright corrupt bytes all yield an
/// empty string. Downstream stages treat empty text as a resume with nothing
/// to say, which scores accordingly.
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            warn!("text extraction failed, treating document as empty: {err}");
            String::new()
        }
    }
}

/// First email-shaped token in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    email_re().find(text).map(|m| m.as_str().to_string())
}

//! Presentation boundary — read models for an interactive display surface.
//!
//! The surface itself lives outside this crate; these types carry everything
//! it renders per record, including whether the notify action is offered.

use serde::Serialize;

use crate::models::ScreeningRecord;
use crate::session::ScreeningSession;

/// Shown in place of a contact address when extraction found none.
pub const NO_EMAIL_PLACEHOLDER: &str = "No email found";

/// Qualitative label for a 0–100 score.
pub fn match_label(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent Match"
    } else if score >= 80 {
        "Strong Match"
    } else if score >= 70 {
        "Good Match"
    } else if score >= 60 {
        "Fair Match"
    } else {
        "Poor Match"
    }
}

/// One display row. `can_notify` gates the per-record notify action: a
/// contact address must exist and no notification may have been sent yet.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub source_name: String,
    pub score: u32,
    pub label: &'static str,
    pub contact_email: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub notified: bool,
    pub can_notify: bool,
}

impl RecordView {
    pub fn from_record(record: &ScreeningRecord) -> Self {
        let has_contact = record
            .contact_email
            .as_deref()
            .is_some_and(|email| !email.is_empty());

        Self {
            source_name: record.source_name.clone(),
            score: record.score,
            label: match_label(record.score),
            contact_email: record
                .contact_email
                .clone()
                .unwrap_or_else(|| NO_EMAIL_PLACEHOLDER.to_string()),
            strengths: record.strengths.clone(),
            gaps: record.gaps.clone(),
            notified: record.notified(),
            can_notify: has_contact && !record.notified(),
        }
    }
}

/// Display rows for a ranked session, in rank order.
pub fn render_session(session: &ScreeningSession) -> Vec<RecordView> {
    session.records().iter().map(RecordView::from_record).collect()
}

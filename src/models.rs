use serde::{Deserialize, Serialize};

use crate::parser::ParsedReply;

/// One screened candidate document.
///
/// Created once per document at analysis time and held in the session store
/// for the rest of the operator's session. The only mutation after creation
/// is the notification flag, which moves false→true exactly once — the field
/// is private and [`mark_notified`](Self::mark_notified) cannot unset it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub source_name: String,
    pub contact_email: Option<String>,
    pub score: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    /// True when the score came from the fail-soft empty reply rather than
    /// the model, so a genuine "SCORE: 0%" stays distinguishable from a dead
    /// call.
    pub degraded: bool,
    notified: bool,
}

impl ScreeningRecord {
    /// Builds a record from extraction output and a parsed reply.
    ///
    /// The score is clamped into the documented 0–100 domain here; the parser
    /// passes raw values through (a reply may well claim "SCORE: 150%").
    pub fn new(
        source_name: String,
        contact_email: Option<String>,
        reply: ParsedReply,
        degraded: bool,
    ) -> Self {
        Self {
            source_name,
            contact_email,
            score: reply.score.min(100),
            strengths: reply.strengths,
            gaps: reply.gaps,
            degraded,
            notified: false,
        }
    }

    pub fn notified(&self) -> bool {
        self.notified
    }

    /// Records a successful notification send.
    pub fn mark_notified(&mut self) {
        self.notified = true;
    }
}

//! Batch pipeline: extract → score → parse, one document at a time.
//!
//! Documents are processed strictly in submission order with no fan-out and
//! no cancellation; the interactive surface blocks until the batch completes.
//! A fault anywhere in one document's chain degrades only that document's
//! record — the batch always produces one record per input.

use tracing::{debug, info};

use crate::extract;
use crate::llm_client::{self, ScoreModel};
use crate::models::ScreeningRecord;
use crate::parser;
use crate::session::ScreeningSession;

/// One uploaded document: display name plus raw content.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Screens a batch of documents against one job description and returns the
/// session already ranked.
pub async fn screen_batch(
    model: &dyn ScoreModel,
    job_desc: &str,
    documents: &[Document],
) -> ScreeningSession {
    let mut session = ScreeningSession::new();

    for document in documents {
        let record = screen_document(model, job_desc, document).await;
        info!(
            source = %record.source_name,
            score = record.score,
            degraded = record.degraded,
            "document screened"
        );
        session.push(record);
    }

    session.rank();
    info!(total = session.len(), "batch complete");
    session
}

async fn screen_document(
    model: &dyn ScoreModel,
    job_desc: &str,
    document: &Document,
) -> ScreeningRecord {
    let text = extract::extract_text(&document.bytes);
    debug!(source = %document.name, chars = text.len(), "text extracted");

    let contact = extract::extract_email(&text);
    let reply = llm_client::score_resume(model, job_desc, &text).await;
    let parsed = parser::parse_reply(reply.text());

    ScreeningRecord::new(document.name.clone(), contact, parsed, reply.is_degraded())
}

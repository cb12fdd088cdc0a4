//! Resume screening pipeline.
//!
//! Turns a batch of uploaded resume documents and one job description into a
//! ranked set of screening records: per document, embedded text is extracted,
//! an external model scores it against the job description, and the model's
//! free-text reply is parsed into a structured record. An operator-facing
//! surface (not part of this crate) renders the records via [`view`] and
//! triggers decision emails via [`notify`].
//!
//! Batch resilience is the guiding principle: a dead model call, an
//! unextractable document, or a malformed reply degrades a single record's
//! quality and nothing else. The only fatal condition is a missing scoring
//! credential at startup.

pub mod config;
pub mod extract;
pub mod llm_client;
pub mod models;
pub mod notify;
pub mod parser;
pub mod pipeline;
pub mod session;
pub mod telemetry;
pub mod view;

pub use config::Config;
pub use llm_client::{GeminiClient, ScoreModel, ScoreReply};
pub use models::ScreeningRecord;
pub use notify::Notifier;
pub use pipeline::{screen_batch, Document};
pub use session::ScreeningSession;

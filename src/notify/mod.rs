//! Decision notifier — renders the verdict template for a score and submits
//! it over SMTP.
//!
//! The notifier never errors at its boundary: every failure shape (no
//! credentials configured, empty or unparseable recipient, SMTP fault)
//! reports `false` and leaves the record retryable. It also performs no
//! deduplication — resend protection is the caller's job via the record's
//! notified flag.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::config::MailCredentials;

pub mod templates;

pub use templates::SHORTLIST_THRESHOLD;

/// Fixed mail-submission endpoint, reached over implicit TLS.
const SMTP_RELAY: &str = "smtp.gmail.com";

/// Sends decision emails for screened records.
///
/// Built from the optional mail credentials in [`Config`](crate::Config);
/// without them the notifier is *disabled* — still constructible so the
/// operator surface can report the state, but every send returns false.
pub struct Notifier {
    mailer: Option<Mailer>,
}

struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl Notifier {
    /// Builds a notifier from optional credentials. Any failure to assemble
    /// the transport or sender mailbox degrades to a disabled notifier.
    pub fn from_credentials(credentials: Option<&MailCredentials>) -> Self {
        let Some(creds) = credentials else {
            info!("mail credentials not configured, notifier disabled");
            return Self::disabled();
        };

        let sender: Mailbox = match format!("Hiring Team <{}>", creds.user).parse() {
            Ok(mailbox) => mailbox,
            Err(err) => {
                warn!("sender address '{}' is invalid, notifier disabled: {err}", creds.user);
                return Self::disabled();
            }
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_RELAY) {
            Ok(builder) => builder
                .credentials(Credentials::new(creds.user.clone(), creds.pass.clone()))
                .build(),
            Err(err) => {
                warn!("SMTP transport setup failed, notifier disabled: {err}");
                return Self::disabled();
            }
        };

        Self {
            mailer: Some(Mailer { transport, sender }),
        }
    }

    pub fn disabled() -> Self {
        Self { mailer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    /// Sends the decision email for one candidate.
    ///
    /// Returns whether the relay accepted the message. A `false` from any
    /// cause means the caller should leave the record's notified flag unset.
    pub async fn send_decision(&self, email: &str, score: u32) -> bool {
        let Some(mailer) = &self.mailer else {
            warn!("notification skipped: notifier is disabled");
            return false;
        };

        if email.is_empty() {
            warn!("notification skipped: no contact address");
            return false;
        }

        let recipient: Mailbox = match email.parse() {
            Ok(mailbox) => mailbox,
            Err(err) => {
                warn!("notification skipped: address '{email}' is invalid: {err}");
                return false;
            }
        };

        let (subject, body) = templates::decision_message(score);
        let message = match Message::builder()
            .from(mailer.sender.clone())
            .to(recipient)
            .subject(subject)
            .body(body)
        {
            Ok(message) => message,
            Err(err) => {
                warn!("notification message build failed: {err}");
                return false;
            }
        };

        match mailer.transport.send(message).await {
            Ok(_) => {
                info!(score, "decision email sent to {email}");
                true
            }
            Err(err) => {
                warn!("decision email to {email} failed: {err}");
                false
            }
        }
    }
}

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The scoring credential is required: screening cannot run without it, so
/// `from_env` fails immediately when it is missing. Mail credentials are
/// optional — without the full pair the notifier is disabled, not the session.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub mail: Option<MailCredentials>,
    pub rust_log: String,
}

/// SMTP sender account. Both halves come from the environment together;
/// a lone `EMAIL_USER` or `EMAIL_PASS` counts as no credentials at all.
#[derive(Debug, Clone)]
pub struct MailCredentials {
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mail = match (std::env::var("EMAIL_USER"), std::env::var("EMAIL_PASS")) {
            (Ok(user), Ok(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some(MailCredentials { user, pass })
            }
            _ => None,
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            mail,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

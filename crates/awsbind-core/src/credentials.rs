//! Credentials and the providers that resolve them.
//!
//! Providers are consulted once per call. Nothing here caches or refreshes;
//! a provider that needs to do so owns that logic.

use crate::error::ClientError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An access key pair with an optional session token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Present for temporary credentials issued by STS.
    pub session_token: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    /// Provider name for debugging.
    pub provider_name: Option<String>,
}

impl Credentials {
    /// Long-term credentials.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: None,
            expiration: None,
            provider_name: Some("static".to_string()),
        }
    }

    /// Temporary credentials with a session token.
    pub fn new_temporary(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: &str,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: Some(session_token.to_string()),
            expiration,
            provider_name: Some("static".to_string()),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expiration.map(|exp| Utc::now() > exp).unwrap_or(false)
    }

    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }

    /// First four characters of the access key, for log lines.
    fn key_prefix(&self) -> String {
        self.access_key_id.chars().take(4).collect()
    }

    /// Reject empty keys and log a warning for an unusual access key prefix.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.access_key_id.is_empty() {
            return Err(ClientError::credentials("access key ID is empty"));
        }
        if self.secret_access_key.is_empty() {
            return Err(ClientError::credentials("secret access key is empty"));
        }
        if !["AKIA", "ASIA", "AIDA", "AKID"]
            .iter()
            .any(|p| self.access_key_id.starts_with(p))
        {
            log::warn!(
                "Access key ID '{}' has unusual prefix; expected AKIA* or ASIA*",
                self.key_prefix()
            );
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .field("expiration", &self.expiration)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

// ── Providers ───────────────────────────────────────────────────────────

/// Resolves credentials for one call.
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    fn provide_credentials(&self) -> Result<Credentials, ClientError>;
}

pub type SharedCredentialsProvider = Arc<dyn ProvideCredentials>;

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, ClientError> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (or `AWS_SECRET_KEY`)
/// and `AWS_SESSION_TOKEN` on every call.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    pub fn new() -> Self {
        Self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProvideCredentials for EnvironmentCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, ClientError> {
        let access_key = non_empty_var("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| ClientError::credentials("AWS_ACCESS_KEY_ID is not set"))?;
        let secret_key = non_empty_var("AWS_SECRET_ACCESS_KEY")
            .or_else(|| non_empty_var("AWS_SECRET_KEY"))
            .ok_or_else(|| ClientError::credentials("AWS_SECRET_ACCESS_KEY is not set"))?;
        let session_token = non_empty_var("AWS_SESSION_TOKEN");
        Ok(Credentials {
            access_key_id: access_key,
            secret_access_key: secret_key,
            session_token,
            expiration: None,
            provider_name: Some("environment".to_string()),
        })
    }
}

/// Tries each provider in order; the first success wins.
#[derive(Debug, Clone, Default)]
pub struct CredentialsProviderChain {
    providers: Vec<SharedCredentialsProvider>,
}

impl CredentialsProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain used when a client is built without a provider.
    pub fn default_chain() -> Self {
        Self::new().with_provider(EnvironmentCredentialsProvider::new())
    }

    pub fn with_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }
}

impl ProvideCredentials for CredentialsProviderChain {
    fn provide_credentials(&self) -> Result<Credentials, ClientError> {
        let mut failures = Vec::new();
        for provider in &self.providers {
            match provider.provide_credentials() {
                Ok(creds) => return Ok(creds),
                Err(e) => {
                    log::debug!("credential provider {:?} failed: {}", provider, e.message);
                    failures.push(e.message);
                }
            }
        }
        Err(ClientError::credentials(format!(
            "no credentials in the provider chain: [{}]",
            failures.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct WarnLogger;

    impl log::Log for WarnLogger {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            let _ = record.args().to_string();
        }

        fn flush(&self) {}
    }

    static WARN_LOGGER: WarnLogger = WarnLogger;

    #[test]
    fn unusual_multibyte_key_prefix_is_logged() {
        // Another test may have installed a logger first; either way warnings are on.
        let _ = log::set_logger(&WARN_LOGGER);
        log::set_max_level(log::LevelFilter::Warn);

        let creds = Credentials::new("aé€XYZ", "secret");
        assert_eq!(creds.key_prefix(), "aé€X");
        assert!(creds.validate().is_ok());
        assert_eq!(Credentials::new("ab", "s").key_prefix(), "ab");
    }

    fn clear_env() {
        for var in [
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_SECRET_KEY",
            "AWS_SESSION_TOKEN",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn environment_provider_reads_vars() {
        clear_env();
        std::env::set_var("AWS_ACCESS_KEY_ID", "AKIAENV");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "envsecret");
        std::env::set_var("AWS_SESSION_TOKEN", "tok");
        let creds = EnvironmentCredentialsProvider::new()
            .provide_credentials()
            .unwrap();
        assert_eq!(creds.access_key_id, "AKIAENV");
        assert_eq!(creds.secret_access_key, "envsecret");
        assert_eq!(creds.session_token.as_deref(), Some("tok"));
        assert_eq!(creds.provider_name.as_deref(), Some("environment"));
        clear_env();
    }

    #[test]
    #[serial]
    fn environment_provider_alternate_secret_var() {
        clear_env();
        std::env::set_var("AWS_ACCESS_KEY_ID", "AKIAENV");
        std::env::set_var("AWS_SECRET_KEY", "alt");
        let creds = EnvironmentCredentialsProvider::new()
            .provide_credentials()
            .unwrap();
        assert_eq!(creds.secret_access_key, "alt");
        assert!(creds.session_token.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn environment_provider_missing() {
        clear_env();
        let err = EnvironmentCredentialsProvider::new()
            .provide_credentials()
            .unwrap_err();
        assert_eq!(err.kind, crate::error::ClientErrorKind::Credentials);
    }

    #[test]
    #[serial]
    fn chain_falls_through_to_static() {
        clear_env();
        let chain = CredentialsProviderChain::default_chain()
            .with_provider(StaticCredentialsProvider::new(Credentials::new("AKIASTATIC", "s")));
        let creds = chain.provide_credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKIASTATIC");
    }

    #[test]
    fn empty_chain_fails() {
        let err = CredentialsProviderChain::new()
            .provide_credentials()
            .unwrap_err();
        assert!(err.message.contains("no credentials"));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new_temporary("ASIAX", "topsecret", "session", None);
        let dbg = format!("{:?}", creds);
        assert!(!dbg.contains("topsecret"));
        assert!(!dbg.contains("session\""));
        assert!(dbg.contains("ASIAX"));
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(Credentials::new("", "x").validate().is_err());
        assert!(Credentials::new("AKIA1", "").validate().is_err());
        assert!(Credentials::new("AKIA1", "x").validate().is_ok());
    }

    #[test]
    fn expiry() {
        let past = Utc::now() - chrono::Duration::hours(1);
        let creds = Credentials::new_temporary("ASIA", "s", "t", Some(past));
        assert!(creds.is_expired());
        assert!(creds.is_temporary());
        assert!(!Credentials::new("AKIA", "s").is_expired());
    }
}

//! Region handling and client configuration.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};

// ── Regions ─────────────────────────────────────────────────────────────

pub const DEFAULT_REGION: &str = "us-east-1";

/// Standard AWS regions known to this crate.
pub const AWS_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-north-1",
    "me-south-1",
    "sa-east-1",
    // GovCloud
    "us-gov-east-1",
    "us-gov-west-1",
    // China
    "cn-north-1",
    "cn-northwest-1",
];

/// An AWS region code such as `eu-west-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the region is one of [`AWS_REGIONS`].
    pub fn is_valid(&self) -> bool {
        AWS_REGIONS.contains(&self.0.as_str())
    }

    /// Partition for this region (aws, aws-cn, aws-us-gov).
    pub fn partition(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "aws-cn"
        } else if self.0.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }

    /// Regional endpoint for an endpoint prefix: `https://{prefix}.{region}.amazonaws.com`.
    pub fn endpoint(&self, prefix: &str) -> String {
        if self.partition() == "aws-cn" {
            format!("https://{}.{}.amazonaws.com.cn", prefix, self.0)
        } else {
            format!("https://{}.{}.amazonaws.com", prefix, self.0)
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(DEFAULT_REGION.to_string())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Region {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// ── Client configuration ────────────────────────────────────────────────

/// Behavioural settings shared by every service client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub region: Region,
    /// Custom endpoint URL override (for LocalStack and similar).
    pub endpoint_url: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    pub max_idle_per_host: usize,
    /// User-Agent suffix appended to requests.
    pub app_name: Option<String>,
    /// Seconds the local clock is ahead of the service clock. Subtracted from
    /// the signing time.
    pub time_offset_secs: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint_url: None,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_idle_per_host: 10,
            app_name: None,
            time_offset_secs: 0,
        }
    }
}

impl ClientConfig {
    pub fn user_agent(&self) -> String {
        let base = format!(
            "awsbind-rust/{} os/{} lang/rust",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        match self.app_name {
            Some(ref app) if !app.is_empty() => format!("{} app/{}", base, app),
            _ => base,
        }
    }

    /// Base URL for a service: the override if set, else the regional endpoint.
    pub fn resolve_endpoint(&self, endpoint_prefix: &str) -> Result<url::Url, ClientError> {
        let raw = match self.endpoint_url {
            Some(ref url) => url.clone(),
            None => self.region.endpoint(endpoint_prefix),
        };
        let url = url::Url::parse(&raw)
            .map_err(|e| ClientError::endpoint(format!("invalid endpoint '{}': {}", raw, e)))?;
        if url.host_str().is_none() {
            return Err(ClientError::endpoint(format!(
                "endpoint '{}' has no host",
                raw
            )));
        }
        if !self.region.is_valid() {
            log::warn!("Region '{}' is not a known AWS region", self.region);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_endpoint() {
        let cfg = ClientConfig::default();
        let url = cfg.resolve_endpoint("ecs").unwrap();
        assert_eq!(url.as_str(), "https://ecs.us-east-1.amazonaws.com/");
    }

    #[test]
    fn china_partition() {
        let region = Region::new("cn-north-1");
        assert_eq!(region.partition(), "aws-cn");
        assert_eq!(
            region.endpoint("quicksight"),
            "https://quicksight.cn-north-1.amazonaws.com.cn"
        );
    }

    #[test]
    fn gov_partition() {
        assert_eq!(Region::new("us-gov-west-1").partition(), "aws-us-gov");
        assert_eq!(Region::new("eu-west-1").partition(), "aws");
    }

    #[test]
    fn endpoint_override() {
        let cfg = ClientConfig {
            endpoint_url: Some("http://localhost:4566".to_string()),
            ..Default::default()
        };
        let url = cfg.resolve_endpoint("ecs").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(4566));
    }

    #[test]
    fn bad_endpoint_is_client_error() {
        let cfg = ClientConfig {
            endpoint_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let err = cfg.resolve_endpoint("ecs").unwrap_err();
        assert_eq!(err.kind, crate::error::ClientErrorKind::Endpoint);
    }

    #[test]
    fn user_agent_app_suffix() {
        let cfg = ClientConfig {
            app_name: Some("deployer".to_string()),
            ..Default::default()
        };
        assert!(cfg.user_agent().starts_with("awsbind-rust/"));
        assert!(cfg.user_agent().ends_with("app/deployer"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: ClientConfig = serde_json::from_str(r#"{"region":"eu-west-1"}"#).unwrap();
        assert_eq!(cfg.region.as_str(), "eu-west-1");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
    }
}

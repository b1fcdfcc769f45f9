//! HTTP request/response values and the blocking transport.
//!
//! The invoke pipeline never talks to reqwest directly; it hands a fully
//! signed [`HttpRequest`] to an [`HttpTransport`]. Tests swap in a mock.

use crate::config::ClientConfig;
use crate::error::ClientError;
use reqwest::blocking::Client;
use reqwest::Method;
use std::collections::BTreeMap;
use std::time::Duration;

/// A request ready to be signed and sent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: url::Url,
    /// Header names are stored lowercased.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }
}

/// A response as returned by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are stored lowercased.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, headers: BTreeMap<String, String>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    /// Request id from either of the headers AWS uses for it.
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-amzn-requestid")
            .or_else(|| self.header("x-amz-request-id"))
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns one response. No retries.
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Blocking transport backed by `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| ClientError::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone());
        for (name, value) in &request.headers {
            // reqwest derives Host from the URL
            if name == "host" {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|val| (k.as_str().to_string(), val.to_string()))
            })
            .collect::<BTreeMap<_, _>>();
        let body = resp.bytes()?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Extract the host (with non-default port) from a URL.
pub fn host_header(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or("localhost");
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_headers_lowercased() {
        let mut headers = BTreeMap::new();
        headers.insert("X-Amzn-RequestId".to_string(), "abc".to_string());
        let resp = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(resp.header("x-amzn-requestid"), Some("abc"));
        assert_eq!(resp.request_id(), Some("abc"));
        assert!(resp.is_success());
    }

    #[test]
    fn fallback_request_id_header() {
        let mut headers = BTreeMap::new();
        headers.insert("x-amz-request-id".to_string(), "s3-style".to_string());
        let resp = HttpResponse::new(500, headers, Vec::new());
        assert_eq!(resp.request_id(), Some("s3-style"));
        assert!(!resp.is_success());
    }

    #[test]
    fn host_header_with_port() {
        let url = url::Url::parse("http://localhost:4566/").unwrap();
        assert_eq!(host_header(&url), "localhost:4566");
        let url = url::Url::parse("https://ecs.us-east-1.amazonaws.com/").unwrap();
        assert_eq!(host_header(&url), "ecs.us-east-1.amazonaws.com");
    }

    #[test]
    fn request_header_case_insensitive() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let mut req = HttpRequest::new(Method::POST, url);
        req.set_header("Content-Type", "application/json");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn transport_builds_from_config() {
        let transport = ReqwestTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }
}

//! Error types mirroring the AWS SDK error model.
//!
//! Two categories reach the caller:
//!
//! * [`ServiceError`] — the service answered with a non-2xx status. Each
//!   service crate supplies a closed [`ErrorKind`] enum whose `CHAIN` lists the
//!   modeled codes in unmarshalling order; the first matching code wins. A
//!   code that matches nothing stays unmodeled (`kind == None`) and keeps the
//!   raw payload.
//! * [`ClientError`] — nothing usable came back: marshalling failed, no
//!   credentials, connection refused, timeout, unreadable response.

use crate::http::HttpResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Error attribution ───────────────────────────────────────────────────

/// Which side of the exchange an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    /// 4xx: the request was rejected.
    Client,
    /// 5xx: the service failed.
    Service,
    Unknown,
}

impl ErrorType {
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            400..=499 => Self::Client,
            500..=599 => Self::Service,
            _ => Self::Unknown,
        }
    }
}

// ── Modeled error kinds ─────────────────────────────────────────────────

/// A closed, per-service set of modeled error codes.
pub trait ErrorKind: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Wire codes paired with their kinds, in unmarshalling order.
    const CHAIN: &'static [(&'static str, Self)];

    /// Walk the chain and return the first kind whose code matches.
    fn from_code(code: &str) -> Option<Self> {
        Self::CHAIN
            .iter()
            .find(|(wire, _)| *wire == code)
            .map(|(_, kind)| *kind)
    }

    /// The wire code of this kind (e.g. `ClusterNotFoundException`).
    fn code(&self) -> &'static str {
        Self::CHAIN
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(wire, _)| *wire)
            .unwrap_or("UnknownError")
    }
}

// ── Parsed error response ───────────────────────────────────────────────

/// The fields every AWS JSON error response carries, before kind dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status_code: u16,
    pub request_id: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl ErrorResponse {
    /// Parse an AWS JSON error response.
    ///
    /// The code comes from the `x-amzn-errortype` header when present
    /// (`Code:http://internal.amazon.com/...`), else from the body:
    ///
    /// ```json
    /// {
    ///   "__type": "com.amazonaws.ecs#ClusterNotFoundException",
    ///   "message": "Cluster not found."
    /// }
    /// ```
    pub fn parse(response: &HttpResponse) -> Self {
        let body = response.body_text();
        let parsed = serde_json::from_slice::<serde_json::Value>(&response.body).ok();

        let header_code = response
            .header("x-amzn-errortype")
            .map(|v| v.split(':').next().unwrap_or(v).trim().to_string())
            .filter(|v| !v.is_empty());

        let body_code = parsed.as_ref().and_then(|val| {
            val.get("__type")
                .or_else(|| val.get("code"))
                .or_else(|| val.get("Code"))
                .and_then(|v| v.as_str())
                .map(|s| s.rsplit('#').next().unwrap_or(s).to_string())
        });

        let code = header_code
            .or(body_code)
            .unwrap_or_else(|| "UnknownError".to_string());

        let message = parsed
            .as_ref()
            .and_then(|val| {
                val.get("message")
                    .or_else(|| val.get("Message"))
                    .or_else(|| val.get("errorMessage"))
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| {
                if parsed.is_none() && !body.is_empty() {
                    format!(
                        "Failed to parse error response: {}",
                        &body[..floor_char_boundary(&body, 200)]
                    )
                } else {
                    format!("HTTP {}", response.status)
                }
            });

        let request_id = response
            .request_id()
            .map(|s| s.to_string())
            .or_else(|| {
                parsed.as_ref().and_then(|val| {
                    val.get("RequestId")
                        .or_else(|| val.get("requestId"))
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                })
            });

        Self {
            code,
            message,
            status_code: response.status,
            request_id,
            body,
        }
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

// ── Service error ───────────────────────────────────────────────────────

/// An error response returned by an AWS service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError<K> {
    /// The modeled kind, `None` when the code is not in the service's chain.
    pub kind: Option<K>,
    /// The AWS error code (e.g., "ClusterNotFoundException").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The HTTP status code returned by the AWS API.
    pub status_code: u16,
    /// AWS request ID for tracing.
    pub request_id: Option<String>,
    /// The AWS service that returned the error (e.g., "ecs").
    pub service: String,
    /// The API operation that failed.
    pub operation: Option<String>,
    pub error_type: ErrorType,
    /// Whether a caller-side retry policy may retry this error.
    pub retryable: bool,
    /// Raw response body.
    pub raw: String,
}

impl<K: ErrorKind> ServiceError<K> {
    /// Dispatch a parsed response through the kind chain.
    pub fn from_response(service: &str, response: ErrorResponse) -> Self {
        let kind = K::from_code(&response.code);
        let retryable = is_retryable_code(&response.code, response.status_code);
        Self {
            kind,
            code: response.code,
            message: response.message,
            status_code: response.status_code,
            request_id: response.request_id,
            service: service.to_string(),
            operation: None,
            error_type: ErrorType::from_status(response.status_code),
            retryable,
            raw: response.body,
        }
    }

    /// With operation.
    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn is_modeled(&self) -> bool {
        self.kind.is_some()
    }

    /// Read an extra member of the error payload (e.g. `ResourceType`).
    pub fn field(&self, name: &str) -> Option<serde_json::Value> {
        serde_json::from_str::<serde_json::Value>(&self.raw)
            .ok()
            .and_then(|v| v.get(name).cloned())
    }
}

impl<K> fmt::Display for ServiceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AWS {} error [{}]: {} (HTTP {})",
            self.service, self.code, self.message, self.status_code
        )?;
        if let Some(ref op) = self.operation {
            write!(f, " [Operation: {}]", op)?;
        }
        if let Some(ref req_id) = self.request_id {
            write!(f, " [RequestId: {}]", req_id)?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug> std::error::Error for ServiceError<K> {}

/// Determine if an error code/status is retryable per AWS SDK retry policy.
pub fn is_retryable_code(code: &str, status_code: u16) -> bool {
    if matches!(status_code, 429 | 500 | 502 | 503 | 504) {
        return true;
    }
    matches!(
        code,
        "Throttling"
            | "ThrottlingException"
            | "ThrottledException"
            | "RequestThrottledException"
            | "TooManyRequestsException"
            | "ProvisionedThroughputExceededException"
            | "TransactionInProgressException"
            | "RequestLimitExceeded"
            | "BandwidthLimitExceeded"
            | "RequestThrottled"
            | "InternalError"
            | "InternalFailure"
            | "ServiceUnavailable"
            | "RequestTimeout"
            | "RequestTimeoutException"
            | "IDPCommunicationError"
    )
}

// ── Client error ────────────────────────────────────────────────────────

/// Categorised client-side failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientErrorKind {
    /// Connection refused, DNS failure, TLS failure, broken pipe.
    Transport,
    Timeout,
    /// The request could not be turned into an HTTP request.
    Marshall,
    /// A 2xx response body did not match the expected shape.
    Unmarshall,
    Credentials,
    Endpoint,
    Signing,
}

impl fmt::Display for ClientErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "Transport error"),
            Self::Timeout => write!(f, "Request timeout"),
            Self::Marshall => write!(f, "Marshalling error"),
            Self::Unmarshall => write!(f, "Unmarshalling error"),
            Self::Credentials => write!(f, "Credentials error"),
            Self::Endpoint => write!(f, "Endpoint error"),
            Self::Signing => write!(f, "Signing error"),
        }
    }
}

/// A failure raised inside the client, before or instead of a service reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Timeout, message)
    }

    pub fn marshall(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Marshall, message)
    }

    pub fn unmarshall(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Unmarshall, message)
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Credentials, message)
    }

    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Endpoint, message)
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Signing, message)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ClientErrorKind::Timeout
        } else if err.is_decode() {
            ClientErrorKind::Unmarshall
        } else if err.is_builder() {
            ClientErrorKind::Marshall
        } else {
            ClientErrorKind::Transport
        };
        Self::new(kind, err.to_string())
    }
}

// ── Top-level error ─────────────────────────────────────────────────────

/// Error returned by every operation of a service client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SdkError<K: ErrorKind> {
    #[error(transparent)]
    Service(#[from] ServiceError<K>),
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl<K: ErrorKind> SdkError<K> {
    pub fn service_error(&self) -> Option<&ServiceError<K>> {
        match self {
            Self::Service(err) => Some(err),
            Self::Client(_) => None,
        }
    }

    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(err) => Some(err),
            Self::Service(_) => None,
        }
    }

    /// The modeled kind, if the service returned a modeled error.
    pub fn kind(&self) -> Option<K> {
        self.service_error().and_then(|e| e.kind)
    }

    pub fn is_kind(&self, kind: K) -> bool {
        self.kind() == Some(kind)
    }

    /// The service error code, if any.
    pub fn code(&self) -> Option<&str> {
        self.service_error().map(|e| e.code.as_str())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.service_error().and_then(|e| e.request_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum TestKind {
        NotFound,
        Throttling,
    }

    impl ErrorKind for TestKind {
        const CHAIN: &'static [(&'static str, Self)] = &[
            ("NotFoundException", TestKind::NotFound),
            ("ThrottlingException", TestKind::Throttling),
        ];
    }

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>();
        HttpResponse::new(status, headers, body.as_bytes().to_vec())
    }

    #[test]
    fn parse_json_type_with_namespace() {
        let resp = response(
            400,
            &[("x-amzn-requestid", "req-1")],
            r#"{"__type":"com.amazonaws.ecs#NotFoundException","message":"gone"}"#,
        );
        let parsed = ErrorResponse::parse(&resp);
        assert_eq!(parsed.code, "NotFoundException");
        assert_eq!(parsed.message, "gone");
        assert_eq!(parsed.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn parse_header_error_type_wins() {
        let resp = response(
            404,
            &[(
                "x-amzn-errortype",
                "NotFoundException:http://internal.amazon.com/coral/com.amazonaws.quicksight/",
            )],
            r#"{"Message":"no such dashboard","RequestId":"abc"}"#,
        );
        let parsed = ErrorResponse::parse(&resp);
        assert_eq!(parsed.code, "NotFoundException");
        assert_eq!(parsed.message, "no such dashboard");
        assert_eq!(parsed.request_id.as_deref(), Some("abc"));
    }

    #[test]
    fn parse_non_json_body() {
        let resp = response(502, &[], "<html>Bad Gateway</html>");
        let parsed = ErrorResponse::parse(&resp);
        assert_eq!(parsed.code, "UnknownError");
        assert!(parsed.message.contains("Bad Gateway"));
    }

    #[test]
    fn chain_first_match_wins() {
        let resp = response(400, &[], r#"{"__type":"ThrottlingException","message":"slow"}"#);
        let err: ServiceError<TestKind> = ServiceError::from_response("test", ErrorResponse::parse(&resp));
        assert_eq!(err.kind, Some(TestKind::Throttling));
        assert!(err.retryable);
        assert_eq!(err.error_type, ErrorType::Client);
    }

    #[test]
    fn unknown_code_falls_back() {
        let resp = response(500, &[], r#"{"__type":"SomethingNew","message":"?"}"#);
        let err: ServiceError<TestKind> = ServiceError::from_response("test", ErrorResponse::parse(&resp));
        assert_eq!(err.kind, None);
        assert_eq!(err.code, "SomethingNew");
        assert!(err.raw.contains("SomethingNew"));
        assert_eq!(err.error_type, ErrorType::Service);
    }

    #[test]
    fn kind_code_roundtrip() {
        assert_eq!(TestKind::NotFound.code(), "NotFoundException");
        assert_eq!(TestKind::from_code("NotFoundException"), Some(TestKind::NotFound));
        assert_eq!(TestKind::from_code("notfoundexception"), None);
    }

    #[test]
    fn display_includes_request_id() {
        let resp = response(400, &[("x-amzn-requestid", "r-9")], r#"{"__type":"NotFoundException","message":"m"}"#);
        let err: ServiceError<TestKind> =
            ServiceError::from_response("ecs", ErrorResponse::parse(&resp)).with_operation("DescribeClusters");
        let s = err.to_string();
        assert!(s.contains("ecs"));
        assert!(s.contains("NotFoundException"));
        assert!(s.contains("DescribeClusters"));
        assert!(s.contains("r-9"));
    }

    #[test]
    fn extra_payload_field() {
        let resp = response(409, &[], r#"{"__type":"NotFoundException","Message":"m","ResourceType":"DASHBOARD"}"#);
        let err: ServiceError<TestKind> = ServiceError::from_response("quicksight", ErrorResponse::parse(&resp));
        assert_eq!(err.field("ResourceType"), Some(serde_json::json!("DASHBOARD")));
    }

    #[test]
    fn sdk_error_accessors() {
        let client: SdkError<TestKind> = ClientError::timeout("slow").into();
        assert!(client.kind().is_none());
        assert_eq!(client.client_error().map(|e| e.kind), Some(ClientErrorKind::Timeout));

        let resp = response(404, &[], r#"{"__type":"NotFoundException"}"#);
        let service: SdkError<TestKind> =
            ServiceError::from_response("t", ErrorResponse::parse(&resp)).into();
        assert!(service.is_kind(TestKind::NotFound));
        assert_eq!(service.code(), Some("NotFoundException"));
    }

    #[test]
    fn not_retryable_auth() {
        assert!(!is_retryable_code("AccessDeniedException", 400));
        assert!(is_retryable_code("Anything", 503));
    }
}

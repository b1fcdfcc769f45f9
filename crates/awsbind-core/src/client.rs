//! The generic invoke pipeline shared by every service client.
//!
//! ```text
//!   request ──marshall──▶ MarshalledRequest ──bind──▶ HttpRequest
//!                                                        │
//!        credentials ◀── provider / per-call override    │
//!                 └──────────── sign ◀───────────────────┘
//!                                │
//!                           transport (once)
//!                                │
//!                 2xx ──unmarshall──▶ Output
//!                 else ──error chain──▶ ServiceError<K>
//! ```

use crate::config::{ClientConfig, Region};
use crate::credentials::{
    Credentials, CredentialsProviderChain, ProvideCredentials, SharedCredentialsProvider,
    StaticCredentialsProvider,
};
use crate::error::{ClientError, ErrorKind, ErrorResponse, SdkError, ServiceError};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::metrics::{Field, MetricsCollector, NoopMetricsCollector, RequestMetrics};
use crate::operation::Operation;
use crate::signing::{RequestSigner, SigV4Signer, SigningScope};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Static facts about a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Name used in logs and errors (e.g. `ecs`).
    pub service_name: &'static str,
    /// First label of the regional endpoint host.
    pub endpoint_prefix: &'static str,
    /// Service name in the SigV4 credential scope.
    pub signing_name: &'static str,
    pub api_version: &'static str,
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Used instead of the client's provider for this call.
    pub credentials: Option<Credentials>,
    /// Extra headers, signed with the request.
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

struct ClientInner {
    metadata: ServiceMetadata,
    config: ClientConfig,
    endpoint: url::Url,
    user_agent: String,
    credentials: SharedCredentialsProvider,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn RequestSigner>,
    metrics: Arc<dyn MetricsCollector>,
}

/// A configured connection to one service. Cheap to clone; clones share
/// the transport and providers.
pub struct ServiceClient<K> {
    inner: Arc<ClientInner>,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for ServiceClient<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for ServiceClient<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.inner.metadata.service_name)
            .field("region", &self.inner.config.region)
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("credentials", &self.inner.credentials)
            .finish()
    }
}

impl<K: ErrorKind> ServiceClient<K> {
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.inner.metadata
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn region(&self) -> &Region {
        &self.inner.config.region
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.inner.endpoint
    }

    /// Run one operation: marshal, sign, send once, then unmarshal or map
    /// the error response through `K`'s chain.
    pub fn invoke<O: Operation>(
        &self,
        operation: &O,
        options: &RequestOptions,
    ) -> Result<O::Output, SdkError<K>> {
        let mut metrics = RequestMetrics::new(self.inner.metadata.service_name, O::NAME);
        metrics.start_event(Field::ClientExecuteTime);
        let result = self.execute(operation, options, &mut metrics);
        metrics.end_event(Field::ClientExecuteTime);

        match result {
            Ok(_) => log::debug!(
                "{}.{} -> {:?} in {:?}",
                self.inner.metadata.service_name,
                O::NAME,
                metrics.status_code,
                metrics.timing(Field::ClientExecuteTime).unwrap_or_default()
            ),
            Err(ref err) => {
                metrics.error_code = Some(match err {
                    SdkError::Service(e) => e.code.clone(),
                    SdkError::Client(e) => format!("{:?}", e.kind),
                });
                log::warn!("{}.{} failed: {}", self.inner.metadata.service_name, O::NAME, err);
            }
        }
        self.inner.metrics.collect(&metrics);
        result
    }

    fn execute<O: Operation>(
        &self,
        operation: &O,
        options: &RequestOptions,
        metrics: &mut RequestMetrics,
    ) -> Result<O::Output, SdkError<K>> {
        let inner = &*self.inner;

        let marshalled = metrics.time(Field::RequestMarshallTime, || operation.marshall())?;
        let mut request = marshalled.into_http_request(&inner.endpoint)?;
        request.set_header("user-agent", inner.user_agent.clone());
        request.set_header("amz-sdk-invocation-id", metrics.invocation_id.clone());
        for (name, value) in &options.headers {
            request.set_header(name, value.clone());
        }

        let credentials = metrics.time(Field::CredentialsRequestTime, || {
            match options.credentials {
                Some(ref creds) => Ok(creds.clone()),
                None => inner.credentials.provide_credentials(),
            }
        })?;
        credentials.validate()?;
        if credentials.is_expired() {
            log::warn!(
                "Signing {}.{} with expired credentials",
                inner.metadata.service_name,
                O::NAME
            );
        }

        let signing_time = Utc::now() - chrono::Duration::seconds(inner.config.time_offset_secs);
        let scope = SigningScope {
            region: inner.config.region.as_str(),
            service: inner.metadata.signing_name,
        };
        metrics.time(Field::RequestSigningTime, || {
            inner
                .signer
                .sign(&mut request, &credentials, &scope, signing_time)
        })?;

        log::debug!(
            "{} {} {}",
            request.method,
            request.url,
            request.header("x-amz-target").unwrap_or(O::NAME)
        );
        let response = metrics.time(Field::HttpRequestTime, || inner.transport.send(&request))?;
        metrics.status_code = Some(response.status);

        if response.is_success() {
            let output = metrics.time(Field::ResponseProcessingTime, || O::unmarshall(&response))?;
            Ok(output)
        } else {
            let parsed = ErrorResponse::parse(&response);
            Err(ServiceError::<K>::from_response(inner.metadata.service_name, parsed)
                .with_operation(O::NAME)
                .into())
        }
    }
}

// ── Builder ─────────────────────────────────────────────────────────────

/// Implemented by each typed service client so the shared builder can
/// produce it.
pub trait ServiceBinding: Sized {
    type Kind: ErrorKind;

    const METADATA: ServiceMetadata;

    fn from_service_client(client: ServiceClient<Self::Kind>) -> Self;
}

/// Builder for a service client.
///
/// Anything left unset falls back to: the default credential chain, a
/// blocking reqwest transport built from the config, SigV4 signing, and no
/// metrics collection.
pub struct ClientBuilder<C> {
    config: ClientConfig,
    credentials: Option<SharedCredentialsProvider>,
    transport: Option<Arc<dyn HttpTransport>>,
    signer: Option<Arc<dyn RequestSigner>>,
    metrics: Option<Arc<dyn MetricsCollector>>,
    _client: PhantomData<fn() -> C>,
}

impl<C: ServiceBinding> Default for ClientBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ServiceBinding> ClientBuilder<C> {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            transport: None,
            signer: None,
            metrics: None,
            _client: PhantomData,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.config.region = region.into();
        self
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = Some(url.into());
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = Some(name.into());
        self
    }

    pub fn time_offset_secs(mut self, secs: i64) -> Self {
        self.config.time_offset_secs = secs;
        self
    }

    /// Fixed credentials.
    pub fn credentials(self, credentials: Credentials) -> Self {
        self.credentials_provider(StaticCredentialsProvider::new(credentials))
    }

    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    pub fn shared_credentials_provider(mut self, provider: SharedCredentialsProvider) -> Self {
        self.credentials = Some(provider);
        self
    }

    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    pub fn metrics_collector(mut self, collector: impl MetricsCollector + 'static) -> Self {
        self.metrics = Some(Arc::new(collector));
        self
    }

    pub fn build(self) -> Result<C, ClientError> {
        let metadata = C::METADATA;
        let endpoint = self.config.resolve_endpoint(metadata.endpoint_prefix)?;
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(CredentialsProviderChain::default_chain()));
        let user_agent = self.config.user_agent();

        log::debug!(
            "Built {} client for region {} at {}",
            metadata.service_name,
            self.config.region,
            endpoint
        );

        let inner = ClientInner {
            metadata,
            endpoint,
            user_agent,
            credentials,
            transport,
            signer: self.signer.unwrap_or_else(|| Arc::new(SigV4Signer::new())),
            metrics: self
                .metrics
                .unwrap_or_else(|| Arc::new(NoopMetricsCollector)),
            config: self.config,
        };
        Ok(C::from_service_client(ServiceClient {
            inner: Arc::new(inner),
            _kind: PhantomData,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientErrorKind;
    use crate::http::{HttpResponse, MockHttpTransport};
    use crate::metrics::LoggingMetricsCollector;
    use crate::operation::unmarshall_json;
    use crate::protocol::MarshalledRequest;
    use serde::{Deserialize, Serialize};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum PingErrorKind {
        Busy,
    }

    impl ErrorKind for PingErrorKind {
        const CHAIN: &'static [(&'static str, Self)] = &[("BusyException", PingErrorKind::Busy)];
    }

    #[derive(Debug, Clone)]
    struct PingClient(ServiceClient<PingErrorKind>);

    impl ServiceBinding for PingClient {
        type Kind = PingErrorKind;
        const METADATA: ServiceMetadata = ServiceMetadata {
            service_name: "ping",
            endpoint_prefix: "ping",
            signing_name: "ping",
            api_version: "2020-01-01",
        };
        fn from_service_client(client: ServiceClient<PingErrorKind>) -> Self {
            Self(client)
        }
    }

    #[derive(Debug, Serialize)]
    struct Ping {
        value: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        value: String,
    }

    impl Operation for Ping {
        const NAME: &'static str = "Ping";
        type Output = Pong;
        fn marshall(&self) -> Result<MarshalledRequest, ClientError> {
            MarshalledRequest::aws_json("Ping_20200101", Self::NAME, self)
        }
        fn unmarshall(response: &HttpResponse) -> Result<Pong, ClientError> {
            unmarshall_json(response)
        }
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse::new(200, BTreeMap::new(), body.as_bytes().to_vec())
    }

    fn client(transport: MockHttpTransport) -> PingClient {
        ClientBuilder::<PingClient>::new()
            .region("eu-west-1")
            .credentials(Credentials::new("AKIATEST", "secret"))
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn invoke_signs_and_unmarshalls() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.url.as_str() == "https://ping.eu-west-1.amazonaws.com/"
                    && req.header("x-amz-target") == Some("Ping_20200101.Ping")
                    && req.header("amz-sdk-invocation-id").is_some()
                    && req.header("user-agent").is_some()
                    && req
                        .header("authorization")
                        .is_some_and(|a| a.contains("Credential=AKIATEST/") && a.contains("/eu-west-1/ping/"))
            })
            .times(1)
            .returning(|_| Ok(ok(r#"{"value":"pong"}"#)));

        let out = client(transport)
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap();
        assert_eq!(out.value, "pong");
    }

    #[test]
    fn override_credentials_win() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.header("authorization")
                    .is_some_and(|a| a.contains("Credential=AKIAOVERRIDE/"))
                    && req.header("x-amz-security-token") == Some("tok")
            })
            .times(1)
            .returning(|_| Ok(ok(r#"{"value":"ok"}"#)));

        let options = RequestOptions::new()
            .with_credentials(Credentials::new_temporary("AKIAOVERRIDE", "s2", "tok", None));
        client(transport)
            .0
            .invoke(&Ping { value: "x".into() }, &options)
            .unwrap();
    }

    #[test]
    fn modeled_error_maps_to_kind() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(HttpResponse::new(
                400,
                BTreeMap::new(),
                br#"{"__type":"BusyException","message":"busy"}"#.to_vec(),
            ))
        });
        let err = client(transport)
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap_err();
        assert!(err.is_kind(PingErrorKind::Busy));
        assert_eq!(err.service_error().unwrap().operation.as_deref(), Some("Ping"));
    }

    #[test]
    fn transport_failure_is_client_error_without_retry() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(ClientError::transport("connection refused")));
        let err = client(transport)
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap_err();
        assert_eq!(
            err.client_error().map(|e| e.kind),
            Some(ClientErrorKind::Transport)
        );
    }

    #[test]
    fn missing_credentials_never_reach_transport() {
        #[derive(Debug)]
        struct NoCreds;
        impl ProvideCredentials for NoCreds {
            fn provide_credentials(&self) -> Result<Credentials, ClientError> {
                Err(ClientError::credentials("none"))
            }
        }

        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(0);
        let client = ClientBuilder::<PingClient>::new()
            .credentials_provider(NoCreds)
            .transport(transport)
            .build()
            .unwrap();
        let err = client
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap_err();
        assert_eq!(
            err.client_error().map(|e| e.kind),
            Some(ClientErrorKind::Credentials)
        );
    }

    #[test]
    fn logging_collector_plugs_into_builder() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(ok(r#"{"value":"logged"}"#)));
        let client = ClientBuilder::<PingClient>::new()
            .credentials(Credentials::new("AKIATEST", "secret"))
            .transport(transport)
            .metrics_collector(LoggingMetricsCollector)
            .build()
            .unwrap();
        let out = client
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap();
        assert_eq!(out.value, "logged");
    }

    #[derive(Debug, Default)]
    struct Recording(Mutex<Vec<RequestMetrics>>);

    impl MetricsCollector for Arc<Recording> {
        fn collect(&self, metrics: &RequestMetrics) {
            self.0.lock().unwrap().push(metrics.clone());
        }
    }

    #[test]
    fn metrics_are_collected() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(ok(r#"{"value":"ok"}"#)));
        let recording = Arc::new(Recording::default());
        let client = ClientBuilder::<PingClient>::new()
            .credentials(Credentials::new("AKIATEST", "secret"))
            .transport(transport)
            .metrics_collector(Arc::clone(&recording))
            .build()
            .unwrap();
        client
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap();

        let collected = recording.0.lock().unwrap();
        assert_eq!(collected.len(), 1);
        let m = &collected[0];
        assert_eq!(m.operation, "Ping");
        assert_eq!(m.status_code, Some(200));
        for field in [
            Field::ClientExecuteTime,
            Field::RequestMarshallTime,
            Field::CredentialsRequestTime,
            Field::RequestSigningTime,
            Field::HttpRequestTime,
            Field::ResponseProcessingTime,
        ] {
            assert!(m.timing(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn clock_skew_shifts_signing_time() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let date = req.header("x-amz-date").unwrap_or_default();
                let expected = (Utc::now() - chrono::Duration::days(2))
                    .format("%Y%m%d")
                    .to_string();
                date.starts_with(&expected)
            })
            .returning(|_| Ok(ok(r#"{"value":"ok"}"#)));
        let client = ClientBuilder::<PingClient>::new()
            .credentials(Credentials::new("AKIATEST", "secret"))
            .time_offset_secs(2 * 24 * 3600)
            .transport(transport)
            .build()
            .unwrap();
        client
            .0
            .invoke(&Ping { value: "x".into() }, &RequestOptions::new())
            .unwrap();
    }

    #[test]
    fn bad_endpoint_fails_build() {
        let result = ClientBuilder::<PingClient>::new()
            .endpoint_url("::nope::")
            .transport(MockHttpTransport::new())
            .build();
        assert_eq!(result.unwrap_err().kind, ClientErrorKind::Endpoint);
    }
}

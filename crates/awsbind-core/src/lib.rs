//! # awsbind-core
//!
//! Shared runtime for the awsbind service clients. It owns everything an
//! operation needs apart from its own request and response shapes:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 EcsClient / QuickSightClient                 │
//! │      (typed requests, typed responses, error-kind enums)     │
//! ├──────────────────────────────────────────────────────────────┤
//! │                  ServiceClient::invoke<O, K>                 │
//! │   marshall → credentials → sign → send → unmarshall / map    │
//! ├──────────────┬──────────────┬──────────────┬─────────────────┤
//! │ protocol     │ credentials  │ signing      │ http            │
//! │ awsJson 1.1  │ static, env, │ SigV4        │ blocking        │
//! │ restJson1    │ chain        │              │ reqwest         │
//! ├──────────────┴──────────────┴──────────────┴─────────────────┤
//! │   metrics (per-call timings)   │   policy (IAM actions/docs) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calls are synchronous: one marshalled request, one HTTP exchange, one
//! typed result or error. There is no retry loop and no credential cache.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod metrics;
pub mod operation;
pub mod policy;
pub mod protocol;
pub mod serde_util;
pub mod signing;

pub use client::{ClientBuilder, RequestOptions, ServiceBinding, ServiceClient, ServiceMetadata};
pub use config::{ClientConfig, Region};
pub use credentials::{
    Credentials, CredentialsProviderChain, EnvironmentCredentialsProvider, ProvideCredentials,
    SharedCredentialsProvider, StaticCredentialsProvider,
};
pub use error::{
    ClientError, ClientErrorKind, ErrorKind, ErrorResponse, ErrorType, SdkError, ServiceError,
};
pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use metrics::{Field, LoggingMetricsCollector, MetricsCollector, RequestMetrics};
pub use operation::Operation;
pub use protocol::MarshalledRequest;
pub use signing::{RequestSigner, SigV4Signer, SigningScope};

pub use reqwest::Method;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

//! The operation seam between a typed request and the invoke pipeline.

use crate::error::ClientError;
use crate::http::HttpResponse;
use crate::protocol::MarshalledRequest;
use serde::de::DeserializeOwned;

/// One API operation: its request value marshals itself and names the
/// output type the response unmarshals into.
pub trait Operation {
    /// Wire name of the operation (e.g. `DescribeClusters`).
    const NAME: &'static str;

    type Output;

    fn marshall(&self) -> Result<MarshalledRequest, ClientError>;

    /// Decode a 2xx response.
    fn unmarshall(response: &HttpResponse) -> Result<Self::Output, ClientError>;
}

/// Decode a JSON body. An empty body reads as `{}`.
pub fn unmarshall_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    let body: &[u8] = if response.body.iter().all(|b| b.is_ascii_whitespace()) {
        b"{}"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| {
        ClientError::unmarshall(format!(
            "failed to parse response (HTTP {}): {}",
            response.status, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Deserialize, Default, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Out {
        #[serde(default)]
        cluster_arns: Vec<String>,
        next_token: Option<String>,
    }

    #[test]
    fn empty_body_is_empty_object() {
        let resp = HttpResponse::new(200, BTreeMap::new(), Vec::new());
        let out: Out = unmarshall_json(&resp).unwrap();
        assert_eq!(out, Out::default());
    }

    #[test]
    fn parses_body() {
        let resp = HttpResponse::new(
            200,
            BTreeMap::new(),
            br#"{"clusterArns":["a"],"nextToken":"t"}"#.to_vec(),
        );
        let out: Out = unmarshall_json(&resp).unwrap();
        assert_eq!(out.cluster_arns, vec!["a".to_string()]);
        assert_eq!(out.next_token.as_deref(), Some("t"));
    }

    #[test]
    fn malformed_body_is_unmarshall_error() {
        let resp = HttpResponse::new(200, BTreeMap::new(), b"{not json".to_vec());
        let err = unmarshall_json::<Out>(&resp).unwrap_err();
        assert_eq!(err.kind, crate::error::ClientErrorKind::Unmarshall);
    }
}

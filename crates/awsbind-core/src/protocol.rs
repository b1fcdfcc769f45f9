//! Wire protocols: awsJson 1.1 and restJson1.
//!
//! A [`MarshalledRequest`] is the protocol-level shape of one call (method,
//! path, query, headers, body) before it is bound to an endpoint.

use crate::error::ClientError;
use crate::http::{host_header, HttpRequest};
use crate::signing::uri_encode;
use reqwest::Method;
use serde::Serialize;
use std::collections::BTreeMap;

pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
pub const REST_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct MarshalledRequest {
    pub method: Method,
    /// Request path with labels already encoded.
    pub path: String,
    /// Query parameters, unencoded, in insertion order.
    pub query: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl MarshalledRequest {
    /// awsJson 1.1: `POST /` with the operation named in `x-amz-target`.
    pub fn aws_json<T: Serialize>(
        target_prefix: &str,
        operation: &str,
        input: &T,
    ) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(input)
            .map_err(|e| ClientError::marshall(format!("{}: {}", operation, e)))?;
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), AWS_JSON_1_1.to_string());
        headers.insert(
            "x-amz-target".to_string(),
            format!("{}.{}", target_prefix, operation),
        );
        Ok(Self {
            method: Method::POST,
            path: "/".to_string(),
            query: Vec::new(),
            headers,
            body,
        })
    }

    /// restJson1 request without a body.
    pub fn rest(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when the value is present.
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Repeat the parameter once per value.
    pub fn query_list<V: ToString>(mut self, name: &str, values: &[V]) -> Self {
        for v in values {
            self.query.push((name.to_string(), v.to_string()));
        }
        self
    }

    /// Attach a restJson1 body.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = serde_json::to_vec(body).map_err(|e| ClientError::marshall(e.to_string()))?;
        self.headers
            .insert("content-type".to_string(), REST_JSON.to_string());
        Ok(self)
    }

    /// Bind to an endpoint. The endpoint's own path, if any, prefixes ours.
    pub fn into_http_request(self, endpoint: &url::Url) -> Result<HttpRequest, ClientError> {
        let mut url = endpoint.clone();
        let base = endpoint.path().trim_end_matches('/');
        let path = if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        };
        url.set_path(&path);

        if self.query.is_empty() {
            url.set_query(None);
        } else {
            let qs = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&qs));
        }

        let mut request = HttpRequest::new(self.method, url);
        request.set_header("host", host_header(&request.url));
        for (name, value) in self.headers {
            request.set_header(&name, value);
        }
        request.body = self.body;
        Ok(request)
    }
}

/// Encode one path label. `/` inside a label is encoded too.
pub fn encode_label(name: &str, value: &str) -> Result<String, ClientError> {
    if value.is_empty() {
        return Err(ClientError::marshall(format!(
            "path label '{}' must not be empty",
            name
        )));
    }
    Ok(uri_encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aws_json_shape() {
        let req = MarshalledRequest::aws_json(
            "AmazonEC2ContainerServiceV20141113",
            "ListClusters",
            &json!({"maxResults": 5}),
        )
        .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/");
        assert_eq!(
            req.headers["x-amz-target"],
            "AmazonEC2ContainerServiceV20141113.ListClusters"
        );
        assert_eq!(req.headers["content-type"], AWS_JSON_1_1);
        assert_eq!(req.body, br#"{"maxResults":5}"#.to_vec());
    }

    #[test]
    fn rest_binds_path_and_query() {
        let endpoint = url::Url::parse("https://quicksight.us-east-1.amazonaws.com").unwrap();
        let req = MarshalledRequest::rest(Method::GET, "/accounts/123/dashboards/d1")
            .query("version-number", 3)
            .query_opt::<&str>("alias-name", None)
            .into_http_request(&endpoint)
            .unwrap();
        assert_eq!(
            req.url.as_str(),
            "https://quicksight.us-east-1.amazonaws.com/accounts/123/dashboards/d1?version-number=3"
        );
        assert_eq!(req.header("host"), Some("quicksight.us-east-1.amazonaws.com"));
        assert!(req.body.is_empty());
    }

    #[test]
    fn query_values_encoded() {
        let endpoint = url::Url::parse("https://example.com/").unwrap();
        let req = MarshalledRequest::rest(Method::DELETE, "/tags")
            .query_list("keys", &["a b", "c/d"])
            .into_http_request(&endpoint)
            .unwrap();
        assert_eq!(req.url.query(), Some("keys=a%20b&keys=c%2Fd"));
    }

    #[test]
    fn endpoint_path_prefix_kept() {
        let endpoint = url::Url::parse("http://localhost:4566/proxy/").unwrap();
        let req = MarshalledRequest::rest(Method::GET, "/accounts/1/data-sets")
            .into_http_request(&endpoint)
            .unwrap();
        assert_eq!(req.url.path(), "/proxy/accounts/1/data-sets");
        assert_eq!(req.header("host"), Some("localhost:4566"));
    }

    #[test]
    fn label_encoding() {
        assert_eq!(
            encode_label("ResourceArn", "arn:aws:quicksight:us-east-1:1:dashboard/x").unwrap(),
            "arn%3Aaws%3Aquicksight%3Aus-east-1%3A1%3Adashboard%2Fx"
        );
        assert!(encode_label("DashboardId", "").is_err());
    }

    #[test]
    fn json_body_sets_content_type() {
        let req = MarshalledRequest::rest(Method::POST, "/x")
            .json_body(&json!({"Name": "n"}))
            .unwrap();
        assert_eq!(req.headers["content-type"], REST_JSON);
        assert_eq!(req.body, br#"{"Name":"n"}"#.to_vec());
    }
}

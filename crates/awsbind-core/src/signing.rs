//! AWS Signature Version 4.
//!
//! Follows the algorithm documented at
//! <https://docs.aws.amazon.com/general/latest/gr/sigv4_signing.html>:
//!
//! 1. Create a canonical request
//! 2. Create the string to sign
//! 3. Calculate the signing key
//! 4. Add the signature to the request
//!
//! The signer is a trait so callers can plug in a different scheme; the
//! clients default to [`SigV4Signer`].

use crate::credentials::Credentials;
use crate::error::ClientError;
use crate::http::{host_header, HttpRequest};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Hash of an empty payload.
pub const EMPTY_PAYLOAD_HASH: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// RFC 3986 unreserved characters stay as-is; everything else is encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Region and signing name a request is signed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningScope<'a> {
    pub region: &'a str,
    pub service: &'a str,
}

/// Adds authentication to an outgoing request.
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    fn sign(
        &self,
        request: &mut HttpRequest,
        credentials: &Credentials,
        scope: &SigningScope<'_>,
        time: DateTime<Utc>,
    ) -> Result<(), ClientError>;
}

/// Header-based SigV4 signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigV4Signer;

impl SigV4Signer {
    pub fn new() -> Self {
        Self
    }

    /// CanonicalRequest =
    ///   Method \n CanonicalURI \n CanonicalQueryString \n
    ///   CanonicalHeaders \n SignedHeaders \n HexEncode(Hash(Payload))
    fn create_canonical_request(
        method: &str,
        canonical_uri: &str,
        canonical_querystring: &str,
        headers: &BTreeMap<String, String>,
        payload_hash: &str,
    ) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            method,
            canonical_uri,
            canonical_querystring,
            canonical_headers(headers),
            signed_header_names(headers),
            payload_hash
        )
    }

    fn create_string_to_sign(
        amz_date: &str,
        credential_scope: &str,
        canonical_request: &str,
    ) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            credential_scope,
            sha256_hex(canonical_request.as_bytes())
        )
    }

    /// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
    pub fn derive_signing_key(
        secret_access_key: &str,
        date_stamp: &str,
        region: &str,
        service: &str,
    ) -> Vec<u8> {
        let k_secret = format!("AWS4{}", secret_access_key);
        let k_date = hmac_sha256(k_secret.as_bytes(), date_stamp.as_bytes());
        let k_region = hmac_sha256(&k_date, region.as_bytes());
        let k_service = hmac_sha256(&k_region, service.as_bytes());
        hmac_sha256(&k_service, b"aws4_request")
    }
}

impl RequestSigner for SigV4Signer {
    fn sign(
        &self,
        request: &mut HttpRequest,
        credentials: &Credentials,
        scope: &SigningScope<'_>,
        time: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        if credentials.access_key_id.is_empty() || credentials.secret_access_key.is_empty() {
            return Err(ClientError::signing("cannot sign with empty credentials"));
        }
        if scope.region.is_empty() || scope.service.is_empty() {
            return Err(ClientError::signing("signing region and service are required"));
        }

        let date_stamp = time.format("%Y%m%d").to_string();
        let amz_date = time.format("%Y%m%dT%H%M%SZ").to_string();

        if request.header("host").is_none() {
            let host = host_header(&request.url);
            request.set_header("host", host);
        }
        request.headers.remove("authorization");
        request.set_header("x-amz-date", amz_date.clone());
        match credentials.session_token {
            Some(ref token) => request.set_header("x-amz-security-token", token.clone()),
            None => {
                request.headers.remove("x-amz-security-token");
            }
        }

        let payload_hash = sha256_hex(&request.body);
        let (canonical_uri, canonical_querystring) = url_components(&request.url);

        let canonical_request = Self::create_canonical_request(
            request.method.as_str(),
            &canonical_uri,
            &canonical_querystring,
            &request.headers,
            &payload_hash,
        );
        log::trace!("SigV4 canonical request:\n{}", canonical_request);

        let credential_scope = format!(
            "{}/{}/{}/aws4_request",
            date_stamp, scope.region, scope.service
        );
        let string_to_sign =
            Self::create_string_to_sign(&amz_date, &credential_scope, &canonical_request);

        let signing_key = Self::derive_signing_key(
            &credentials.secret_access_key,
            &date_stamp,
            scope.region,
            scope.service,
        );
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM,
            credentials.access_key_id,
            credential_scope,
            signed_header_names(&request.headers),
            signature
        );
        request.set_header("authorization", authorization);
        Ok(())
    }
}

// ── Helper functions ────────────────────────────────────────────────────

/// Headers lowercased, sorted and whitespace-trimmed, one per line.
fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
    let mut sorted: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| {
            let value = v.split_whitespace().collect::<Vec<_>>().join(" ");
            (k.to_lowercase(), value)
        })
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v))
        .collect::<String>()
}

/// Semicolon-delimited, sorted, lowercased header names.
fn signed_header_names(headers: &BTreeMap<String, String>) -> String {
    let mut names: Vec<String> = headers.keys().map(|k| k.to_lowercase()).collect();
    names.sort();
    names.join(";")
}

pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Split a URL into (canonical_uri, canonical_querystring).
///
/// Path segments are encoded again on top of their wire encoding, as every
/// service except S3 expects.
fn url_components(url: &url::Url) -> (String, String) {
    let path = if url.path().is_empty() {
        "/".to_string()
    } else {
        uri_encode_path(url.path())
    };

    let mut query_params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (uri_encode(&k), uri_encode(&v)))
        .collect();
    query_params.sort();

    let query_string = query_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<String>>()
        .join("&");

    (path, query_string)
}

/// RFC 3986 percent-encoding, `/` included.
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

fn uri_encode_path(path: &str) -> String {
    path.split('/')
        .map(uri_encode)
        .collect::<Vec<String>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn creds() -> Credentials {
        Credentials::new("AKIDEXAMPLE", SECRET)
    }

    fn fixed_time() -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2015, 8, 30)
            .unwrap()
            .and_hms_opt(12, 36, 0)
            .unwrap()
            .and_utc()
    }

    fn scope() -> SigningScope<'static> {
        SigningScope {
            region: "us-east-1",
            service: "service",
        }
    }

    #[test]
    fn sha256_empty() {
        assert_eq!(sha256_hex(b""), EMPTY_PAYLOAD_HASH);
        assert_eq!(
            sha256_hex(b"test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn derive_signing_key_known() {
        let key = SigV4Signer::derive_signing_key(SECRET, "20150830", "us-east-1", "iam");
        assert_eq!(
            hex::encode(key),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn uri_encode_rules() {
        assert_eq!(uri_encode("hello world"), "hello%20world");
        assert_eq!(uri_encode("a/b"), "a%2Fb");
        assert_eq!(uri_encode("key=value"), "key%3Dvalue");
        assert_eq!(uri_encode("abcABC123-_.~"), "abcABC123-_.~");
    }

    #[test]
    fn query_sorted_and_encoded() {
        let url = url::Url::parse("https://example.com/?Z=1&A=2&M=a%20b").unwrap();
        let (path, query) = url_components(&url);
        assert_eq!(path, "/");
        assert_eq!(query, "A=2&M=a%20b&Z=1");
    }

    #[test]
    fn path_double_encoded() {
        let url = url::Url::parse("https://example.com/resources/arn%3Aaws%3Aq/tags").unwrap();
        let (path, _) = url_components(&url);
        assert_eq!(path, "/resources/arn%253Aaws%253Aq/tags");
    }

    #[test]
    fn canonical_headers_sorted_and_trimmed() {
        let mut headers = BTreeMap::new();
        headers.insert("host".to_string(), "example.com".to_string());
        headers.insert("x-amz-date".to_string(), "20150830T123600Z".to_string());
        headers.insert("content-type".to_string(), "  application/json  ".to_string());
        let canonical = canonical_headers(&headers);
        let lines: Vec<&str> = canonical.lines().collect();
        assert_eq!(lines[0], "content-type:application/json");
        assert_eq!(lines[1], "host:example.com");
        assert_eq!(lines[2], "x-amz-date:20150830T123600Z");
        assert_eq!(signed_header_names(&headers), "content-type;host;x-amz-date");
    }

    // Reference values from the AWS Signature V4 test suite.

    #[test]
    fn sigv4_test_suite_get_vanilla() {
        let url = url::Url::parse("https://example.amazonaws.com/").unwrap();
        let mut req = HttpRequest::new(Method::GET, url);
        SigV4Signer::new()
            .sign(&mut req, &creds(), &scope(), fixed_time())
            .unwrap();
        assert_eq!(
            req.header("authorization").unwrap(),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(req.header("x-amz-date"), Some("20150830T123600Z"));
    }

    #[test]
    fn sigv4_test_suite_get_vanilla_query_order() {
        let url =
            url::Url::parse("https://example.amazonaws.com/?Param2=value2&Param1=value1").unwrap();
        let mut req = HttpRequest::new(Method::GET, url);
        SigV4Signer::new()
            .sign(&mut req, &creds(), &scope(), fixed_time())
            .unwrap();
        assert!(req
            .header("authorization")
            .unwrap()
            .ends_with("Signature=b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"));
    }

    #[test]
    fn session_token_is_signed() {
        let url = url::Url::parse("https://ecs.us-east-1.amazonaws.com/").unwrap();
        let mut req = HttpRequest::new(Method::POST, url);
        let creds = Credentials::new_temporary("ASIAEXAMPLE", "secret", "token123", None);
        SigV4Signer::new()
            .sign(&mut req, &creds, &scope(), fixed_time())
            .unwrap();
        assert_eq!(req.header("x-amz-security-token"), Some("token123"));
        assert!(req
            .header("authorization")
            .unwrap()
            .contains("SignedHeaders=host;x-amz-date;x-amz-security-token"));
    }

    #[test]
    fn resigning_replaces_signature() {
        let url = url::Url::parse("https://example.amazonaws.com/").unwrap();
        let mut req = HttpRequest::new(Method::GET, url);
        let signer = SigV4Signer::new();
        signer.sign(&mut req, &creds(), &scope(), fixed_time()).unwrap();
        let first = req.header("authorization").unwrap().to_string();
        signer.sign(&mut req, &creds(), &scope(), fixed_time()).unwrap();
        assert_eq!(req.header("authorization").unwrap(), first);
    }

    #[test]
    fn empty_credentials_rejected() {
        let url = url::Url::parse("https://example.amazonaws.com/").unwrap();
        let mut req = HttpRequest::new(Method::GET, url);
        let err = SigV4Signer::new()
            .sign(&mut req, &Credentials::new("", ""), &scope(), fixed_time())
            .unwrap_err();
        assert_eq!(err.kind, crate::error::ClientErrorKind::Signing);
    }
}

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Method, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ApiError, Error, Result};

pub(crate) const REQUEST_ID_HEADER: &str = "opc-request-id";
pub(crate) const ETAG_HEADER: &str = "etag";
pub(crate) const NEXT_PAGE_HEADER: &str = "opc-next-page";
pub(crate) const WORK_REQUEST_ID_HEADER: &str = "opc-work-request-id";

/// Retry/backoff policy carried by a request (defaults use 8 attempts + jittered exponential backoff).
///
/// The crate never executes retries; the policy is handed to whoever sends the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
    /// Retry non-idempotent POSTs (only safe when an `opc-retry-token` is sent).
    pub retry_post: bool,
}

impl RetryPolicy {
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Whether the given status code should trigger a retry for this method.
    pub fn should_retry_status(&self, method: &Method, status: StatusCode) -> bool {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return self.allow_for_method(method);
        }
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            return self.allow_for_method(method);
        }
        false
    }

    /// Whether the given transport error should trigger a retry.
    pub fn should_retry_error(&self, method: &Method, err: &reqwest::Error) -> bool {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return self.allow_for_method(method);
        }
        false
    }

    /// Jittered exponential backoff for the given attempt (1-indexed).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = if attempt == 0 {
            0
        } else {
            (attempt - 1).min(10)
        };
        let base = self.base_backoff.saturating_mul(2u32.saturating_pow(exp));
        let capped = std::cmp::min(base, self.max_backoff);
        let jitter = 0.5 + fastrand::f64(); // 0.5x .. 1.5x
        let seconds = (capped.as_secs_f64() * jitter).min(self.max_backoff.as_secs_f64());
        Duration::from_secs_f64(seconds)
    }

    fn allow_for_method(&self, method: &Method) -> bool {
        if method == Method::POST {
            return self.retry_post;
        }
        true
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            retry_post: true,
        }
    }
}

/// Structured header list with validation.
#[derive(Clone, Debug, Default)]
pub struct HeaderList(Vec<HeaderEntry>);

impl HeaderList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a header entry.
    ///
    /// # Panics
    /// Panics if the header key or value is empty or contains only whitespace.
    pub fn push(&mut self, entry: HeaderEntry) {
        assert!(
            entry.is_valid(),
            "Invalid header: key and value must be non-empty (got key={:?}, value={:?})",
            entry.key,
            entry.value
        );
        self.0.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !(self.key.trim().is_empty() || self.value.trim().is_empty())
    }
}

/// A bound request, ready to be sent by a transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    /// Path segments after placeholder substitution, unencoded.
    pub path_segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Unencoded path, e.g. `/drgs/ocid1.drg.oc1..x/actions/migrate`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.path_segments {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a header, when it is valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body decoded as JSON.
    pub fn json_body(&self) -> Result<Option<Value>> {
        match &self.body {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    /// Append the (percent-encoded) path and query to a service endpoint.
    pub fn url(&self, endpoint: &Url) -> Result<Url> {
        let mut url = endpoint.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::InvalidRequest(format!("endpoint {endpoint} cannot carry a path"))
            })?;
            segments.pop_if_empty();
            segments.extend(self.path_segments.iter().map(String::as_str));
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        Ok(url)
    }

    /// Convert into a `reqwest::Request` aimed at `endpoint`.
    pub fn into_reqwest(self, endpoint: &Url) -> Result<reqwest::Request> {
        let url = self.url(endpoint)?;
        let mut request = reqwest::Request::new(self.method, url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        Ok(request)
    }
}

/// The HTTP response a response record was decoded from.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Consume a live response, buffering its body.
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Non-empty value of a header.
    pub fn header(&self, name: &str) -> Option<String> {
        header_value(self.headers.get(name))
    }

    pub fn request_id(&self) -> Option<String> {
        self.header(REQUEST_ID_HEADER)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

fn header_value(value: Option<&HeaderValue>) -> Option<String> {
    value
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Decode the service error envelope (`{"code": ..., "message": ...}`).
pub(crate) fn parse_api_error(raw: &RawResponse) -> ApiError {
    let request_id = raw.request_id();
    let status_code = raw.status.as_u16();
    let status_text = raw
        .status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    let body = String::from_utf8_lossy(&raw.body).into_owned();

    if body.is_empty() {
        return ApiError {
            status: status_code,
            code: None,
            message: status_text,
            request_id,
            raw_body: None,
        };
    }

    if let Ok(value) = serde_json::from_str::<Value>(&body) {
        let code = value
            .get("code")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        if code.is_some() || message.is_some() {
            return ApiError {
                status: status_code,
                code,
                message: message.unwrap_or(status_text),
                request_id,
                raw_body: Some(body),
            };
        }
    }

    ApiError {
        status: status_code,
        code: None,
        message: body.clone(),
        request_id,
        raw_body: Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(segments: &[&str]) -> HttpRequest {
        HttpRequest {
            method: Method::GET,
            path_segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[test]
    fn backoff_respects_max_and_jitter() {
        let retry = RetryPolicy {
            max_attempts: 3,
            base_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(1),
            retry_post: true,
        };

        let delay = retry.backoff_delay(5);
        assert!(delay <= Duration::from_secs(1));
        assert!(delay >= Duration::from_millis(250));
    }

    #[test]
    fn not_implemented_is_never_retried() {
        let retry = RetryPolicy::default();
        assert!(retry.should_retry_status(&Method::GET, StatusCode::SERVICE_UNAVAILABLE));
        assert!(retry.should_retry_status(&Method::GET, StatusCode::TOO_MANY_REQUESTS));
        assert!(!retry.should_retry_status(&Method::GET, StatusCode::NOT_IMPLEMENTED));
        assert!(!retry.should_retry_status(&Method::GET, StatusCode::CONFLICT));
    }

    #[test]
    fn retry_post_toggle_honored() {
        let retry = RetryPolicy {
            retry_post: false,
            ..Default::default()
        };
        assert!(!retry.should_retry_status(&Method::POST, StatusCode::INTERNAL_SERVER_ERROR));
        assert!(retry.should_retry_status(&Method::PUT, StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(RetryPolicy::disabled().max_attempts, 1);
    }

    #[test]
    #[should_panic(expected = "Invalid header")]
    fn header_list_panics_on_whitespace_only() {
        let mut list = HeaderList::new();
        list.push(HeaderEntry::new("   ", "value"));
    }

    #[test]
    fn url_encodes_segments_and_keeps_endpoint_path() {
        let mut req = request(&["drgAttachments", "ocid1/with space"]);
        req.query.push(("compartmentId".into(), "ocid1.compartment.oc1..c".into()));
        let endpoint = Url::parse("https://iaas.us-ashburn-1.oraclecloud.com/20160918/").unwrap();
        let url = req.url(&endpoint).unwrap();
        assert_eq!(
            url.as_str(),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918/drgAttachments/ocid1%2Fwith%20space\
             ?compartmentId=ocid1.compartment.oc1..c"
        );
        assert_eq!(req.path(), "/drgAttachments/ocid1/with space");
    }

    #[test]
    fn url_rejects_cannot_be_a_base_endpoint() {
        let endpoint = Url::parse("mailto:ops@example.com").unwrap();
        let err = request(&["x"]).url(&endpoint).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn parses_service_error_envelope() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-1"));
        let raw = RawResponse::new(
            StatusCode::NOT_FOUND,
            headers,
            r#"{"code":"NotAuthorizedOrNotFound","message":"Authorization failed"}"#,
        );
        let err = parse_api_error(&raw);
        assert_eq!(err.status, 404);
        assert_eq!(err.code.as_deref(), Some("NotAuthorizedOrNotFound"));
        assert_eq!(err.message, "Authorization failed");
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn falls_back_to_status_text_or_body() {
        let empty = RawResponse::new(StatusCode::BAD_GATEWAY, HeaderMap::new(), Vec::new());
        assert_eq!(parse_api_error(&empty).message, "Bad Gateway");
        let text = RawResponse::new(StatusCode::BAD_GATEWAY, HeaderMap::new(), "upstream down");
        let err = parse_api_error(&text);
        assert_eq!(err.message, "upstream down");
        assert_eq!(err.code, None);
    }
}

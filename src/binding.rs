//! Request/response binding.
//!
//! A request record is turned into an [`HttpRequest`] by serializing it to a
//! wire-keyed JSON object and routing each schema field to the path, query,
//! headers or body according to its [`Position`]. Response records are built
//! from a [`RawResponse`] by promoting headers and decoding the body.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    errors::{Error, Result},
    http::{parse_api_error, HeaderList, HttpRequest, RawResponse, RetryPolicy},
    schema::{Position, Record},
    validate::Validate,
};

/// Client-side settings attached to a request. Never transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    pub retry_policy: Option<RetryPolicy>,
}

impl RequestMetadata {
    pub fn with_retry_policy(retry_policy: RetryPolicy) -> Self {
        Self {
            retry_policy: Some(retry_policy),
        }
    }
}

/// An operation's request record.
pub trait OciRequest: Record + Validate + Serialize {
    const METHOD: Method;
    /// Path template with `{wireName}` placeholders, relative to the service endpoint.
    const PATH: &'static str;

    fn request_metadata(&self) -> &RequestMetadata;

    fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.request_metadata().retry_policy.as_ref()
    }

    /// Raw bytes to send instead of a JSON body.
    fn binary_request_body(&self) -> Option<Vec<u8>> {
        None
    }

    /// Records sent as the body; validated along with the request.
    fn submitted_records(&self) -> Vec<&dyn Validate> {
        Vec::new()
    }

    fn http_request(
        &self,
        method: Method,
        path: &str,
        extra_headers: &HeaderList,
    ) -> Result<HttpRequest>
    where
        Self: Sized,
    {
        bind(self, method, path, extra_headers)
    }

    /// Bind with the operation's own method and path.
    fn to_http_request(&self) -> Result<HttpRequest>
    where
        Self: Sized,
    {
        self.http_request(Self::METHOD, Self::PATH, &HeaderList::new())
    }
}

/// An operation's response record.
pub trait OciResponse: Sized {
    fn from_raw(raw: RawResponse) -> Result<Self>;

    fn raw_response(&self) -> &RawResponse;
}

/// Read a live response and decode it as `R`.
pub async fn read_response<R: OciResponse>(response: reqwest::Response) -> Result<R> {
    R::from_raw(RawResponse::read(response).await?)
}

fn bind<R: OciRequest>(
    request: &R,
    method: Method,
    path: &str,
    extra_headers: &HeaderList,
) -> Result<HttpRequest> {
    request.validate_enum_value()?;
    for record in request.submitted_records() {
        record.validate_enum_value()?;
    }

    let wire = match serde_json::to_value(request)? {
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidRequest(format!(
                "{} serialized to {other} instead of an object",
                R::NAME
            )))
        }
    };

    let mut path_values: Vec<(&'static str, String)> = Vec::new();
    let mut query = Vec::new();
    let mut headers = HeaderMap::new();
    let mut body_fields = Map::new();

    for entry in extra_headers.iter() {
        insert_header(&mut headers, &entry.key, &entry.value)?;
    }

    let body_count = R::fields()
        .iter()
        .filter(|f| f.position == Position::Body)
        .count();

    for field in R::fields() {
        if field.position == Position::Metadata {
            continue;
        }
        let value = wire.get(field.wire_name).filter(|v| is_present(v));
        let Some(value) = value else {
            if field.mandatory {
                return Err(Error::MissingField {
                    record: R::NAME,
                    field: field.wire_name,
                });
            }
            continue;
        };
        match field.position {
            Position::Path => path_values.push((field.wire_name, render(value))),
            Position::Query => query.push((field.wire_name.to_string(), render(value))),
            Position::Header => insert_header(&mut headers, field.wire_name, &render(value))?,
            Position::Body => {
                body_fields.insert(field.wire_name.to_string(), value.clone());
            }
            Position::Metadata => {}
        }
    }

    let path_segments = substitute_path(R::NAME, path, &path_values)?;

    let body = if let Some(bytes) = request.binary_request_body() {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        Some(bytes)
    } else if body_fields.is_empty() {
        None
    } else {
        let payload = if body_count == 1 {
            body_fields
                .into_iter()
                .next()
                .map(|(_, value)| value)
                .unwrap_or(Value::Null)
        } else {
            Value::Object(body_fields)
        };
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Some(serde_json::to_vec(&payload)?)
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        record = R::NAME,
        method = %method,
        path = %path,
        query_params = query.len(),
        has_body = body.is_some(),
        "request bound"
    );

    Ok(HttpRequest {
        method,
        path_segments,
        query,
        headers,
        body,
    })
}

/// Fail with `Error::Api` unless the status is a success.
pub(crate) fn ensure_success(raw: RawResponse) -> Result<RawResponse> {
    if raw.status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = %raw.status,
            request_id = raw.request_id().as_deref().unwrap_or(""),
            "response decoded"
        );
        return Ok(raw);
    }
    let err = parse_api_error(&raw);
    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = err.status,
        code = err.code.as_deref().unwrap_or(""),
        request_id = err.request_id.as_deref().unwrap_or(""),
        "service returned an error"
    );
    Err(err.into())
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Strings verbatim, lists comma-joined, other scalars as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidRequest(format!("invalid header name {name:?}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidRequest(format!("header {name} has an invalid value")))?;
    headers.insert(header_name, header_value);
    Ok(())
}

fn substitute_path(
    record: &'static str,
    template: &str,
    values: &[(&'static str, String)],
) -> Result<Vec<String>> {
    template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let Some(name) = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            else {
                return Ok(segment.to_string());
            };
            values
                .iter()
                .find(|(wire_name, _)| *wire_name == name)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    Error::InvalidRequest(format!("{record}: path placeholder {{{name}}} has no value"))
                })
        })
        .collect()
}

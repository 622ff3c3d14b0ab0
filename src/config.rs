use reqwest::Url;

use crate::{
    binding::OciRequest,
    errors::{Error, Result},
    http::{HeaderEntry, HeaderList, HttpRequest, RetryPolicy},
};

/// API version segment every Core Services path hangs off.
pub const API_VERSION: &str = "20160918";

/// Endpoint and request defaults for one region.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub region: String,
    /// Overrides the regional endpoint when set.
    pub endpoint: Option<String>,
    /// Extra headers applied to every bound request.
    pub default_headers: HeaderList,
    /// Used when a request carries no retry policy of its own.
    pub retry_policy: RetryPolicy,
}

impl Config {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add a header sent with every bound request.
    ///
    /// # Panics
    /// Panics if the key or value is empty or whitespace. Use
    /// [`Config::try_with_header`] for headers that come from user input.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push(HeaderEntry::new(key, value));
        self
    }

    /// Fallible form of [`Config::with_header`].
    pub fn try_with_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let entry = HeaderEntry::new(key, value);
        if !entry.is_valid() {
            return Err(Error::InvalidRequest(format!(
                "header {:?} needs a non-empty key and value",
                entry.key
            )));
        }
        self.default_headers.push(entry);
        Ok(self)
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Service endpoint, e.g. `https://iaas.us-ashburn-1.oraclecloud.com/20160918`.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => {
                if self.region.trim().is_empty() {
                    return Err(Error::InvalidRequest(
                        "either a region or an endpoint is required".into(),
                    ));
                }
                format!("https://iaas.{}.oraclecloud.com/{API_VERSION}", self.region.trim())
            }
        };
        Url::parse(&raw).map_err(|err| Error::InvalidRequest(format!("endpoint {raw:?}: {err}")))
    }

    /// Bind `request` with the default headers applied.
    pub fn bind<R: OciRequest>(&self, request: &R) -> Result<HttpRequest> {
        request.http_request(R::METHOD, R::PATH, &self.default_headers)
    }

    /// Bind `request` and aim it at this configuration's endpoint.
    pub fn build_request<R: OciRequest>(&self, request: &R) -> Result<reqwest::Request> {
        let endpoint = self.endpoint()?;
        self.bind(request)?.into_reqwest(&endpoint)
    }

    /// The request's own retry policy, or the configured default.
    pub fn retry_policy_for<R: OciRequest>(&self, request: &R) -> RetryPolicy {
        request
            .retry_policy()
            .cloned()
            .unwrap_or_else(|| self.retry_policy.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{binding::RequestMetadata, operations::GetDrgAttachmentRequest};

    #[test]
    fn regional_endpoint_is_derived() {
        let config = Config::new("us-phoenix-1");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://iaas.us-phoenix-1.oraclecloud.com/20160918"
        );
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = Config::new("us-phoenix-1").with_endpoint("http://localhost:8080/core");
        assert_eq!(config.endpoint().unwrap().as_str(), "http://localhost:8080/core");
        assert!(matches!(
            Config::default().endpoint(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn try_with_header_rejects_blank_values() {
        let config = Config::new("us-ashburn-1")
            .try_with_header("opc-client-info", "oci-core-models")
            .unwrap();
        assert_eq!(config.default_headers.iter().count(), 1);

        let err = config.try_with_header("opc-client-info", "  ").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(Config::default().try_with_header("", "value").is_err());
    }

    #[test]
    fn default_headers_and_retry_policy_apply() {
        let config = Config::new("us-ashburn-1").with_header("opc-client-info", "oci-core-models");
        let request = GetDrgAttachmentRequest::new("ocid1.drgattachment.oc1..a");
        let bound = config.bind(&request).unwrap();
        assert_eq!(bound.header("opc-client-info"), Some("oci-core-models"));
        assert_eq!(config.retry_policy_for(&request), RetryPolicy::default());

        let request = request.with_request_metadata(RequestMetadata::with_retry_policy(
            RetryPolicy::disabled(),
        ));
        assert_eq!(config.retry_policy_for(&request).max_attempts, 1);

        let built = config.build_request(&request).unwrap();
        assert_eq!(
            built.url().as_str(),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918/drgAttachments/ocid1.drgattachment.oc1..a"
        );
    }
}

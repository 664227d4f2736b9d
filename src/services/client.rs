/// HTTP client for the recommendation backend
///
/// Every backend call goes through [`ApiClient::request`], which owns header
/// defaults, status handling and error normalization. The base URL is fixed
/// at construction so tests can point a client at a stub server.
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client as HttpClient, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Defaults to GET
    pub method: Option<Method>,
    /// Merged over the default headers; these win on conflicting names
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sent as the serialized request body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a request against `base_url + endpoint` and decodes the JSON body.
    ///
    /// Non-success statuses become [`ApiError::Client`] or [`ApiError::Server`]
    /// carrying the body's `detail` when there is one, otherwise
    /// `API Error: {code} {reason}`. A successful body is decoded into `T`
    /// without further validation.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let result = self.send(endpoint, options).await;

        if let Err(e) = &result {
            tracing::error!(endpoint = %endpoint, error = %e, "API request failed");
        }

        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let method = options.method.unwrap_or(Method::GET);

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(merge_headers(options.headers));

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status, &bytes);
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        let value = serde_json::from_slice(&bytes)?;

        tracing::debug!(endpoint = %endpoint, status = status.as_u16(), "API request succeeded");

        Ok(value)
    }
}

/// JSON content type first, caller headers on top
fn merge_headers(overrides: HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for name in overrides.keys() {
        headers.remove(name);
    }
    for (name, value) in overrides.iter() {
        headers.append(name.clone(), value.clone());
    }

    headers
}

fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    match detail {
        Some(Value::String(detail)) if !detail.is_empty() => detail,
        Some(Value::Null) | Some(Value::String(_)) | None => format!(
            "API Error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )
        .trim_end()
        .to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{header::HeaderName, StatusCode};

    #[test]
    fn test_merge_headers_sets_json_content_type() {
        let headers = merge_headers(HeaderMap::new());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_merge_headers_caller_wins() {
        let mut overrides = HeaderMap::new();
        overrides.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        overrides.insert(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("abc"),
        );

        let headers = merge_headers(overrides);
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get("x-request-id").unwrap(), "abc");
    }

    #[test]
    fn test_error_message_prefers_detail() {
        let message = error_message(StatusCode::NOT_FOUND, br#"{"detail":"movie not found"}"#);
        assert_eq!(message, "movie not found");
    }

    #[test]
    fn test_error_message_falls_back_to_status_line() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
            "API Error: 500 Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, br#"{"error":"x"}"#),
            "API Error: 400 Bad Request"
        );
    }

    #[test]
    fn test_error_message_renders_structured_detail() {
        let message = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["query","limit"]}]}"#,
        );
        assert_eq!(message, r#"[{"loc":["query","limit"]}]"#);
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}

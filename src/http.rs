//! Thin wrapper around the browser's `fetch` for the page's JSON endpoints.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_METHOD: &str = "GET";
const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("X-Requested-With", "XMLHttpRequest"),
];

/// Caller-supplied request options, deserializable from a JS options object.
///
/// Every field is optional; a field left unset falls back to the defaults
/// (`GET`, JSON content type, ajax marker header). A supplied field replaces
/// its default wholesale, so passing `headers` opts out of the default set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }

    pub fn header_pairs(&self) -> Vec<(String, String)> {
        match &self.headers {
            Some(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => DEFAULT_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Failure modes of a page request.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request never completed (connection failure, CORS, abort).
    Network(String),
    /// The response body was not the JSON shape the caller expected.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "request failed with HTTP status {}", code),
            FetchError::Network(message) => write!(f, "request failed: {}", message),
            FetchError::Decode(message) => write!(f, "failed to decode response body: {}", message),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::{FetchError, RequestOptions};
    use crate::toast::{show_toast, ToastLevel};
    use serde::de::DeserializeOwned;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    /// Best-effort human-readable message for a thrown JS value.
    pub(crate) fn js_error_message(err: JsValue, fallback: &str) -> String {
        if let Some(message) = err.as_string() {
            return message;
        }
        if let Ok(error) = err.dyn_into::<js_sys::Error>() {
            return error.message().into();
        }
        fallback.to_string()
    }

    fn network(err: JsValue) -> FetchError {
        FetchError::Network(js_error_message(err, "fetch failed"))
    }

    async fn perform<T: DeserializeOwned>(
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, FetchError> {
        let init = RequestInit::new();
        init.set_method(options.method());

        let headers = Headers::new().map_err(network)?;
        for (name, value) in options.header_pairs() {
            headers.append(&name, &value).map_err(network)?;
        }
        init.set_headers(headers.as_ref());

        if let Some(body) = &options.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
        let response = JsFuture::from(gloo_utils::window().fetch_with_request(&request))
            .await
            .map_err(network)?;
        let response: Response = response.dyn_into().map_err(|_| {
            FetchError::Network("fetch resolved to a non-Response value".to_string())
        })?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let json = JsFuture::from(response.json().map_err(network)?)
            .await
            .map_err(network)?;
        serde_wasm_bindgen::from_value(json).map_err(|err| FetchError::Decode(err.to_string()))
    }

    /// Perform an HTTP request and deserialize the JSON response body.
    ///
    /// Any failure is logged and surfaced to the user as an error toast
    /// before being returned, so callers can still react to it themselves.
    pub async fn request<T: DeserializeOwned>(
        url: &str,
        options: RequestOptions,
    ) -> Result<T, FetchError> {
        match perform(url, &options).await {
            Ok(value) => Ok(value),
            Err(err) => {
                log::error!("Request to {} failed: {}", url, err);
                show_toast("Request failed, please try again later", ToastLevel::Error);
                Err(err)
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::request;
#[cfg(target_arch = "wasm32")]
pub(crate) use js::js_error_message;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_is_get() {
        assert_eq!(RequestOptions::default().method(), "GET");
    }

    #[test]
    fn caller_method_wins() {
        let options = RequestOptions {
            method: Some("POST".to_string()),
            ..Default::default()
        };
        assert_eq!(options.method(), "POST");
    }

    #[test]
    fn default_headers_mark_json_ajax_requests() {
        let pairs = RequestOptions::default().header_pairs();
        assert!(pairs.contains(&("Content-Type".to_string(), "application/json".to_string())));
        assert!(pairs.contains(&("X-Requested-With".to_string(), "XMLHttpRequest".to_string())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn caller_headers_replace_the_default_set() {
        let mut headers = std::collections::HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer token".to_string());
        let options = RequestOptions {
            headers: Some(headers),
            ..Default::default()
        };
        let pairs = options.header_pairs();
        assert_eq!(
            pairs,
            vec![("Authorization".to_string(), "Bearer token".to_string())]
        );
    }

    #[test]
    fn status_errors_name_the_code() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "request failed with HTTP status 404"
        );
        assert_eq!(
            FetchError::Status(503).to_string(),
            "request failed with HTTP status 503"
        );
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let options: RequestOptions = serde_json::from_str(r#"{"method":"DELETE"}"#).unwrap();
        assert_eq!(options.method(), "DELETE");
        assert!(options.headers.is_none());
        assert!(options.body.is_none());
    }
}

//! HTTP API Bindings
//!
//! Frontend bindings to the GoNews backend, organized by resource.

mod posts;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use posts::*;

/// Errors surfaced by backend calls
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never completed (network, CORS, no window)
    #[error("request failed: {0}")]
    Network(String),
    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Base URL prepended to every request path.
///
/// Set `GONEWS_API_BASE` at build time to point at another origin;
/// empty means same-origin.
pub fn api_base() -> &'static str {
    option_env!("GONEWS_API_BASE").unwrap_or("")
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Issue a request without a body and return the response if it was ok
async fn send(method: &str, url: &str) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

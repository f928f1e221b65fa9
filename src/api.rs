//! API Client
//!
//! Read-only bindings to the remote careers API over `window.fetch`.
//! No retries and no caching; callers decide what a failure means.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config;
use crate::error::ApiError;
use crate::models::{Career, CareersResponse, PageEnvelope};

/// GET `url` and resolve the body as a JSON value.
async fn get_json(url: &str) -> Result<JsValue, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Network(format!("HTTP {}", resp.status())));
    }

    let body = resp
        .json()
        .map_err(|_| ApiError::MalformedResponse("body is not JSON".to_string()))?;
    JsFuture::from(body)
        .await
        .map_err(|_| ApiError::MalformedResponse("body is not JSON".to_string()))
}

/// Fetch one page of the unfiltered careers listing.
pub async fn fetch_career_page(page: u32) -> Result<PageEnvelope, ApiError> {
    let url = format!(
        "{}{}?page={}",
        config::API_BASE_URL,
        config::CAREERS_ENDPOINT,
        page
    );
    let json = get_json(&url).await?;

    let parsed: CareersResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

    let mut envelope = parsed.rows;
    if let Some(total) = parsed.total_career {
        envelope.total = total;
    }
    Ok(envelope)
}

/// Fetch a single career by id. A body that does not carry the expected
/// fields is indistinguishable from "no such career" and reported as
/// [`ApiError::NotFound`].
pub async fn fetch_career_detail(id: u32) -> Result<Career, ApiError> {
    let url = format!(
        "{}{}?id={}",
        config::API_BASE_URL,
        config::CAREER_DETAILS_ENDPOINT,
        id
    );
    let json = get_json(&url).await?;
    serde_wasm_bindgen::from_value(json).map_err(|_| ApiError::NotFound)
}

/// Absolute URL for a career image, if the record carries one.
pub fn image_url(image: Option<&str>) -> Option<String> {
    image
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", config::IMAGE_BASE_URL, path))
}

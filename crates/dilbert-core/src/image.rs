//! Strip image download.

use crate::error::StripError;
use crate::http::{HttpClient, RequestOptions};
use std::time::Duration;

/// Redirect hops allowed on the asset host.
const MAX_IMAGE_REDIRECTS: u32 = 10;

/// Extension used when the content type is missing or unknown.
const DEFAULT_EXTENSION: &str = "bin";

/// Downloaded image bytes plus the type the server declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl StripImage {
    /// File extension for the declared content type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_deref() {
            Some("image/gif") => "gif",
            Some("image/png") => "png",
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/webp") => "webp",
            _ => DEFAULT_EXTENSION,
        }
    }
}

/// GETs the image at `url`. Unlike the page fetch, redirects are followed
/// since the asset host may hand off to a CDN.
pub fn fetch_image(
    client: &dyn HttpClient,
    url: &str,
    timeout: Option<Duration>,
) -> Result<StripImage, StripError> {
    let opts = RequestOptions::follow_redirects(MAX_IMAGE_REDIRECTS).with_timeout(timeout);

    tracing::info!(url, "fetching strip image");
    let res = client.get(url, &opts)?;
    if !res.is_success() {
        return Err(StripError::ImageNotFound { status: res.status });
    }
    if res.body.is_empty() {
        return Err(StripError::EmptyImage);
    }

    tracing::debug!(
        bytes = res.body.len(),
        content_type = res.content_type.as_deref().unwrap_or("-"),
        "strip image fetched"
    );
    Ok(StripImage {
        bytes: res.body,
        content_type: res.content_type,
    })
}

//! Strip page fetch.

use crate::date::StripDate;
use crate::error::StripError;
use crate::http::{HttpClient, RequestOptions};
use std::time::Duration;

/// Page URL for `date`: `<page_base>/strip/<date>`.
pub fn strip_page_url(page_base: &str, date: &StripDate) -> String {
    format!("{}/strip/{}", page_base.trim_end_matches('/'), date.as_str())
}

/// Fetches the strip page for `date` and returns its body.
///
/// Redirects are not followed: the site answers unknown dates with a
/// redirect to its homepage instead of a 404, so any non-2xx status
/// (3xx included) is [`StripError::PageNotFound`].
pub fn fetch_strip_page(
    client: &dyn HttpClient,
    page_base: &str,
    date: &StripDate,
    timeout: Option<Duration>,
) -> Result<Vec<u8>, StripError> {
    let url = strip_page_url(page_base, date);
    let opts = RequestOptions::no_redirects().with_timeout(timeout);

    tracing::info!(%url, "fetching strip page");
    let res = client.get(&url, &opts)?;
    if !res.is_success() {
        tracing::warn!(%url, status = res.status, "strip page not available");
        return Err(StripError::PageNotFound { status: res.status });
    }

    tracing::debug!(bytes = res.body.len(), "strip page fetched");
    tracing::trace!(page = %String::from_utf8_lossy(&res.body), "strip page body");
    Ok(res.body)
}

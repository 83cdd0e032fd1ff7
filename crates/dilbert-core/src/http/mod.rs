//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl) with one `Easy` handle per request. The
//! redirect policy travels with each request; there is no shared client
//! state to configure.

mod parse;

use crate::error::StripError;
use std::str;
use std::time::Duration;

/// Whether a request follows 3xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Return the first response as-is, 3xx included.
    DoNotFollow,
    /// Follow up to `max` redirects.
    Follow { max: u32 },
}

/// Per-request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    pub redirect: RedirectPolicy,
    /// Whole-request timeout. `None` keeps libcurl's defaults.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn no_redirects() -> Self {
        Self {
            redirect: RedirectPolicy::DoNotFollow,
            timeout: None,
        }
    }

    pub fn follow_redirects(max: u32) -> Self {
        Self {
            redirect: RedirectPolicy::Follow { max },
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
}

impl HttpResponse {
    /// 200..=299.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a single GET.
pub trait HttpClient {
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<HttpResponse, StripError>;
}

/// libcurl-backed client.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        Self
    }
}

impl HttpClient for CurlClient {
    /// Performs one GET and reads the whole body into memory. Transport
    /// failures come back as [`StripError::Transport`] untouched; status
    /// classification is left to the caller.
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<HttpResponse, StripError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        match opts.redirect {
            RedirectPolicy::DoNotFollow => easy.follow_location(false)?,
            RedirectPolicy::Follow { max } => {
                easy.follow_location(true)?;
                easy.max_redirections(max)?;
            }
        }
        if let Some(t) = opts.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        // Closes the handle and its connection before the body is handed on.
        drop(easy);

        tracing::debug!(url, status, bytes = body.len(), "GET complete");

        Ok(HttpResponse {
            status,
            body,
            content_type: parse::content_type(&headers),
        })
    }
}

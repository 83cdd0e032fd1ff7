//! Finds the strip image address in a fetched page.

use regex::bytes::Regex;

use crate::error::StripError;

/// Asset host the strip page points its `data-image` attribute at.
pub const DEFAULT_ASSET_BASE: &str = "http://assets.amuniversal.com";

/// Matches `data-image="<asset_base>/<token>"` with a lowercase
/// alphanumeric token.
#[derive(Debug, Clone)]
pub struct ImageLocator {
    asset_base: String,
    pattern: Regex,
}

impl ImageLocator {
    pub fn new(asset_base: &str) -> Self {
        let asset_base = asset_base.trim_end_matches('/').to_string();
        let pattern = format!(r#"data-image="{}/([a-z0-9]+)""#, regex::escape(&asset_base));
        Self {
            // The only variable part is escaped, so the pattern always compiles.
            pattern: Regex::new(&pattern).expect("image pattern"),
            asset_base,
        }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Image address from the first match in `page`. Later matches are
    /// never looked at.
    pub fn locate(&self, page: &[u8]) -> Result<String, StripError> {
        let caps = self
            .pattern
            .captures(page)
            .ok_or(StripError::ImagePathNotFound)?;
        // Group 1 is `[a-z0-9]+`, always ASCII.
        let token = String::from_utf8_lossy(&caps[1]);
        let addr = format!("{}/{}", self.asset_base, token);
        tracing::info!(image = %addr, "located strip image");
        Ok(addr)
    }
}

impl Default for ImageLocator {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

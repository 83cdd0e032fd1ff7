//! Page fetch → image location → image fetch → save.
//!
//! Stages run strictly in sequence and the first failure is returned
//! as-is. Nothing is retried.

use crate::config::DilbertConfig;
use crate::date::StripDate;
use crate::error::StripError;
use crate::http::HttpClient;
use crate::image;
use crate::locate::ImageLocator;
use crate::page;
use crate::storage::{self, SaveOutcome};
use std::path::Path;

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub image_url: String,
    pub save: SaveOutcome,
}

/// Fetches the page for `date` and returns the strip image address.
pub fn locate_strip(
    client: &dyn HttpClient,
    cfg: &DilbertConfig,
    date: &StripDate,
) -> Result<String, StripError> {
    let page = page::fetch_strip_page(client, &cfg.page_base, date, cfg.timeout())?;
    ImageLocator::new(&cfg.asset_base).locate(&page)
}

/// Downloads the strip for `date` into `output_dir`.
pub fn download_strip(
    client: &dyn HttpClient,
    cfg: &DilbertConfig,
    date: &StripDate,
    output_dir: &Path,
) -> Result<StripOutcome, StripError> {
    let image_url = locate_strip(client, cfg, date)?;
    let img = image::fetch_image(client, &image_url, cfg.timeout())?;
    let save = storage::save_strip(output_dir, date, &img, cfg.overwrite)?;
    Ok(StripOutcome { image_url, save })
}

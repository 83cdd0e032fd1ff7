//! CLI for the Dilbert strip downloader.

use anyhow::Result;
use clap::Parser;
use dilbert_core::checksum;
use dilbert_core::config;
use dilbert_core::http::CurlClient;
use dilbert_core::pipeline;
use dilbert_core::storage::SaveOutcome;
use dilbert_core::validate_date;
use std::ffi::OsString;

/// Program name placed in front of the positional values before validation.
const PROGRAM: &str = "dilbert";

/// Download the Dilbert strip for one date.
#[derive(Debug, Parser)]
#[command(name = "dilbert", version)]
#[command(about = "Download the Dilbert strip for a date (YYYY-MM-DD)", long_about = None)]
pub struct Cli {
    /// Strip date in YYYY-MM-DD format. Exactly one is required; the count
    /// is checked by the date validator so the error message stays the same
    /// whatever was passed. Values are not required to be UTF-8; invalid
    /// bytes end up as a malformed date.
    #[arg(value_name = "DATE", allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Program name followed by the positional values, lossily decoded.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(PROGRAM.to_string())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect()
    }

    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(&self) -> Result<()> {
        // Validate before touching config or the network.
        let date = validate_date(&self.argv())?;

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let output_dir = cfg.output_dir_or(&std::env::current_dir()?);

        let outcome = pipeline::download_strip(&CurlClient::new(), &cfg, &date, &output_dir)?;
        match outcome.save {
            SaveOutcome::Saved(path) => {
                let digest = checksum::strip_sha256(&path)?;
                tracing::info!(%date, image = %outcome.image_url, sha256 = %digest, "done");
                println!("{}  {}", digest, path.display());
            }
            SaveOutcome::Skipped(path) => {
                println!("already saved: {}", path.display());
            }
        }

        Ok(())
    }
}

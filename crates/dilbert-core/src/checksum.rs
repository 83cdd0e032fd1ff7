//! Digest of a saved strip. The CLI prints it next to the path so two
//! downloads of the same date can be compared with `sha256sum -c`.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// SHA-256 of the strip file at `path`, as lowercase hex.
pub fn strip_sha256(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open strip {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read strip {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

use std::path::Path;

use anyhow::Context;
use sha1::{Digest, Sha1};

use crate::base32::encode;

/// Length of every content name: a 20 byte SHA-1 digest is exactly 32 characters.
pub const CONTENT_NAME_LEN: usize = 32;

/// Name a blob by the base32 SHA-1 of its content.
pub fn content_name(bytes: &[u8]) -> String {
    let digest = Sha1::digest(bytes);
    encode(&digest)
}

pub async fn content_name_of_file<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    log::debug!("hashing {} bytes from {}", bytes.len(), path.display());
    Ok(content_name(&bytes))
}

/* src/cli/core/src/build/output.rs */

use std::path::Path;

use anyhow::{Context, Result};
use seam_metaroute::RouteKind;
use serde::Serialize;
use sha2::{Digest, Sha256};

pub(crate) const ROUTES_MANIFEST: &str = "routes.json";

/// One generated route, as recorded in `routes.json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RouteEntry {
  pub route: String,
  pub source: String,
  pub generated: String,
  pub kind: RouteKind,
  /// Absent for dynamic images: the user handler sets its own type.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content_type: Option<String>,
  pub hash: String,
  pub size: u64,
}

/// Route path to output filename: `/blog/icon.png` -> `blog-icon.png.js`,
/// `/sitemap/[__metadata_id__]` -> `sitemap-[__metadata_id__].js`
pub(super) fn route_to_filename(route: &str) -> String {
  let slug = route.trim_matches('/').replace('/', "-");
  format!("{slug}.js")
}

/// First 8 bytes of SHA-256, hex-encoded.
pub(super) fn content_hash(code: &str) -> String {
  let digest = Sha256::digest(code.as_bytes());
  hex::encode(&digest[..8])
}

pub(super) fn write_module(out_dir: &Path, file_name: &str, code: &str) -> Result<()> {
  let path = out_dir.join(file_name);
  std::fs::write(&path, code).with_context(|| format!("failed to write {}", path.display()))
}

pub(super) fn write_routes_manifest(out_dir: &Path, entries: &[RouteEntry]) -> Result<()> {
  let path = out_dir.join(ROUTES_MANIFEST);
  let mut json = serde_json::to_string_pretty(entries).context("failed to serialize routes")?;
  json.push('\n');
  std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
}

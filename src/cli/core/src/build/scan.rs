/* src/cli/core/src/build/scan.rs */

// App directory walk: collect files that follow a metadata naming convention.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seam_metaroute::{MetadataMatch, match_metadata_file};

const KNOWN_STEMS: &[&str] = &[
  "favicon",
  "icon",
  "apple-icon",
  "opengraph-image",
  "twitter-image",
  "robots",
  "sitemap",
  "manifest",
];

#[derive(Debug, Clone)]
pub(crate) struct FoundFile {
  pub path: PathBuf,
  /// URL directory of the route: `""` at the root, `/blog` below it.
  pub route_dir: String,
  pub found: MetadataMatch,
}

#[derive(Debug, Default)]
pub(crate) struct ScanResult {
  pub files: Vec<FoundFile>,
  /// (path, suggested stem) for names one or two edits away from a convention.
  pub near_misses: Vec<(PathBuf, &'static str)>,
}

/// Walk `app_dir` in sorted order. Private folders (`_name`), hidden folders,
/// and `node_modules` are skipped; route groups (`(name)`) add no URL segment.
pub(crate) fn scan_app_dir(app_dir: &Path) -> Result<ScanResult> {
  let mut result = ScanResult::default();
  walk(app_dir, "", &mut result)?;
  Ok(result)
}

fn walk(dir: &Path, route_dir: &str, result: &mut ScanResult) -> Result<()> {
  let mut entries: Vec<_> = std::fs::read_dir(dir)
    .with_context(|| format!("failed to read {}", dir.display()))?
    .collect::<std::io::Result<_>>()
    .with_context(|| format!("failed to list {}", dir.display()))?;
  entries.sort_by_key(std::fs::DirEntry::file_name);

  for entry in entries {
    let path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();
    let file_type =
      entry.file_type().with_context(|| format!("failed to stat {}", path.display()))?;

    if file_type.is_dir() {
      if name.starts_with('_') || name.starts_with('.') || name == "node_modules" {
        continue;
      }
      let child = if is_route_group(&name) { route_dir.to_string() } else { format!("{route_dir}/{name}") };
      walk(&path, &child, result)?;
    } else if let Some(found) = match_metadata_file(&name) {
      result.files.push(FoundFile { path, route_dir: route_dir.to_string(), found });
    } else if let Some(suggestion) = near_miss(&name) {
      result.near_misses.push((path, suggestion));
    }
  }
  Ok(())
}

fn is_route_group(name: &str) -> bool {
  name.len() > 2 && name.starts_with('(') && name.ends_with(')')
}

fn near_miss(file_name: &str) -> Option<&'static str> {
  let (stem, _) = file_name.split_once('.')?;
  did_you_mean(stem, KNOWN_STEMS)
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
  let n = b.chars().count();
  let mut prev: Vec<usize> = (0..=n).collect();
  let mut curr = vec![0; n + 1];
  for (i, ca) in a.chars().enumerate() {
    curr[0] = i + 1;
    for (j, cb) in b.chars().enumerate() {
      let cost = usize::from(ca != cb);
      curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
    }
    std::mem::swap(&mut prev, &mut curr);
  }
  prev[n]
}

pub(super) fn did_you_mean<'a>(name: &str, candidates: &[&'a str]) -> Option<&'a str> {
  candidates
    .iter()
    .map(|c| (*c, levenshtein(name, c)))
    .filter(|(_, d)| *d <= 2 && *d > 0)
    .min_by_key(|(_, d)| *d)
    .map(|(c, _)| c)
}

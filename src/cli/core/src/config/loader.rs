/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::SeamConfig;

/// Walk upward from `start` to find `seam.toml`, like Cargo.toml discovery
pub fn find_seam_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("seam.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("seam.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_seam_config(path: &Path) -> Result<SeamConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SeamConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.metadata.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Resolve the config for a command. An explicit path must load; otherwise
/// `seam.toml` is searched upward from `cwd` and defaults apply when absent.
/// Returns the directory paths in the config are relative to.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(PathBuf, SeamConfig)> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => match find_seam_config(cwd) {
      Ok(p) => p,
      Err(_) => return Ok((cwd.to_path_buf(), SeamConfig::default())),
    },
  };
  let config = load_seam_config(&path)?;
  let base_dir = path
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
  Ok((base_dir, config))
}

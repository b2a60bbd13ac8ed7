/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use seam_metaroute::options::{DEFAULT_RESOLVER_MODULE, DEFAULT_RESPONSE_MODULE};
use seam_metaroute::{BuildMode, GeneratorOptions};
use serde::Deserialize;

/// The parts of `seam.toml` this tool reads. Other sections are ignored so
/// the file can be shared with the rest of the seam toolchain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeamConfig {
  #[serde(default)]
  pub project: Option<ProjectConfig>,
  #[serde(default)]
  pub metadata: MetadataSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSection {
  pub mode: Option<BuildMode>,
  pub validate_ids: Option<bool>,
  #[serde(default = "default_app_dir")]
  pub app_dir: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_response_module")]
  pub response_module: String,
  #[serde(default = "default_resolver_module")]
  pub resolver_module: String,
}

impl Default for MetadataSection {
  fn default() -> Self {
    Self {
      mode: None,
      validate_ids: None,
      app_dir: default_app_dir(),
      out_dir: default_out_dir(),
      response_module: default_response_module(),
      resolver_module: default_resolver_module(),
    }
  }
}

fn default_app_dir() -> String {
  "app".to_string()
}

fn default_out_dir() -> String {
  ".seam/metadata".to_string()
}

fn default_response_module() -> String {
  DEFAULT_RESPONSE_MODULE.to_string()
}

fn default_resolver_module() -> String {
  DEFAULT_RESOLVER_MODULE.to_string()
}

impl MetadataSection {
  pub fn validate(&self) -> Result<()> {
    if self.app_dir.trim().is_empty() {
      bail!("metadata.app_dir must not be empty");
    }
    if self.out_dir.trim().is_empty() {
      bail!("metadata.out_dir must not be empty");
    }
    if self.response_module.trim().is_empty() {
      bail!("metadata.response_module must not be empty");
    }
    if self.resolver_module.trim().is_empty() {
      bail!("metadata.resolver_module must not be empty");
    }
    Ok(())
  }

  /// Mode precedence: CLI flag, then `[metadata].mode`, then `NODE_ENV`.
  pub fn resolve_mode(&self, cli: Option<BuildMode>, node_env: Option<&str>) -> BuildMode {
    cli.or(self.mode).unwrap_or_else(|| BuildMode::from_node_env(node_env))
  }

  pub fn generator_options(&self, mode: BuildMode) -> GeneratorOptions {
    let mut options = GeneratorOptions::new(mode);
    if let Some(validate) = self.validate_ids {
      options.validate_ids = validate;
    }
    options.response_module.clone_from(&self.response_module);
    options.resolver_module.clone_from(&self.resolver_module);
    options
  }
}

/* src/cli/codegen/src/options.rs */

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESPONSE_MODULE: &str = "next/server";
pub const DEFAULT_RESOLVER_MODULE: &str =
  "next/dist/build/webpack/loaders/metadata/resolve-route-data";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  pub fn is_production(self) -> bool {
    self == Self::Production
  }

  /// Interpret a `NODE_ENV` value; anything but `production` is development.
  pub fn from_node_env(value: Option<&str>) -> Self {
    match value {
      Some("production") => Self::Production,
      _ => Self::Development,
    }
  }
}

impl FromStr for BuildMode {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "development" | "dev" => Ok(Self::Development),
      "production" | "prod" => Ok(Self::Production),
      other => bail!("unknown build mode \"{other}\" (expected development or production)"),
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Development => f.write_str("development"),
      Self::Production => f.write_str("production"),
    }
  }
}

/// Whether the matched file is a literal asset or a module producing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
  Static,
  Dynamic,
}

/// Whether a dynamic route serves one instance or a generated family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
  Single,
  Multi,
}

/// Parse a host `'1'`/`'0'` flag.
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
  match value {
    "1" => Ok(true),
    "0" => Ok(false),
    other => bail!("{name} must be \"1\" or \"0\", got \"{other}\""),
  }
}

/// One generator invocation: the matched file plus its typed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
  pub file_path: PathBuf,
  pub source: RouteSource,
  pub cardinality: Cardinality,
}

impl RouteRequest {
  pub fn new(file_path: impl Into<PathBuf>, source: RouteSource, cardinality: Cardinality) -> Self {
    Self { file_path: file_path.into(), source, cardinality }
  }

  /// Build a request from the host's string flags, converting them once.
  pub fn from_flags(
    file_path: impl Into<PathBuf>,
    is_dynamic_route_extension: &str,
    is_dynamic_multi_route: &str,
  ) -> Result<Self> {
    let source = if parse_flag("isDynamicRouteExtension", is_dynamic_route_extension)? {
      RouteSource::Dynamic
    } else {
      RouteSource::Static
    };
    let cardinality = if parse_flag("isDynamicMultiRoute", is_dynamic_multi_route)? {
      Cardinality::Multi
    } else {
      Cardinality::Single
    };
    Ok(Self::new(file_path, source, cardinality))
  }

  pub fn is_multi(&self) -> bool {
    self.cardinality == Cardinality::Multi
  }
}

/// Settings shared by every invocation in one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
  pub mode: BuildMode,
  /// Emit request-time checks that generated items carry an `id`.
  pub validate_ids: bool,
  pub response_module: String,
  pub resolver_module: String,
}

impl GeneratorOptions {
  pub fn new(mode: BuildMode) -> Self {
    Self {
      mode,
      validate_ids: !mode.is_production(),
      response_module: DEFAULT_RESPONSE_MODULE.to_string(),
      resolver_module: DEFAULT_RESOLVER_MODULE.to_string(),
    }
  }
}

impl Default for GeneratorOptions {
  fn default() -> Self {
    Self::new(BuildMode::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_convert_once() {
    let req = RouteRequest::from_flags("/app/sitemap.ts", "1", "1").unwrap();
    assert_eq!(req.source, RouteSource::Dynamic);
    assert_eq!(req.cardinality, Cardinality::Multi);
    assert!(req.is_multi());

    let req = RouteRequest::from_flags("/app/icon.png", "0", "0").unwrap();
    assert_eq!(req.source, RouteSource::Static);
    assert_eq!(req.cardinality, Cardinality::Single);
  }

  #[test]
  fn invalid_flag_rejected() {
    let err = RouteRequest::from_flags("/app/icon.png", "true", "0").unwrap_err();
    assert!(err.to_string().contains("isDynamicRouteExtension"));
    let err = RouteRequest::from_flags("/app/icon.png", "0", "").unwrap_err();
    assert!(err.to_string().contains("isDynamicMultiRoute"));
  }

  #[test]
  fn validation_follows_mode() {
    assert!(GeneratorOptions::new(BuildMode::Development).validate_ids);
    assert!(!GeneratorOptions::new(BuildMode::Production).validate_ids);
  }

  #[test]
  fn mode_from_node_env() {
    assert_eq!(BuildMode::from_node_env(Some("production")), BuildMode::Production);
    assert_eq!(BuildMode::from_node_env(Some("test")), BuildMode::Development);
    assert_eq!(BuildMode::from_node_env(None), BuildMode::Development);
  }

  #[test]
  fn mode_parse_and_display() {
    assert_eq!("prod".parse::<BuildMode>().unwrap(), BuildMode::Production);
    assert_eq!("development".parse::<BuildMode>().unwrap(), BuildMode::Development);
    assert!("staging".parse::<BuildMode>().is_err());
    assert_eq!(BuildMode::Production.to_string(), "production");
  }
}

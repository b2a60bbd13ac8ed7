/* src/cli/codegen/src/cache.rs */

use crate::options::BuildMode;

/// `Cache-Control` directive attached to a generated route response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
  NoCache,
  Immutable,
  Revalidate,
}

impl CachePolicy {
  pub fn header_value(self) -> &'static str {
    match self {
      Self::NoCache => "no-cache, no-store",
      Self::Immutable => "public, immutable, no-transform, max-age=31536000",
      Self::Revalidate => "public, max-age=0, must-revalidate",
    }
  }

  /// Policy for a static asset. Favicons always revalidate since browsers
  /// cache them aggressively under a fixed URL.
  pub fn for_static_asset(name: &str, mode: BuildMode) -> Self {
    if name == "favicon" {
      Self::Revalidate
    } else if mode.is_production() {
      Self::Immutable
    } else {
      Self::NoCache
    }
  }
}

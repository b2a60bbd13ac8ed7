/* src/cli/codegen/src/kind.rs */

use serde::Serialize;

use crate::options::RouteSource;
use crate::route_file::RouteFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
  StaticAsset,
  DynamicText,
  DynamicImage,
  DynamicSitemap,
}

/// Pick the route kind from the derived stem and the source flag.
/// Any dynamic stem other than robots, manifest, or sitemap is an image.
pub fn classify(file: &RouteFile, source: RouteSource) -> RouteKind {
  match source {
    RouteSource::Static => RouteKind::StaticAsset,
    RouteSource::Dynamic => match file.name.as_str() {
      "robots" | "manifest" => RouteKind::DynamicText,
      "sitemap" => RouteKind::DynamicSitemap,
      _ => RouteKind::DynamicImage,
    },
  }
}

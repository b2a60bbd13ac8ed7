/* src/cli/codegen/src/route_file.rs */

use std::path::{Path, PathBuf};

/// Suffix marking a stem as a multi-instance route (`opengraph-image[].tsx`).
pub const MULTI_ROUTE_MARKER: &str = "[]";

/// A matched metadata file, split into its logical name and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFile {
  pub path: PathBuf,
  pub name: String,
  pub extension: Option<String>,
}

/// Split the base filename on `.`: the first segment is the stem, the second
/// the extension. Never fails; a name without a dot has no extension.
pub fn parse_route_file(path: &Path) -> RouteFile {
  let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
  let mut parts = file_name.split('.');
  let stem = parts.next().unwrap_or_default();
  let extension = parts.next().map(str::to_string);
  let name = stem.strip_suffix(MULTI_ROUTE_MARKER).unwrap_or(stem).to_string();
  RouteFile { path: path.to_path_buf(), name, extension }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_file() {
    let f = parse_route_file(Path::new("/app/favicon.ico"));
    assert_eq!(f.name, "favicon");
    assert_eq!(f.extension.as_deref(), Some("ico"));
  }

  #[test]
  fn multi_marker_stripped() {
    for (path, name, ext) in [
      ("/app/opengraph-image[].tsx", "opengraph-image", "tsx"),
      ("/app/sitemap[].ts", "sitemap", "ts"),
      ("icon[].png", "icon", "png"),
    ] {
      let f = parse_route_file(Path::new(path));
      assert_eq!(f.name, name, "failed for {path}");
      assert_eq!(f.extension.as_deref(), Some(ext), "failed for {path}");
    }
  }

  #[test]
  fn only_second_segment_is_extension() {
    let f = parse_route_file(Path::new("/app/icon.dark.png"));
    assert_eq!(f.name, "icon");
    assert_eq!(f.extension.as_deref(), Some("dark"));
  }

  #[test]
  fn no_extension() {
    let f = parse_route_file(Path::new("/app/robots"));
    assert_eq!(f.name, "robots");
    assert!(f.extension.is_none());
  }

  #[test]
  fn empty_path_degrades() {
    let f = parse_route_file(Path::new(""));
    assert_eq!(f.name, "");
    assert!(f.extension.is_none());
  }

  #[test]
  fn jpg_not_normalized_here() {
    let f = parse_route_file(Path::new("/app/icon.jpg"));
    assert_eq!(f.extension.as_deref(), Some("jpg"));
  }
}

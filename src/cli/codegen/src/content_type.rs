/* src/cli/codegen/src/content_type.rs */

use std::path::Path;

use crate::route_file::parse_route_file;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_XML: &str = "application/xml";
pub const MANIFEST_JSON: &str = "application/manifest+json";
pub const IMAGE_X_ICON: &str = "image/x-icon";

/// Image extensions served with their own MIME type.
const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
  ("png", "image/png"),
  ("jpeg", "image/jpeg"),
  ("ico", IMAGE_X_ICON),
  ("svg", "image/svg+xml"),
];

/// Resolve the response MIME type for a metadata file. First match wins;
/// unknown names and extensions fall back to `text/plain`.
pub fn content_type(path: &Path) -> &'static str {
  let file = parse_route_file(path);
  content_type_for(&file.name, file.extension.as_deref())
}

pub(crate) fn content_type_for(name: &str, ext: Option<&str>) -> &'static str {
  let ext = ext.map(|e| if e == "jpg" { "jpeg" } else { e });
  match (name, ext) {
    ("favicon", Some("ico")) => IMAGE_X_ICON,
    ("sitemap", _) => APPLICATION_XML,
    ("robots", _) => TEXT_PLAIN,
    ("manifest", _) => MANIFEST_JSON,
    (_, Some(ext)) => image_mime_type(ext).unwrap_or(TEXT_PLAIN),
    (_, None) => TEXT_PLAIN,
  }
}

fn image_mime_type(ext: &str) -> Option<&'static str> {
  IMAGE_MIME_TYPES.iter().find(|(e, _)| *e == ext).map(|(_, mime)| *mime)
}

/* src/cli/codegen/src/convention.rs */

// File naming conventions that turn a file in the app directory into a
// metadata route.

use crate::emit::METADATA_ID_PARAM;
use crate::options::{Cardinality, RouteSource};

/// Extensions of modules that produce metadata at request time.
pub const DYNAMIC_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
  Favicon,
  Icon,
  AppleIcon,
  OpenGraphImage,
  TwitterImage,
  Robots,
  Sitemap,
  Manifest,
}

struct Rule {
  convention: Convention,
  base: &'static str,
  /// Accepts numbered variants such as `icon1.png`.
  numbered: bool,
  static_exts: &'static [&'static str],
  dynamic: bool,
}

const RULES: &[Rule] = &[
  Rule { convention: Convention::Favicon, base: "favicon", numbered: false, static_exts: &["ico"], dynamic: false },
  Rule {
    convention: Convention::Icon,
    base: "icon",
    numbered: true,
    static_exts: &["ico", "jpg", "jpeg", "png", "svg"],
    dynamic: true,
  },
  Rule {
    convention: Convention::AppleIcon,
    base: "apple-icon",
    numbered: true,
    static_exts: &["jpg", "jpeg", "png"],
    dynamic: true,
  },
  Rule {
    convention: Convention::OpenGraphImage,
    base: "opengraph-image",
    numbered: true,
    static_exts: &["jpg", "jpeg", "png", "gif"],
    dynamic: true,
  },
  Rule {
    convention: Convention::TwitterImage,
    base: "twitter-image",
    numbered: true,
    static_exts: &["jpg", "jpeg", "png", "gif"],
    dynamic: true,
  },
  Rule { convention: Convention::Robots, base: "robots", numbered: false, static_exts: &["txt"], dynamic: true },
  Rule { convention: Convention::Sitemap, base: "sitemap", numbered: false, static_exts: &["xml"], dynamic: true },
  Rule {
    convention: Convention::Manifest,
    base: "manifest",
    numbered: false,
    static_exts: &["json", "webmanifest"],
    dynamic: true,
  },
];

impl Convention {
  pub fn is_image(self) -> bool {
    matches!(self, Self::Icon | Self::AppleIcon | Self::OpenGraphImage | Self::TwitterImage)
  }

  /// Export whose presence turns a dynamic route into a multi route.
  pub fn multi_generator(self) -> Option<&'static str> {
    match self {
      Self::Sitemap => Some("generateSitemaps"),
      c if c.is_image() => Some("generateImageMetadata"),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataMatch {
  pub convention: Convention,
  pub stem: String,
  pub extension: String,
  pub source: RouteSource,
}

/// Match a bare file name (`opengraph-image2.tsx`) against the conventions.
pub fn match_metadata_file(file_name: &str) -> Option<MetadataMatch> {
  let (stem, extension) = file_name.split_once('.')?;
  for rule in RULES {
    let Some(suffix) = stem.strip_prefix(rule.base) else {
      continue;
    };
    let numbered_ok = rule.numbered && suffix.chars().all(|c| c.is_ascii_digit());
    if !suffix.is_empty() && !numbered_ok {
      continue;
    }
    let source = if rule.static_exts.contains(&extension) {
      RouteSource::Static
    } else if rule.dynamic && DYNAMIC_EXTENSIONS.contains(&extension) {
      RouteSource::Dynamic
    } else {
      continue;
    };
    return Some(MetadataMatch {
      convention: rule.convention,
      stem: stem.to_string(),
      extension: extension.to_string(),
      source,
    });
  }
  None
}

/// Public URL path of a metadata route. `dir` is the route directory
/// relative to the app root, `""` for the root, `"/blog"` otherwise.
pub fn route_path(dir: &str, found: &MetadataMatch, cardinality: Cardinality) -> String {
  let dir = dir.trim_end_matches('/');
  if found.source == RouteSource::Static {
    return format!("{dir}/{}.{}", found.stem, found.extension);
  }
  let multi = cardinality == Cardinality::Multi;
  match found.convention {
    Convention::Robots => format!("{dir}/robots.txt"),
    Convention::Manifest => format!("{dir}/manifest.webmanifest"),
    Convention::Sitemap if multi => format!("{dir}/sitemap/[{METADATA_ID_PARAM}]"),
    Convention::Sitemap => format!("{dir}/sitemap.xml"),
    _ if multi => format!("{dir}/{}/[{METADATA_ID_PARAM}]", found.stem),
    _ => format!("{dir}/{}", found.stem),
  }
}

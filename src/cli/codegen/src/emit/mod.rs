/* src/cli/codegen/src/emit/mod.rs */

// One builder per route kind; each returns a `JsModule` for the renderer.

mod image;
mod sitemap;
mod static_asset;
mod text;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::js::{Import, Item, Stmt, js_string};
use crate::options::GeneratorOptions;

pub use image::dynamic_image_module;
pub use sitemap::{SITEMAP_ID_SUFFIX, dynamic_sitemap_module};
pub use static_asset::static_asset_module;
pub use text::dynamic_text_module;

/// Route param carrying the generated instance id of a multi route.
pub const METADATA_ID_PARAM: &str = "__metadata_id__";

/// Exports of the user module that must not be re-exported.
pub(crate) const RESERVED_EXPORTS: &[&str] = &["default", "generateSitemaps"];

fn display_path(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}

fn response_import(options: &GeneratorOptions) -> Import {
  Import::named(&["NextResponse"], &options.response_module)
}

fn resolver_import(options: &GeneratorOptions) -> Import {
  Import::named(&["resolveRouteData"], &options.resolver_module)
}

/// `contentType` and `cacheControl` constants read by `respond_with`.
fn header_consts(content_type: &str, cache_control: &str) -> [Item; 2] {
  [
    Item::constant("contentType", js_string(content_type)),
    Item::constant("cacheControl", js_string(cache_control)),
  ]
}

fn respond_with(body: &str) -> Stmt {
  Stmt::line(format!(
    "return new NextResponse({body}, {{ headers: {{ 'Content-Type': contentType, 'Cache-Control': cacheControl }} }})"
  ))
}

/// Request-time guard: the user module's default export must be callable.
fn handler_guard(path: &Path) -> Stmt {
  let message = format!("Default export is missing in \"{}\"", display_path(path));
  Stmt::block(
    "if (typeof handler !== 'function')",
    vec![Stmt::line(format!("throw new Error({})", js_string(&message)))],
  )
}

/// Guard that a generator item carries an `id`.
fn id_required(generator: &str) -> Stmt {
  let message = format!("id property is required for every item returned from {generator}");
  Stmt::block(
    "if (item?.id == null)",
    vec![Stmt::line(format!("throw new Error({})", js_string(&message)))],
  )
}

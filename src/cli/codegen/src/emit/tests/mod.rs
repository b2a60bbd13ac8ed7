/* src/cli/codegen/src/emit/tests/mod.rs */

use std::path::Path;

use super::sitemap::reexport_names;
use super::*;
use crate::js::render_module;
use crate::options::{BuildMode, Cardinality, RouteRequest, RouteSource};
use crate::route_file::parse_route_file;


fn dynamic(path: &str, cardinality: Cardinality) -> RouteRequest {
  RouteRequest::new(path, RouteSource::Dynamic, cardinality)
}

fn file(path: &str) -> crate::route_file::RouteFile {
  parse_route_file(Path::new(path))
}

// -- static asset --

#[test]
fn static_asset_embeds_base64() {
  let options = GeneratorOptions::new(BuildMode::Development);
  let code = render_module(&static_asset_module(&file("/app/icon.png"), b"hello", &options));
  assert!(code.contains("const buffer = Buffer.from(\"aGVsbG8=\", 'base64')"));
  assert!(code.contains("const contentType = \"image/png\""));
  assert!(code.contains("const cacheControl = \"no-cache, no-store\""));
  assert!(code.contains("export function GET() {"));
  assert!(code.contains("return new NextResponse(buffer, "));
  assert!(code.contains("export const dynamic = 'force-static'"));
  assert!(!code.contains("/app/icon.png"), "static asset must not reference the file at serve time");
}

#[test]
fn static_asset_production_is_immutable() {
  let options = GeneratorOptions::new(BuildMode::Production);
  let code = render_module(&static_asset_module(&file("/app/opengraph-image.jpg"), b"x", &options));
  assert!(code.contains("\"public, immutable, no-transform, max-age=31536000\""));
  assert!(code.contains("\"image/jpeg\""));
}

#[test]
fn static_favicon_revalidates() {
  for mode in [BuildMode::Development, BuildMode::Production] {
    let options = GeneratorOptions::new(mode);
    let code = render_module(&static_asset_module(&file("/app/favicon.ico"), b"x", &options));
    assert!(code.contains("\"public, max-age=0, must-revalidate\""), "failed for {mode}");
    assert!(code.contains("\"image/x-icon\""));
  }
}

#[test]
fn static_asset_idempotent() {
  let options = GeneratorOptions::new(BuildMode::Production);
  let f = file("/app/sitemap.xml");
  let a = render_module(&static_asset_module(&f, b"<urlset/>", &options));
  let b = render_module(&static_asset_module(&f, b"<urlset/>", &options));
  assert_eq!(a, b);
}

#[test]
fn response_module_configurable() {
  let mut options = GeneratorOptions::new(BuildMode::Development);
  options.response_module = "@canmi/seam-server".to_string();
  let code = render_module(&static_asset_module(&file("/app/robots.txt"), b"", &options));
  assert!(code.contains("import { NextResponse } from \"@canmi/seam-server\""));
}

// -- dynamic text --

#[test]
fn robots_module() {
  let options = GeneratorOptions::default();
  let code = render_module(&dynamic_text_module(&file("/app/robots.ts"), &options));
  assert!(code.contains("import handler from \"/app/robots.ts\""));
  assert!(code.contains("import { resolveRouteData } from \"next/dist/build/webpack/loaders/metadata/resolve-route-data\""));
  assert!(code.contains("const contentType = \"text/plain\""));
  assert!(code.contains("const fileType = \"robots\""));
  assert!(code.contains("const cacheControl = \"public, max-age=0, must-revalidate\""));
  assert!(code.contains("export async function GET() {"));
  assert!(code.contains("const data = await handler()"));
  assert!(code.contains("const content = resolveRouteData(data, fileType)"));
}

#[test]
fn manifest_module_content_type() {
  let code = render_module(&dynamic_text_module(&file("/app/manifest.ts"), &GeneratorOptions::default()));
  assert!(code.contains("const contentType = \"application/manifest+json\""));
  assert!(code.contains("const fileType = \"manifest\""));
}

#[test]
fn handler_guard_inside_request() {
  let code = render_module(&dynamic_text_module(&file("/app/robots.ts"), &GeneratorOptions::default()));
  let get = code.find("export async function GET").unwrap();
  let guard = code.find("if (typeof handler !== 'function')").unwrap();
  assert!(guard > get, "guard must run at request time");
  assert!(code.contains(r#"throw new Error("Default export is missing in \"/app/robots.ts\"")"#));
}

#[test]
fn path_escaped_in_imports() {
  let f = file("/srv/my \"site\"/app/robots.ts");
  let code = render_module(&dynamic_text_module(&f, &GeneratorOptions::default()));
  assert!(code.contains(r#"import handler from "/srv/my \"site\"/app/robots.ts""#));
}

// -- dynamic image --

#[test]
fn single_image_passes_params_through() {
  let req = dynamic("/app/opengraph-image.tsx", Cardinality::Single);
  let code =
    render_module(&dynamic_image_module(&file("/app/opengraph-image.tsx"), &req, &GeneratorOptions::default()));
  assert!(code.contains("import * as userland from \"/app/opengraph-image.tsx\""));
  assert!(code.contains("const params = ctx?.params"));
  assert!(code.contains("const id = undefined"));
  assert!(code.contains("return handler({ params, id })"));
  assert!(!code.contains("generateImageMetadata"));
  assert!(!code.contains("NextResponse"));
  assert!(!code.contains("status: 404"));
}

#[test]
fn multi_image_resolves_id_or_404() {
  let req = dynamic("/app/icon.tsx", Cardinality::Multi);
  let code = render_module(&dynamic_image_module(&file("/app/icon.tsx"), &req, &GeneratorOptions::default()));
  assert!(code.contains("const { __metadata_id__, ...params } = ctx?.params || {}"));
  assert!(code.contains("await generateImageMetadata({ params })"));
  assert!(code.contains("return item.id.toString() === targetId"));
  assert!(code.contains("})?.id"));
  assert!(code.contains(
    "    if (id == null) {\n      return new NextResponse('Not Found', { status: 404 })\n    }"
  ));
  let not_found = code.find("status: 404").unwrap();
  let call = code.find("return handler({ params, id })").unwrap();
  assert!(not_found < call, "404 must short-circuit before the handler runs");
}

#[test]
fn image_id_check_only_when_validating() {
  let req = dynamic("/app/icon.tsx", Cardinality::Multi);
  let dev = render_module(&dynamic_image_module(
    &file("/app/icon.tsx"),
    &req,
    &GeneratorOptions::new(BuildMode::Development),
  ));
  assert!(dev.contains("id property is required for every item returned from generateImageMetadata"));

  let prod = render_module(&dynamic_image_module(
    &file("/app/icon.tsx"),
    &req,
    &GeneratorOptions::new(BuildMode::Production),
  ));
  assert!(!prod.contains("id property is required"));
  assert!(prod.contains("status: 404"));
}

#[test]
fn image_has_handler_guard() {
  let req = dynamic("/app/twitter-image.tsx", Cardinality::Single);
  let code =
    render_module(&dynamic_image_module(&file("/app/twitter-image.tsx"), &req, &GeneratorOptions::default()));
  assert!(code.contains("Default export is missing in \\\"/app/twitter-image.tsx\\\""));
}

// -- dynamic sitemap --

fn names(list: &[&str]) -> Vec<String> {
  list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn sitemap_reexports_filtered() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Single);
  let exports = names(&["default", "revalidate", "generateSitemaps", "dynamic"]);
  let code = render_module(&dynamic_sitemap_module(
    &file("/app/sitemap.ts"),
    &exports,
    &req,
    &GeneratorOptions::default(),
  ));
  assert!(code.contains("export { revalidate, dynamic } from \"/app/sitemap.ts\""));
}

#[test]
fn reserved_names_never_reexported() {
  let exports = names(&["generateSitemaps", "default", "default", "alternates"]);
  assert_eq!(reexport_names(&exports, &[]), vec!["alternates"]);
  assert!(reexport_names(&names(&["default", "generateSitemaps"]), &[]).is_empty());
}

#[test]
fn generated_exports_not_duplicated() {
  let exports = names(&["GET", "revalidate"]);
  assert_eq!(reexport_names(&exports, &["GET"]), vec!["revalidate"]);
}

#[test]
fn sitemap_no_exports_no_reexport_line() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Single);
  let code = render_module(&dynamic_sitemap_module(
    &file("/app/sitemap.ts"),
    &names(&["default"]),
    &req,
    &GeneratorOptions::default(),
  ));
  assert!(!code.contains("export {"));
}

#[test]
fn sitemap_strips_explicit_suffix() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Single);
  let code =
    render_module(&dynamic_sitemap_module(&file("/app/sitemap.ts"), &[], &req, &GeneratorOptions::default()));
  assert!(code.contains("const idSuffix = \".xml\""));
  assert!(code.contains("id.endsWith(idSuffix) ? id.slice(0, -idSuffix.length) : id"));
  assert!(!code.contains("slice(0, -4)"));
  assert!(code.contains("const data = await handler({ id: targetId })"));
  assert!(code.contains("const contentType = \"application/xml\""));
  assert!(code.contains("const fileType = \"sitemap\""));
  assert!(!code.contains("generateStaticParams"));
}

#[test]
fn multi_sitemap_static_params() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Multi);
  let code = render_module(&dynamic_sitemap_module(
    &file("/app/sitemap.ts"),
    &names(&["default", "generateSitemaps"]),
    &req,
    &GeneratorOptions::new(BuildMode::Development),
  ));
  assert!(code.contains("export async function generateStaticParams() {"));
  assert!(code.contains("const sitemaps = await generateSitemaps()"));
  assert!(code.contains("params.push({ __metadata_id__: item.id.toString() + idSuffix })"));
  assert!(code.contains("id property is required for every item returned from generateSitemaps"));
}

#[test]
fn multi_sitemap_production_skips_id_check() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Multi);
  let code = render_module(&dynamic_sitemap_module(
    &file("/app/sitemap.ts"),
    &[],
    &req,
    &GeneratorOptions::new(BuildMode::Production),
  ));
  assert!(code.contains("generateStaticParams"));
  assert!(!code.contains("id property is required"));
}

#[test]
fn user_generate_static_params_not_reexported_for_multi() {
  let req = dynamic("/app/sitemap.ts", Cardinality::Multi);
  let module = dynamic_sitemap_module(
    &file("/app/sitemap.ts"),
    &names(&["generateStaticParams", "revalidate"]),
    &req,
    &GeneratorOptions::default(),
  );
  let exported = module.export_names();
  assert_eq!(exported.iter().filter(|n| **n == "generateStaticParams").count(), 1);
  assert!(exported.contains(&"revalidate"));
}

/* src/cli/codegen/src/emit/sitemap.rs */

use super::{
  METADATA_ID_PARAM, RESERVED_EXPORTS, display_path, handler_guard, header_consts, id_required,
  resolver_import, respond_with, response_import,
};
use crate::cache::CachePolicy;
use crate::content_type::APPLICATION_XML;
use crate::js::{Function, Import, Item, JsModule, Stmt, js_string};
use crate::options::{GeneratorOptions, RouteRequest};
use crate::route_file::RouteFile;

/// Extension appended to each generated sitemap id in its route param.
pub const SITEMAP_ID_SUFFIX: &str = ".xml";

/// Sitemap modules re-export the user's named exports (route segment
/// config such as `revalidate`) alongside the generated handler.
pub fn dynamic_sitemap_module(
  file: &RouteFile,
  user_exports: &[String],
  request: &RouteRequest,
  options: &GeneratorOptions,
) -> JsModule {
  let source = display_path(&file.path);
  let get_body = vec![
    handler_guard(&file.path),
    Stmt::line(format!("const {{ {METADATA_ID_PARAM}: id }} = ctx?.params || {{}}")),
    Stmt::line(
      "const targetId = typeof id === 'string' && id.endsWith(idSuffix) ? id.slice(0, -idSuffix.length) : id",
    ),
    Stmt::line("const data = await handler({ id: targetId })"),
    Stmt::line("const content = resolveRouteData(data, fileType)"),
    Stmt::Blank,
    respond_with("content"),
  ];

  let mut module = JsModule::new()
    .import(response_import(options))
    .import(Import::namespace("userland", &source))
    .import(resolver_import(options))
    .item(Item::constant("sitemapModule", "{ ...userland }"))
    .item(Item::constant("handler", "sitemapModule.default"))
    .item(Item::constant("generateSitemaps", "sitemapModule.generateSitemaps"))
    .items(header_consts(APPLICATION_XML, CachePolicy::Revalidate.header_value()))
    .item(Item::constant("fileType", js_string("sitemap")))
    .item(Item::constant("idSuffix", js_string(SITEMAP_ID_SUFFIX)))
    .item(Item::Function(Function::exported_async("GET", &["_", "ctx"], get_body)));

  if request.is_multi() {
    module = module.item(Item::Function(Function::exported_async(
      "generateStaticParams",
      &[],
      static_params_body(options.validate_ids),
    )));
  }

  let names = reexport_names(user_exports, &module.export_names());
  module.item(Item::ReExport { names, source })
}

/// User exports minus reserved names and anything the module already exports.
pub(crate) fn reexport_names(user_exports: &[String], generated: &[&str]) -> Vec<String> {
  let mut names: Vec<String> = Vec::new();
  for name in user_exports {
    let name = name.as_str();
    if RESERVED_EXPORTS.contains(&name) || generated.contains(&name) {
      continue;
    }
    if !names.iter().any(|n| n == name) {
      names.push(name.to_string());
    }
  }
  names
}

fn static_params_body(validate_ids: bool) -> Vec<Stmt> {
  let mut loop_body = Vec::new();
  if validate_ids {
    loop_body.push(id_required("generateSitemaps"));
  }
  loop_body.push(Stmt::line(format!(
    "params.push({{ {METADATA_ID_PARAM}: item.id.toString() + idSuffix }})"
  )));

  vec![
    Stmt::line("const sitemaps = await generateSitemaps()"),
    Stmt::line("const params = []"),
    Stmt::block("for (const item of sitemaps)", loop_body),
    Stmt::line("return params"),
  ]
}

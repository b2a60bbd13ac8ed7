/* src/cli/codegen/src/emit/text.rs */

use super::{display_path, handler_guard, header_consts, resolver_import, respond_with, response_import};
use crate::cache::CachePolicy;
use crate::content_type::content_type_for;
use crate::js::{Function, Import, Item, JsModule, Stmt, js_string};
use crate::options::GeneratorOptions;
use crate::route_file::RouteFile;

/// robots / manifest modules: call the user handler, serialize through the
/// route-data resolver under the file's own type name.
pub fn dynamic_text_module(file: &RouteFile, options: &GeneratorOptions) -> JsModule {
  let content_type = content_type_for(&file.name, file.extension.as_deref());
  let body = vec![
    handler_guard(&file.path),
    Stmt::line("const data = await handler()"),
    Stmt::line("const content = resolveRouteData(data, fileType)"),
    Stmt::Blank,
    respond_with("content"),
  ];

  JsModule::new()
    .import(response_import(options))
    .import(Import::default("handler", &display_path(&file.path)))
    .import(resolver_import(options))
    .items(header_consts(content_type, CachePolicy::Revalidate.header_value()))
    .item(Item::constant("fileType", js_string(&file.name)))
    .item(Item::Function(Function::exported_async("GET", &[], body)))
}

/* src/cli/codegen/src/emit/static_asset.rs */

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{header_consts, respond_with, response_import};
use crate::cache::CachePolicy;
use crate::content_type::content_type_for;
use crate::js::{Function, Item, JsModule, js_string};
use crate::options::GeneratorOptions;
use crate::route_file::RouteFile;

/// Embed the asset bytes in the module so serving needs no filesystem access.
pub fn static_asset_module(file: &RouteFile, bytes: &[u8], options: &GeneratorOptions) -> JsModule {
  let content_type = content_type_for(&file.name, file.extension.as_deref());
  let cache = CachePolicy::for_static_asset(&file.name, options.mode);
  let encoded = STANDARD.encode(bytes);

  JsModule::new()
    .import(response_import(options))
    .items(header_consts(content_type, cache.header_value()))
    .item(Item::constant("buffer", format!("Buffer.from({}, 'base64')", js_string(&encoded))))
    .item(Item::Function(Function::exported("GET", &[], vec![respond_with("buffer")])))
    .item(Item::exported_const("dynamic", "'force-static'"))
}

/* src/cli/codegen/src/emit/image.rs */

use super::{METADATA_ID_PARAM, display_path, handler_guard, id_required, response_import};
use crate::js::{Function, Import, Item, JsModule, Stmt};
use crate::options::{GeneratorOptions, RouteRequest};
use crate::route_file::RouteFile;

/// Image modules return the user handler's response as is. Multi routes
/// resolve the requested id against `generateImageMetadata` first.
pub fn dynamic_image_module(
  file: &RouteFile,
  request: &RouteRequest,
  options: &GeneratorOptions,
) -> JsModule {
  let mut module = JsModule::new();
  let mut body = vec![handler_guard(&file.path)];

  if request.is_multi() {
    module = module.import(response_import(options));
    body.extend(resolve_target_id(options.validate_ids));
  } else {
    body.push(Stmt::line("const params = ctx?.params"));
    body.push(Stmt::line("const id = undefined"));
  }
  body.push(Stmt::Blank);
  body.push(Stmt::line("return handler({ params, id })"));

  let mut items = vec![
    Item::constant("imageModule", "{ ...userland }"),
    Item::constant("handler", "imageModule.default"),
  ];
  if request.is_multi() {
    items.push(Item::constant("generateImageMetadata", "imageModule.generateImageMetadata"));
  }
  items.push(Item::Function(Function::exported_async("GET", &["_", "ctx"], body)));

  module.import(Import::namespace("userland", &display_path(&file.path))).items(items)
}

fn resolve_target_id(validate_ids: bool) -> Vec<Stmt> {
  let mut find_body = Vec::new();
  if validate_ids {
    find_body.push(id_required("generateImageMetadata"));
  }
  find_body.push(Stmt::line("return item.id.toString() === targetId"));

  vec![
    Stmt::line(format!("const {{ {METADATA_ID_PARAM}, ...params }} = ctx?.params || {{}}")),
    Stmt::line(format!(
      "const targetId = Array.isArray({METADATA_ID_PARAM}) ? {METADATA_ID_PARAM}[0] : {METADATA_ID_PARAM}"
    )),
    Stmt::line("let id = undefined"),
    Stmt::line(
      "const imageMetadata = generateImageMetadata ? await generateImageMetadata({ params }) : null",
    ),
    Stmt::block(
      "if (imageMetadata)",
      vec![
        Stmt::block_with_tail("id = imageMetadata.find((item) =>", find_body, ")?.id"),
        Stmt::block(
          "if (id == null)",
          vec![Stmt::line("return new NextResponse('Not Found', { status: 404 })")],
        ),
      ],
    ),
  ]
}

/* src/cli/codegen/src/dispatch.rs */

use anyhow::Result;

use crate::emit::{dynamic_image_module, dynamic_sitemap_module, dynamic_text_module, static_asset_module};
use crate::host::ModuleHost;
use crate::js::{JsModule, render_module};
use crate::kind::{RouteKind, classify};
use crate::options::{GeneratorOptions, RouteRequest};
use crate::route_file::parse_route_file;

/// Classify the request and build the module for exactly one route kind.
/// Awaits one host call at most: the asset read for static files, the
/// export lookup for sitemaps.
pub async fn build_route_module<H: ModuleHost>(
  host: &H,
  request: &RouteRequest,
  options: &GeneratorOptions,
) -> Result<(RouteKind, JsModule)> {
  let file = parse_route_file(&request.file_path);
  let kind = classify(&file, request.source);
  let module = match kind {
    RouteKind::StaticAsset => {
      let bytes = host.read_asset(&file.path).await?;
      static_asset_module(&file, &bytes, options)
    }
    RouteKind::DynamicText => dynamic_text_module(&file, options),
    RouteKind::DynamicImage => dynamic_image_module(&file, request, options),
    RouteKind::DynamicSitemap => {
      let exports = host.named_exports(&file.path).await?;
      dynamic_sitemap_module(&file, &exports, request, options)
    }
  };
  Ok((kind, module))
}

/// Generate the route module source for one matched metadata file.
pub async fn generate_route_module<H: ModuleHost>(
  host: &H,
  request: &RouteRequest,
  options: &GeneratorOptions,
) -> Result<String> {
  let (_, module) = build_route_module(host, request, options).await?;
  Ok(render_module(&module))
}

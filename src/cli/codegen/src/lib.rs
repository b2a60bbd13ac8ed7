/* src/cli/codegen/src/lib.rs */

mod dispatch;
mod emit;
mod exports;
mod host;

pub mod cache;
pub mod content_type;
pub mod convention;
pub mod js;
pub mod kind;
pub mod options;
pub mod route_file;

pub use cache::CachePolicy;
pub use content_type::content_type;
pub use convention::{Convention, MetadataMatch, match_metadata_file, route_path};
pub use dispatch::{build_route_module, generate_route_module};
pub use emit::{METADATA_ID_PARAM, SITEMAP_ID_SUFFIX};
pub use exports::scan_named_exports;
pub use host::{FsHost, ModuleHost};
pub use js::{JsModule, render_module};
pub use kind::{RouteKind, classify};
pub use options::{BuildMode, Cardinality, GeneratorOptions, RouteRequest, RouteSource, parse_flag};
pub use route_file::{RouteFile, parse_route_file};

/* src/cli/codegen/src/js/mod.rs */

mod ir;
mod render;


pub use ir::{Function, Import, Item, JsModule, Stmt};
pub use render::{HEADER, js_string, render_module};

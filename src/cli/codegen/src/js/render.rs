/* src/cli/codegen/src/js/render.rs */

use super::ir::{Function, Import, Item, JsModule, Stmt};

pub const HEADER: &str = "// Auto-generated by seam. Do not edit.";

const INDENT: &str = "  ";

/// Quote a string as a JavaScript literal. JSON string escaping is a
/// subset of valid JS string syntax, so paths with quotes, backslashes, or
/// control characters stay intact.
pub fn js_string(s: &str) -> String {
  serde_json::Value::String(s.to_string()).to_string()
}

/// Render a module: header, imports, then items separated by blank lines.
/// Consecutive non-exported constants are kept together as one group.
pub fn render_module(module: &JsModule) -> String {
  let mut out = String::new();
  out.push_str(HEADER);
  out.push('\n');

  if !module.imports.is_empty() {
    out.push('\n');
    for import in &module.imports {
      out.push_str(&render_import(import));
      out.push('\n');
    }
  }

  let mut prev_const = false;
  for item in &module.items {
    let is_const = matches!(item, Item::Const { exported: false, .. });
    if let Item::ReExport { names, .. } = item
      && names.is_empty()
    {
      continue;
    }
    if !(is_const && prev_const) {
      out.push('\n');
    }
    render_item(&mut out, item);
    prev_const = is_const;
  }

  out
}

fn render_import(import: &Import) -> String {
  match import {
    Import::Default { local, source } => format!("import {local} from {}", js_string(source)),
    Import::Named { names, source } => {
      format!("import {{ {} }} from {}", names.join(", "), js_string(source))
    }
    Import::Namespace { local, source } => {
      format!("import * as {local} from {}", js_string(source))
    }
  }
}

fn render_item(out: &mut String, item: &Item) {
  match item {
    Item::Const { name, value, exported } => {
      let export = if *exported { "export " } else { "" };
      out.push_str(&format!("{export}const {name} = {value}\n"));
    }
    Item::Function(f) => render_function(out, f),
    Item::ReExport { names, source } => {
      out.push_str(&format!("export {{ {} }} from {}\n", names.join(", "), js_string(source)));
    }
    Item::Stmt(stmt) => render_stmt(out, stmt, 0),
  }
}

fn render_function(out: &mut String, f: &Function) {
  let export = if f.exported { "export " } else { "" };
  let asyncness = if f.is_async { "async " } else { "" };
  out.push_str(&format!("{export}{asyncness}function {}({}) {{\n", f.name, f.params.join(", ")));
  for stmt in &f.body {
    render_stmt(out, stmt, 1);
  }
  out.push_str("}\n");
}

fn render_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
  let pad = INDENT.repeat(depth);
  match stmt {
    Stmt::Line(line) => {
      out.push_str(&pad);
      out.push_str(line);
      out.push('\n');
    }
    Stmt::Blank => out.push('\n'),
    Stmt::Block { head, body, tail } => {
      out.push_str(&format!("{pad}{head} {{\n"));
      for inner in body {
        render_stmt(out, inner, depth + 1);
      }
      out.push_str(&format!("{pad}}}{tail}\n"));
    }
  }
}

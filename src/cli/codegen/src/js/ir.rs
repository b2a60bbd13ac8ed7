/* src/cli/codegen/src/js/ir.rs */

// Structured description of an emitted JavaScript module.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
  /// `import local from "source"`
  Default { local: String, source: String },
  /// `import { a, b } from "source"`
  Named { names: Vec<String>, source: String },
  /// `import * as local from "source"`
  Namespace { local: String, source: String },
}

impl Import {
  pub fn default(local: &str, source: &str) -> Self {
    Self::Default { local: local.to_string(), source: source.to_string() }
  }

  pub fn named(names: &[&str], source: &str) -> Self {
    Self::Named {
      names: names.iter().map(|n| (*n).to_string()).collect(),
      source: source.to_string(),
    }
  }

  pub fn namespace(local: &str, source: &str) -> Self {
    Self::Namespace { local: local.to_string(), source: source.to_string() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
  Line(String),
  Blank,
  /// `head {` body `}tail`
  Block { head: String, body: Vec<Stmt>, tail: String },
}

impl Stmt {
  pub fn line(s: impl Into<String>) -> Self {
    Self::Line(s.into())
  }

  pub fn block(head: impl Into<String>, body: Vec<Stmt>) -> Self {
    Self::Block { head: head.into(), body, tail: String::new() }
  }

  pub fn block_with_tail(head: impl Into<String>, body: Vec<Stmt>, tail: impl Into<String>) -> Self {
    Self::Block { head: head.into(), body, tail: tail.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
  pub name: String,
  pub exported: bool,
  pub is_async: bool,
  pub params: Vec<String>,
  pub body: Vec<Stmt>,
}

impl Function {
  pub fn exported(name: &str, params: &[&str], body: Vec<Stmt>) -> Self {
    Self {
      name: name.to_string(),
      exported: true,
      is_async: false,
      params: params.iter().map(|p| (*p).to_string()).collect(),
      body,
    }
  }

  pub fn exported_async(name: &str, params: &[&str], body: Vec<Stmt>) -> Self {
    Self { is_async: true, ..Self::exported(name, params, body) }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
  /// `[export ]const name = value`; `value` is a JS expression.
  Const { name: String, value: String, exported: bool },
  Function(Function),
  /// `export { a, b } from "source"`
  ReExport { names: Vec<String>, source: String },
  Stmt(Stmt),
}

impl Item {
  pub fn constant(name: &str, value: impl Into<String>) -> Self {
    Self::Const { name: name.to_string(), value: value.into(), exported: false }
  }

  pub fn exported_const(name: &str, value: impl Into<String>) -> Self {
    Self::Const { name: name.to_string(), value: value.into(), exported: true }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsModule {
  pub imports: Vec<Import>,
  pub items: Vec<Item>,
}

impl JsModule {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn import(mut self, import: Import) -> Self {
    self.imports.push(import);
    self
  }

  pub fn item(mut self, item: Item) -> Self {
    self.items.push(item);
    self
  }

  pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
    self.items.extend(items);
    self
  }

  /// Names this module exports, in declaration order.
  pub fn export_names(&self) -> Vec<&str> {
    let mut names = Vec::new();
    for item in &self.items {
      match item {
        Item::Const { name, exported: true, .. } => names.push(name.as_str()),
        Item::Function(f) if f.exported => names.push(f.name.as_str()),
        Item::ReExport { names: re, .. } => names.extend(re.iter().map(String::as_str)),
        _ => {}
      }
    }
    names
  }
}

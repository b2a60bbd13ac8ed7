/* src/cli/codegen/src/exports.rs */

use std::sync::OnceLock;

use regex::Regex;

// export [async] function|class|enum NAME
fn decl_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(
      r"\bexport\s+(?:async\s+)?(?:function\s*\*?\s*|(?:abstract\s+)?class\s+|enum\s+)([A-Za-z_$][\w$]*)",
    )
    .unwrap()
  })
}

// export const|let|var, followed by the declarator list
fn binding_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\bexport\s+(?:const|let|var)\s+").unwrap())
}

fn default_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\bexport\s+default\b").unwrap())
}

fn list_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\bexport\s+(type\s+)?\{([^}]*)\}").unwrap())
}

fn star_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\bexport\s*\*\s*as\s+([A-Za-z_$][\w$]*)").unwrap())
}

fn ident_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][\w$]*$").unwrap())
}

fn ident_prefix_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][\w$]*").unwrap())
}

/// Collect the runtime export names of a JS/TS module, in source order.
///
/// Comments and the contents of string and template literals are blanked
/// before matching, so neither can hide or fake an export. Every declarator
/// of `export const a = 1, b = 2` is collected, including the bindings of
/// destructuring patterns. Type-only and `declare` exports are skipped.
/// Not followed: `export * from`. Regex literals are not recognised; a
/// quote inside one blanks the rest of its line.
pub fn scan_named_exports(source: &str) -> Vec<String> {
  let code = mask_source(source);
  let mut found: Vec<(usize, String)> = Vec::new();

  for caps in decl_re().captures_iter(&code) {
    if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
      found.push((whole.start(), name.as_str().to_string()));
    }
  }

  for m in binding_re().find_iter(&code) {
    for (offset, name) in declarator_names(&code[m.end()..]).into_iter().enumerate() {
      found.push((m.start() + offset, name));
    }
  }

  for m in default_re().find_iter(&code) {
    found.push((m.start(), "default".to_string()));
  }

  for caps in star_re().captures_iter(&code) {
    if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
      found.push((whole.start(), name.as_str().to_string()));
    }
  }

  for caps in list_re().captures_iter(&code) {
    if caps.get(1).is_some() {
      continue;
    }
    let (Some(whole), Some(list)) = (caps.get(0), caps.get(2)) else {
      continue;
    };
    for (offset, specifier) in list.as_str().split(',').enumerate() {
      if let Some(name) = exported_name(specifier) {
        found.push((whole.start() + offset, name));
      }
    }
  }

  found.sort_by_key(|(pos, _)| *pos);
  let mut names: Vec<String> = Vec::new();
  for (_, name) in found {
    if !names.contains(&name) {
      names.push(name);
    }
  }
  names
}

/// `a` -> `a`, `a as b` -> `b`, `type T` -> skipped.
fn exported_name(specifier: &str) -> Option<String> {
  let specifier = specifier.trim();
  if specifier.is_empty() || specifier.starts_with("type ") {
    return None;
  }
  let name = match specifier.split_once(" as ") {
    Some((_, alias)) => alias.trim(),
    None => specifier,
  };
  ident_re().is_match(name).then(|| name.to_string())
}

// -- lexing --

/// Replace comments with a space and the contents of string and template
/// literals with spaces. Quotes, `${`/`}` of substitutions and line breaks
/// are kept, so brackets stay balanced and line structure survives.
fn mask_source(source: &str) -> String {
  let chars: Vec<char> = source.chars().collect();
  let mut out = String::with_capacity(source.len());
  // brace depth at which each open `${` substitution closes
  let mut substitutions: Vec<usize> = Vec::new();
  let mut depth = 0usize;
  let mut i = 0;

  while i < chars.len() {
    let c = chars[i];
    let next = chars.get(i + 1).copied();
    match c {
      '/' if next == Some('/') => {
        while i < chars.len() && chars[i] != '\n' {
          i += 1;
        }
        out.push(' ');
        continue;
      }
      '/' if next == Some('*') => {
        i += 2;
        while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
          if chars[i] == '\n' {
            out.push('\n');
          }
          i += 1;
        }
        i += 2;
        out.push(' ');
        continue;
      }
      '\'' | '"' => {
        i = mask_quoted(&chars, i, &mut out);
        continue;
      }
      '`' => {
        out.push('`');
        i = mask_template(&chars, i + 1, &mut out, &mut substitutions, depth);
        continue;
      }
      '{' => depth += 1,
      '}' if substitutions.last() == Some(&depth) => {
        substitutions.pop();
        out.push('}');
        i = mask_template(&chars, i + 1, &mut out, &mut substitutions, depth);
        continue;
      }
      '}' => depth = depth.saturating_sub(1),
      _ => {}
    }
    out.push(c);
    i += 1;
  }
  out
}

/// Mask a `'...'` or `"..."` literal starting at `start`; an unterminated
/// literal ends at the line break.
fn mask_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
  let quote = chars[start];
  out.push(quote);
  let mut i = start + 1;
  while i < chars.len() {
    match chars[i] {
      '\\' => {
        out.push_str("  ");
        i += 2;
      }
      '\n' => {
        out.push('\n');
        return i + 1;
      }
      c if c == quote => {
        out.push(quote);
        return i + 1;
      }
      _ => {
        out.push(' ');
        i += 1;
      }
    }
  }
  i
}

/// Mask template text from `start` up to the closing backtick, or up to a
/// `${` whose closing brace is recorded at `depth`.
fn mask_template(
  chars: &[char],
  start: usize,
  out: &mut String,
  substitutions: &mut Vec<usize>,
  depth: usize,
) -> usize {
  let mut i = start;
  while i < chars.len() {
    match chars[i] {
      '\\' => {
        out.push_str("  ");
        i += 2;
      }
      '`' => {
        out.push('`');
        return i + 1;
      }
      '$' if chars.get(i + 1) == Some(&'{') => {
        out.push_str("${");
        substitutions.push(depth);
        return i + 2;
      }
      '\n' => {
        out.push('\n');
        i += 1;
      }
      _ => {
        out.push(' ');
        i += 1;
      }
    }
  }
  i
}

// -- declarator lists --

/// Binding names of a masked declarator list, starting right after
/// `const`/`let`/`var`: `a = 1, b = f(x, y)`, `{ a, b: c }`, `[d, ...e]`.
fn declarator_names(list: &str) -> Vec<String> {
  let mut names = Vec::new();
  let mut pos = 0;
  loop {
    pos += list[pos..].len() - list[pos..].trim_start().len();
    let rest = &list[pos..];
    if rest.starts_with('{') || rest.starts_with('[') {
      let Some(close) = closing_bracket(rest) else {
        break;
      };
      pattern_names(&rest[..=close], &mut names);
      pos += close + 1;
    } else {
      let Some(m) = ident_prefix_re().find(rest) else {
        break;
      };
      let after = pos + m.end();
      if !starts_declarator(&list[after..]) {
        break;
      }
      names.push(m.as_str().to_string());
      pos = after;
    }
    match next_declarator(list, pos) {
      Some(next) => pos = next,
      None => break,
    }
  }
  names
}

/// A binding name is followed by `=`, a type annotation, `!`, `,`, `;` or
/// the end of the line. Anything else (`enum E`, `number>`) is not one.
fn starts_declarator(after: &str) -> bool {
  let next = after.trim_start_matches([' ', '\t']).chars().next();
  matches!(next, None | Some('\n' | '\r' | '=' | ':' | '!' | ',' | ';'))
}

/// Index of the bracket closing the one `s` starts with.
fn closing_bracket(s: &str) -> Option<usize> {
  let mut depth = 0usize;
  for (i, b) in s.bytes().enumerate() {
    match b {
      b'(' | b'[' | b'{' => depth += 1,
      b')' | b']' | b'}' => {
        depth = depth.checked_sub(1)?;
        if depth == 0 {
          return Some(i);
        }
      }
      _ => {}
    }
  }
  None
}

/// Skip a type annotation and initializer; returns the position after the
/// `,` that starts the next declarator, or `None` at the end of the statement.
fn next_declarator(list: &str, start: usize) -> Option<usize> {
  let bytes = list.as_bytes();
  let mut depth = 0usize;
  for (i, &b) in bytes.iter().enumerate().skip(start) {
    match b {
      b'(' | b'[' | b'{' => depth += 1,
      b')' | b']' | b'}' => depth = depth.checked_sub(1)?,
      b',' if depth == 0 => return Some(i + 1),
      b';' if depth == 0 => return None,
      b'\n' if depth == 0 && !line_continues(&list[start..i], &list[i + 1..]) => return None,
      _ => {}
    }
  }
  None
}

/// Whether a line break inside an initializer continues the expression.
fn line_continues(before: &str, after: &str) -> bool {
  let trailing = before.trim_end().chars().last();
  let leading = after.trim_start().chars().next();
  matches!(
    trailing,
    Some('=' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '?' | ':' | ',' | '.' | '<' | '>')
  ) || matches!(leading, Some('.' | '?' | ':' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '=' | ','))
}

/// Collect the bound names of an object or array pattern, brackets included.
fn pattern_names(pattern: &str, names: &mut Vec<String>) {
  let object = pattern.starts_with('{');
  let Some(inner) = pattern.get(1..pattern.len().saturating_sub(1)) else {
    return;
  };
  for element in split_top_level(inner) {
    let element = element.trim();
    let element = element.strip_prefix("...").unwrap_or(element).trim_start();
    let target = if object {
      match (find_top_level(element, b':'), find_top_level(element, b'=')) {
        // shorthand with a default: `a = x ? y : z`
        (Some(colon), Some(eq)) if eq < colon => &element[..eq],
        (Some(colon), _) => &element[colon + 1..],
        _ => element,
      }
    } else {
      element
    };
    let target = match find_top_level(target, b'=') {
      Some(eq) => &target[..eq],
      None => target,
    }
    .trim();
    if target.starts_with('{') || target.starts_with('[') {
      pattern_names(target, names);
    } else if ident_re().is_match(target) {
      names.push(target.to_string());
    }
  }
}

fn split_top_level(s: &str) -> Vec<&str> {
  let mut parts = Vec::new();
  let mut depth = 0usize;
  let mut from = 0;
  for (i, b) in s.bytes().enumerate() {
    match b {
      b'(' | b'[' | b'{' => depth += 1,
      b')' | b']' | b'}' => depth = depth.saturating_sub(1),
      b',' if depth == 0 => {
        parts.push(&s[from..i]);
        from = i + 1;
      }
      _ => {}
    }
  }
  parts.push(&s[from..]);
  parts
}

fn find_top_level(s: &str, target: u8) -> Option<usize> {
  let mut depth = 0usize;
  for (i, b) in s.bytes().enumerate() {
    match b {
      b'(' | b'[' | b'{' => depth += 1,
      b')' | b']' | b'}' => depth = depth.saturating_sub(1),
      b if b == target && depth == 0 => return Some(i),
      _ => {}
    }
  }
  None
}

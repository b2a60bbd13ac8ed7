/* src/cli/core/src/build/mod.rs */

// `build`: generate every metadata route under the app directory.

mod output;
mod scan;


use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use seam_metaroute::{
  Cardinality, FsHost, GeneratorOptions, ModuleHost, RouteKind, RouteRequest, RouteSource,
  build_route_module, content_type, render_module, route_path,
};

pub(crate) use output::{ROUTES_MANIFEST, RouteEntry};

use crate::config::MetadataSection;
use crate::ui::{self, DIM, RESET};
use scan::{FoundFile, scan_app_dir};

pub(crate) struct BuildReport {
  pub entries: Vec<RouteEntry>,
  pub near_misses: Vec<(std::path::PathBuf, &'static str)>,
}

/// Dynamic routes become multi routes when the module exports the
/// convention's generator (`generateSitemaps`, `generateImageMetadata`).
async fn cardinality_of<H: ModuleHost>(host: &H, file: &FoundFile) -> Result<Cardinality> {
  if file.found.source == RouteSource::Static {
    return Ok(Cardinality::Single);
  }
  let Some(generator) = file.found.convention.multi_generator() else {
    return Ok(Cardinality::Single);
  };
  let exports = host.named_exports(&file.path).await?;
  if exports.iter().any(|e| e == generator) {
    Ok(Cardinality::Multi)
  } else {
    Ok(Cardinality::Single)
  }
}

pub(crate) async fn run_build(
  base_dir: &Path,
  section: &MetadataSection,
  options: &GeneratorOptions,
) -> Result<BuildReport> {
  let app_dir = base_dir.join(&section.app_dir);
  if !app_dir.is_dir() {
    bail!("app directory not found: {}", app_dir.display());
  }
  let out_dir = base_dir.join(&section.out_dir);
  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  let scanned = scan_app_dir(&app_dir)?;
  let host = FsHost;
  let mut routes: BTreeMap<String, RouteEntry> = BTreeMap::new();

  for file in &scanned.files {
    let cardinality = cardinality_of(&host, file).await?;
    let route = route_path(&file.route_dir, &file.found, cardinality);
    let source_rel = file.path.strip_prefix(base_dir).unwrap_or(&file.path).display().to_string();

    if let Some(existing) = routes.get(&route) {
      bail!(
        "conflicting metadata routes: {} and {} both resolve to {route}",
        existing.source,
        source_rel
      );
    }

    let request = RouteRequest::new(&file.path, file.found.source, cardinality);
    let (kind, module) = build_route_module(&host, &request, options).await?;
    let code = render_module(&module);
    let generated = output::route_to_filename(&route);
    output::write_module(&out_dir, &generated, &code)?;
    ui::detail(&format!("{route} {DIM}<- {source_rel}{RESET}"));

    let content_type = match kind {
      RouteKind::DynamicImage => None,
      _ => Some(content_type(&file.path).to_string()),
    };
    routes.insert(
      route.clone(),
      RouteEntry {
        route,
        source: source_rel,
        generated,
        kind,
        content_type,
        hash: output::content_hash(&code),
        size: code.len() as u64,
      },
    );
  }

  let entries: Vec<RouteEntry> = routes.into_values().collect();
  output::write_routes_manifest(&out_dir, &entries)?;
  Ok(BuildReport { entries, near_misses: scanned.near_misses })
}

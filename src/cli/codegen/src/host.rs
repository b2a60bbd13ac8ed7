/* src/cli/codegen/src/host.rs */

use std::future::Future;
use std::path::Path;

use anyhow::{Context, Result};

use crate::exports::scan_named_exports;

/// Build-host primitives the generator awaits: reading a matched asset and
/// listing a module's named exports.
pub trait ModuleHost {
  fn read_asset(&self, path: &Path) -> impl Future<Output = Result<Vec<u8>>> + Send;

  fn named_exports(&self, path: &Path) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Host backed by the local filesystem and the lexical export scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHost;

impl ModuleHost for FsHost {
  async fn read_asset(&self, path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.with_context(|| format!("failed to read {}", path.display()))
  }

  async fn named_exports(&self, path: &Path) -> Result<Vec<String>> {
    let source = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(scan_named_exports(&source))
  }
}

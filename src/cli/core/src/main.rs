/* src/cli/core/src/main.rs */

mod build;
mod config;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seam_metaroute::{BuildMode, FsHost, RouteRequest, content_type, generate_route_module};

use config::{SeamConfig, resolve_config};
use ui::{DIM, RESET};

#[derive(Parser)]
#[command(name = "seam-metaroute", about = "Generate SeamJS metadata route modules")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Generate the route module for one metadata file
  Generate {
    /// Path to the matched metadata file
    file: PathBuf,
    /// "1" if the file is a module producing content (js/ts), "0" for a literal asset
    #[arg(long, default_value = "0")]
    dynamic: String,
    /// "1" if the route serves a generated family of instances
    #[arg(long, default_value = "0")]
    multi: String,
    /// Build mode (overrides seam.toml and NODE_ENV)
    #[arg(long)]
    mode: Option<BuildMode>,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Path to seam.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the response content type of a metadata file
  ContentType {
    /// Path to the metadata file
    file: PathBuf,
  },
  /// Generate every metadata route found in the app directory
  Build {
    /// Path to seam.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Build mode (overrides seam.toml and NODE_ENV)
    #[arg(long)]
    mode: Option<BuildMode>,
  },
}

fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, SeamConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  resolve_config(explicit, &cwd)
}

fn node_env() -> Option<String> {
  std::env::var("NODE_ENV").ok()
}

async fn cmd_generate(
  file: PathBuf,
  dynamic: &str,
  multi: &str,
  mode: Option<BuildMode>,
  out: Option<PathBuf>,
  config: Option<&Path>,
) -> Result<()> {
  let (_, cfg) = load_config(config)?;
  let mode = cfg.metadata.resolve_mode(mode, node_env().as_deref());
  let options = cfg.metadata.generator_options(mode);
  let request = RouteRequest::from_flags(file, dynamic, multi)?;
  let code = generate_route_module(&FsHost, &request, &options).await?;

  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(&path, &code)
        .with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!(
        "{} {DIM}({}, {mode}){RESET}",
        path.display(),
        ui::format_size(code.len() as u64)
      ));
    }
    None => print!("{code}"),
  }
  Ok(())
}

async fn cmd_build(config: Option<&Path>, mode: Option<BuildMode>) -> Result<()> {
  ui::banner("build");
  let (base_dir, cfg) = load_config(config)?;
  let mode = cfg.metadata.resolve_mode(mode, node_env().as_deref());
  let options = cfg.metadata.generator_options(mode);
  if let Some(project) = &cfg.project {
    ui::arrow(&format!("project {}", project.name));
  }
  ui::arrow(&format!("scanning {} {DIM}({mode}){RESET}", base_dir.join(&cfg.metadata.app_dir).display()));

  let report = build::run_build(&base_dir, &cfg.metadata, &options).await?;

  for (path, suggestion) in &report.near_misses {
    ui::warn(&format!(
      "{} is not a metadata file -- did you mean \"{suggestion}\"?",
      path.display()
    ));
  }

  let total: u64 = report.entries.iter().map(|e| e.size).sum();
  ui::blank();
  ui::ok(&format!(
    "{} metadata routes {DIM}({}){RESET} -> {}",
    report.entries.len(),
    ui::format_size(total),
    base_dir.join(&cfg.metadata.out_dir).join(build::ROUTES_MANIFEST).display()
  ));
  Ok(())
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Command::Generate { file, dynamic, multi, mode, out, config } => {
      cmd_generate(file, &dynamic, &multi, mode, out, config.as_deref()).await
    }
    Command::ContentType { file } => {
      println!("{}", content_type(&file));
      Ok(())
    }
    Command::Build { config, mode } => cmd_build(config.as_deref(), mode).await,
  };

  if let Err(e) = result {
    ui::fail(&format!("{e:#}"));
    std::process::exit(1);
  }
}

//! shadow-om CLI - render and inspect shadow object models
//!
//! ## Example Usage
//!
//! ```bash
//! # Print the generated-file banner for every model
//! shadow-om render assets.json
//!
//! # List the registered asset kinds
//! shadow-om kinds
//!
//! # Check which candidate kinds each model matches
//! shadow-om inspect assets.json --kind Type1 --kind Type2
//! ```
//!
//! Model files are JSON arrays of tagged records:
//!
//! ```json
//! [{"kind": "Type1", "Name": "Type1"}, {"kind": "Type2", "Name": "Type2", "Suffix": "Ext"}]
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use shadow_om::asset::AssetKind;
use shadow_om::config::Config;
use shadow_om::registry;
use shadow_om::render::{InfoBanner, Template};
use shadow_om::shadow::{self, TaggedAsset};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// shadow-om: erase asset models behind one handle and recover them on demand
#[derive(Parser)]
#[command(name = "shadow-om")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render and inspect shadow object models", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated-file banner for every model
    Render {
        /// JSON model file (defaults to `models` from the config)
        #[arg(value_name = "MODELS")]
        models: Option<PathBuf>,
    },

    /// List registered asset kinds
    Kinds,

    /// Match every model against candidate kinds
    Inspect {
        /// JSON model file (defaults to `models` from the config)
        #[arg(value_name = "MODELS")]
        models: Option<PathBuf>,

        /// Candidate kind (repeatable)
        #[arg(short = 'k', long = "kind", value_name = "KIND")]
        kinds: Vec<AssetKind>,
    },
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".shadow-om").join("config.toml"))
        .filter(|path| path.exists())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(default_config_path);
    let config = Config::load_or_default(config_path.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "shadow-om".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        if let Some(path) = &config_path {
            println!("Config: {}", path.display().to_string().dimmed());
        }
    }

    let result = match cli.command {
        Commands::Render { models } => resolve_models(models, &config)
            .and_then(|path| render_models(&path, &config)),
        Commands::Kinds => {
            list_kinds();
            Ok(())
        }
        Commands::Inspect { models, kinds } => resolve_models(models, &config)
            .and_then(|path| inspect_models(&path, &kinds, cli.verbose)),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn resolve_models(arg: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match arg.or_else(|| config.models.clone()) {
        Some(path) => Ok(path),
        None => bail!("no model file given and none set in config"),
    }
}

fn load_models(path: &Path) -> Result<Vec<TaggedAsset>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read models from {}", path.display()))?;
    let models: Vec<TaggedAsset> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse models in {}", path.display()))?;
    log::info!("Loaded {} models from {}", models.len(), path.display());
    Ok(models)
}

fn render_models(path: &Path, config: &Config) -> Result<()> {
    let models = load_models(path)?;
    let banner = InfoBanner::new(config.banner.clone());

    println!("{} {}", "Kinds:".bold(), shadow::kind_names(&models));
    for model in &models {
        println!();
        print!("{}", banner.render(model)?);
    }
    Ok(())
}

fn list_kinds() {
    println!("{}", "Asset Kinds".cyan().bold());
    println!("{}", "===========".cyan());
    println!();
    for d in registry::descriptors() {
        println!(
            "  {:<16} {} {:<4} {} {}",
            d.name.green(),
            "prefix:".dimmed(),
            d.prefix,
            "fields:".dimmed(),
            d.fields.join(", ")
        );
    }
}

fn inspect_models(path: &Path, kinds: &[AssetKind], verbose: bool) -> Result<()> {
    let models = load_models(path)?;
    let candidates: Vec<AssetKind> = if kinds.is_empty() {
        AssetKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };

    for model in &models {
        match model.match_any(candidates.iter().copied()) {
            Some((kind, root)) => println!(
                "  {} {} {}",
                model.to_string().bold(),
                "->".dimmed(),
                format!("{} {:?}", kind, root.fields()).green()
            ),
            None => println!(
                "  {} {} {}",
                model.to_string().bold(),
                "->".dimmed(),
                "no matching candidate".yellow()
            ),
        }

        if verbose {
            let slots = model.select_into(&candidates);
            for (kind, slot) in candidates.iter().zip(slots) {
                let state = if slot.is_some() { "populated" } else { "empty" };
                println!("      {:<16} {}", kind.to_string(), state.dimmed());
            }
        }
    }
    Ok(())
}

//! SFM code generator
//!
//! Renders programs, graphs and wizard layouts stored as JSON into SFM
//! script, and manages the list of common values offered by the editors.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use sfm_config::{CommonValuesStore, ValueCategory};
use sfm_editor::{export_script, CodeBudget};
use sfm_graph::{compile_graph, GraphTrigger};
use sfm_program::{serialize, Program, Template};
use sfm_wizard::WizardLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Generate SFM script from structured programs, graphs and wizard layouts
#[derive(Parser, Debug)]
#[command(name = "sfm", author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a built-in template
    Template {
        /// simple_move, smelting, sorting or fluid
        name: Template,

        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a structured program stored as JSON
    Render {
        path: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile a JSON list of graph triggers
    Graph {
        path: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile a wizard layout stored as JSON
    Wizard {
        path: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage common labels and resource ids
    Values {
        /// Directory holding common_values.json
        #[arg(long, env = "SFM_CONFIG_DIR", default_value = ".")]
        config_dir: PathBuf,

        #[command(subcommand)]
        action: ValuesAction,
    },
}

#[derive(Subcommand, Debug)]
enum ValuesAction {
    /// Print every list
    List,

    /// Add a value to a list
    Add {
        category: ValueCategory,
        value: String,
    },

    /// Remove a value from a list
    Remove {
        category: ValueCategory,
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli.command)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Template { name, output } => {
            info!("Rendering template: {}", name);
            emit(&serialize(&name.build()), output.as_deref())
        }
        Command::Render { path, output } => {
            let program: Program = read_json(&path)?;
            emit(&serialize(&program), output.as_deref())
        }
        Command::Graph { path, output } => {
            let triggers: Vec<GraphTrigger> = read_json(&path)?;
            emit(&compile_graph(&triggers), output.as_deref())
        }
        Command::Wizard { path, output } => {
            let layout: WizardLayout = read_json(&path)?;
            emit(&layout.compile(), output.as_deref())
        }
        Command::Values { config_dir, action } => run_values(&config_dir, action),
    }
}

/// Edit the common-value lists.
///
/// Unlike the editors, an unreadable file is an error here: saving over it
/// would lose the user's lists.
fn run_values(config_dir: &Path, action: ValuesAction) -> Result<()> {
    let store = CommonValuesStore::new(config_dir);
    let mut values = store
        .try_load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    match action {
        ValuesAction::List => {
            for category in ValueCategory::ALL {
                println!("{}: {}", category, values.list(category).join(", "));
            }
            return Ok(());
        }
        ValuesAction::Add { category, value } => {
            if !values.add(category, &value) {
                info!("'{}' is blank or already in the {} list", value.trim(), category);
                return Ok(());
            }
        }
        ValuesAction::Remove { category, value } => {
            if !values.remove(category, &value) {
                info!("'{}' is not in the {} list", value.trim(), category);
                return Ok(());
            }
        }
    }

    store
        .try_save(&values)
        .with_context(|| format!("failed to save {}", store.path().display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {:?}", path);
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Print or export generated code, warning when it nears the size budget
fn emit(code: &str, output: Option<&Path>) -> Result<()> {
    let status = CodeBudget::default().measure(code);
    if status.warning {
        warn!("Generated code is close to the size budget ({})", status.text());
    }

    match output {
        Some(path) => export_script(path, code)
            .with_context(|| format!("failed to export to {}", path.display()))?,
        None if code.ends_with('\n') => print!("{code}"),
        None => println!("{code}"),
    }
    Ok(())
}

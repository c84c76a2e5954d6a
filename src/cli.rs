//! Command-line interface
//!
//! `gameshaper --idea "A 3D mech shooter" [--no-llm]`
//!
//! Generates a spec, builds the matching scaffold, saves it and prints a
//! summary. Spec generation never fails; configuration and persistence
//! errors are returned to `main`.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::config::AppConfig;
use crate::core::game_spec::{GameSpec, SpecGenerator, SpecSource};
use crate::core::output::{OutputStore, PersistError};
use crate::core::scaffold::{build_project, select_builder, ProjectScaffold};

/// GameShaper - turn a free-text game idea into a 2D/3D project scaffold
#[derive(Parser, Debug)]
#[command(name = "gameshaper")]
#[command(version)]
pub struct Cli {
    /// Text idea describing a game
    #[arg(short, long)]
    pub idea: String,

    /// Disable the LLM and use keyword heuristics
    #[arg(long = "no-llm")]
    pub no_llm: bool,

    /// Directory scaffolds are written to, relative to the working directory
    /// [default: outputs, or `output_dir` from the configuration]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file [default: gameshaper.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn use_llm(&self) -> bool {
        !self.no_llm
    }
}

/// Failures that end the process with a non-zero exit code.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] figment::Error),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("Failed to render summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Everything produced by a single run.
#[derive(Debug)]
pub struct RunOutcome {
    pub spec: GameSpec,
    pub source: SpecSource,
    pub project: ProjectScaffold,
}

/// Idea -> spec -> scaffold -> file.
pub async fn run(
    generator: &SpecGenerator,
    store: &OutputStore,
    idea: &str,
    use_llm: bool,
) -> Result<RunOutcome, PersistError> {
    let (spec, source) = generator.generate_with_source(idea, use_llm).await;

    let mapping = spec.to_mapping();
    let builder = select_builder(&mapping);
    log::info!("building {} scaffold", builder.project_type());

    let project = build_project(builder, &mapping, store).await?;

    Ok(RunOutcome {
        spec,
        source,
        project,
    })
}

/// Text printed to stdout after a successful run.
pub fn render_summary(project: &ProjectScaffold, output_dir: &Path) -> Result<String, serde_json::Error> {
    Ok(format!(
        "=== Generated Project Summary ===\n{}\nFiles saved to {} (check saved_to in output).",
        serde_json::to_string_pretty(project)?,
        output_dir.display()
    ))
}

/// Entry point used by the binary.
pub async fn execute(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    let generator = SpecGenerator::new(config.llm.clone());
    let store = OutputStore::new(config.output_dir.clone());

    let outcome = run(&generator, &store, &cli.idea, cli.use_llm()).await?;
    log::debug!("spec ({:?}): {:?}", outcome.source, outcome.spec);

    println!("{}", render_summary(&outcome.project, store.dir())?);
    Ok(())
}

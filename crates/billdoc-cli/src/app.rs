//! CLI Application logic
//!
//! Every command returns its output as a `String`; `run_cli` prints it.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use billdoc_ast::Bill;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::visitors::{BodyTextVisitor, OutlineVisitor, SponsorCollector};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG: &str = "billdoc.toml";

#[derive(Parser)]
#[command(name = "billdoc")]
#[command(author, version, about = "Inspect U.S. legislative bill XML", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./billdoc.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indented outline of structural captions
    Outline {
        /// Input bill XML file
        input: PathBuf,

        /// Deepest level to print (overrides the config file)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print the running text of the bill body
    Text {
        /// Input bill XML file
        input: PathBuf,

        /// Include the content of deleted phrases
        #[arg(long)]
        keep_deleted: bool,
    },

    /// List sponsors, cosponsors and nonsponsors
    Sponsors {
        /// Input bill XML file
        input: PathBuf,
    },

    /// Dump the decoded document tree as JSON
    Json {
        /// Input bill XML file
        input: PathBuf,

        /// Single-line output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Outline { input, max_depth } => {
            if max_depth.is_some() {
                settings.outline.max_depth = max_depth;
            }
            outline_command(&input, &settings)?
        }
        Commands::Text {
            input,
            keep_deleted,
        } => {
            if keep_deleted {
                settings.text.skip_deleted = false;
            }
            text_command(&input, &settings)?
        }
        Commands::Sponsors { input } => sponsors_command(&input)?,
        Commands::Json { input, compact } => json_command(&input, compact)?,
    };

    print!("{output}");
    Ok(())
}

/// Read and decode a bill file
pub fn load_bill(input: &Path) -> Result<Bill> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let file =
        File::open(input).with_context(|| format!("Failed to open: {}", input.display()))?;
    let bill = billdoc_xml::parse_bill(file)
        .with_context(|| format!("Failed to parse bill: {}", input.display()))?;
    debug!(
        input = %input.display(),
        structurals = bill.structurals().len(),
        "decoded bill"
    );
    Ok(bill)
}

fn lines_to_output(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Execute the outline command
pub fn outline_command(input: &Path, settings: &Settings) -> Result<String> {
    let bill = load_bill(input)?;
    let mut outline = OutlineVisitor::new(&settings.outline);
    if let Some(body) = &bill.body {
        body.walk(&mut outline);
    }
    Ok(lines_to_output(outline.into_lines()))
}

/// Execute the text command
pub fn text_command(input: &Path, settings: &Settings) -> Result<String> {
    let bill = load_bill(input)?;
    let mut text = BodyTextVisitor::new(settings.text.skip_deleted);
    if let Some(body) = &bill.body {
        body.walk(&mut text);
    }
    Ok(lines_to_output(text.into_lines()))
}

/// Execute the sponsors command
///
/// Looks in the action descriptions of the form first, then in the body.
pub fn sponsors_command(input: &Path) -> Result<String> {
    let bill = load_bill(input)?;
    let mut collector = SponsorCollector::default();
    if let Some(form) = &bill.form {
        for description in form.actions.iter().flat_map(|a| &a.descriptions) {
            description.walk(&mut collector);
        }
    }
    if let Some(body) = &bill.body {
        body.walk(&mut collector);
    }

    Ok(collector
        .into_members()
        .iter()
        .map(|member| format!("{member}\n"))
        .collect())
}

/// Execute the json command
pub fn json_command(input: &Path, compact: bool) -> Result<String> {
    let bill = load_bill(input)?;
    let mut json = if compact {
        serde_json::to_string(&bill)
    } else {
        serde_json::to_string_pretty(&bill)
    }
    .context("Failed to serialize bill")?;
    json.push('\n');
    Ok(json)
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => {
            let candidate = Path::new(DEFAULT_CONFIG);
            if !candidate.exists() {
                return Ok(Settings::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

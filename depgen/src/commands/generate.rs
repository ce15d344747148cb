use std::path::PathBuf;

use clap::Args;
use depgen_codegen::{OutputMode, Selection};
use depgen_core::{Combination, DEFAULT_CONFIG_FILE, OutputFormat};
use depgen_manifest::DependenciesYaml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the dependencies file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the generated files to stdout instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Only generate the file declared under this key
    #[arg(long)]
    pub file_key: Option<String>,

    /// Generate this format instead of the file's declared outputs
    #[arg(long)]
    pub output: Option<OutputFormat>,

    /// Generate a single combination, e.g. "cuda=11.8;arch=x86_64"
    #[arg(long, value_parser = parse_matrix, requires_all = ["file_key", "output"])]
    pub matrix: Option<Combination>,

    /// Report the files that would be written without writing them
    #[arg(long, conflicts_with = "stdout")]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = DependenciesYaml::open(&self.config).unwrap_or_exit();

        if self.stdout {
            let stdout = std::io::stdout();
            ops::generate_to_stream(&config, self.selection(), stdout.lock()).unwrap_or_exit();
            return Ok(());
        }

        let report = if self.dry_run {
            ops::preview(&config, self.selection(), OutputMode::Files)
        } else {
            ops::generate(&config, self.selection())
        }
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn selection(&self) -> Selection {
        Selection {
            file_key: self.file_key.clone(),
            output: self.output,
            matrix: self.matrix.clone(),
        }
    }
}

/// Parse `dim=value;dim=value` into a combination. An empty string is the
/// empty combination.
fn parse_matrix(s: &str) -> Result<Combination, String> {
    let mut combination = Combination::new();
    for pair in s.split(';').filter(|pair| !pair.is_empty()) {
        let (dim, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected 'dimension=value', got '{}'", pair))?;
        combination.insert(dim.to_string(), value.to_string());
    }
    Ok(combination)
}

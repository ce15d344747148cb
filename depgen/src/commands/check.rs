use std::path::PathBuf;

use clap::Args;
use depgen_core::DEFAULT_CONFIG_FILE;
use depgen_manifest::DependenciesYaml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the dependencies file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = DependenciesYaml::open(&self.config).unwrap_or_exit();
        let report = ops::check(&config);

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}

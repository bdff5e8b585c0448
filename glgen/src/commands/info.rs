use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to glgen.toml (defaults to ./glgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the XML registry (gl.xml)
    #[arg(short, long)]
    pub registry: Option<PathBuf>,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref())?;
        let registry = config.registry_path(self.registry.as_deref());

        let repository = ops::load_repository(&registry).unwrap_or_exit();
        let report = ops::info(&repository, &registry);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

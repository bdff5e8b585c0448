use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glgen_codegen::{DEFAULT_PREFIX, EmitContext, Language};

use super::{SelectionArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Target language: c or cpp (overrides glgen.toml)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output directory (defaults to ./generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the include directory and loader symbols
    #[arg(long)]
    pub prefix: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (config, target) = self.selection.load()?;

        let language = self
            .language
            .or(config.output.language)
            .unwrap_or_default();
        let output = self
            .output
            .clone()
            .or_else(|| config.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("generated"));
        let prefix = self
            .prefix
            .clone()
            .or_else(|| config.output.prefix.clone())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let repository = ops::load_repository(&target.registry).unwrap_or_exit();
        let selection = target.selection().unwrap_or_exit();
        let consolidated = selection.consolidate(&repository).unwrap_or_exit();
        let ctx = EmitContext::from_parts(&repository, selection, consolidated).with_prefix(prefix);

        let report = ops::generate(&ctx, language, &output, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

use clap::Args;
use eyre::Result;
use glgen_codegen::EmitContext;

use super::{SelectionArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (_, target) = self.selection.load()?;

        let repository = ops::load_repository(&target.registry).unwrap_or_exit();
        let selection = target.selection().unwrap_or_exit();
        let consolidated = selection.consolidate(&repository).unwrap_or_exit();
        let ctx = EmitContext::from_parts(&repository, selection, consolidated);

        let report = ops::check(&ctx)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

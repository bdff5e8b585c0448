mod args;
mod check;
mod completions;
mod generate;
mod info;

pub(crate) use args::SelectionArgs;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for glgen_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "glgen")]
#[command(version)]
#[command(about = "Generate OpenGL loaders from the Khronos XML registry")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bindings for the selected api and version
    Generate(GenerateCommand),

    /// Load the registry and consolidate the selection without writing files
    Check(CheckCommand),

    /// List the apis, versions and object classes in the registry
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "glgen", "-vv", "generate", "--api", "gles2", "--version", "3.0", "--language",
            "c++", "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.selection.api.as_deref(), Some("gles2"));
        assert_eq!(cmd.selection.target_version.as_deref(), Some("3.0"));
        assert_eq!(cmd.language, Some(glgen_codegen::Language::Cpp));
        assert!(cmd.dry_run);
    }
}

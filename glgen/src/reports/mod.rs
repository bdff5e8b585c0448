//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod info;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use info::{ApiInfo, ClassInfo, InfoReport};
pub use output::{Report, TerminalOutput};

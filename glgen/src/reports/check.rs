//! Check command report.

use super::output::{Output, Report};

/// Counts for a consolidated selection.
#[derive(Debug)]
pub struct CheckReport {
    /// Selection label, e.g. `gl 3.3 core`.
    pub label: String,
    pub commands: usize,
    pub enums: usize,
    pub types: usize,
    pub groups: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} consolidates cleanly", self.label));
        out.newline();
        out.key_value("  Commands", &self.commands.to_string());
        out.key_value("  Constants", &self.enums.to_string());
        out.key_value("  Types", &self.types.to_string());
        out.key_value("  Groups", &self.groups.to_string());
    }
}

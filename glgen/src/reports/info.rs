//! Info command report.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InfoReport {
    pub registry_path: PathBuf,
    pub types: usize,
    pub enums: usize,
    pub commands: usize,
    pub apis: Vec<ApiInfo>,
    pub classes: Vec<ClassInfo>,
}

/// An api and the versions its features declare.
#[derive(Debug)]
pub struct ApiInfo {
    pub name: String,
    pub versions: Vec<String>,
}

/// An object class and the commands whose first parameter is of it.
#[derive(Debug)]
pub struct ClassInfo {
    pub name: String,
    pub commands: Vec<String>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Registry", &self.registry_path.display().to_string());
        out.key_value("Types", &self.types.to_string());
        out.key_value("Constants", &self.enums.to_string());
        out.key_value("Commands", &self.commands.to_string());
        out.newline();

        out.section("Apis");
        for api in &self.apis {
            out.list_item(&format!("{} ({})", api.name, api.versions.join(", ")));
        }

        if !self.classes.is_empty() {
            out.newline();
            out.section("Classes");
            for class in &self.classes {
                let count = class.commands.len();
                out.list_item(&format!(
                    "{} ({} command{})",
                    class.name,
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }
    }
}

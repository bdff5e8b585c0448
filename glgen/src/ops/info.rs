//! Info operation - registry overview.

use std::path::Path;

use glgen_core::to_pascal_case;
use glgen_registry::Repository;

use crate::reports::{ApiInfo, ClassInfo, InfoReport};

/// Collect the apis with their feature versions and the object classes
/// commands operate on.
pub fn info(repository: &Repository, registry_path: &Path) -> InfoReport {
    let apis = repository
        .apis()
        .map(|api| ApiInfo {
            name: api.to_string(),
            versions: repository
                .features_for_api(api)
                .iter()
                .map(|f| f.number.to_string())
                .collect(),
        })
        .collect();

    let classes = repository
        .owning_classes()
        .map(|class| ClassInfo {
            name: to_pascal_case(class),
            commands: repository
                .commands_by_owning_class(class)
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        })
        .collect();

    InfoReport {
        registry_path: registry_path.to_path_buf(),
        types: repository.types().len(),
        enums: repository
            .enum_collections()
            .iter()
            .map(|c| c.enums.len())
            .sum(),
        commands: repository.commands().len(),
        apis,
        classes,
    }
}

#[cfg(test)]
mod tests {
    use glgen_core::ApiVersion;
    use glgen_registry::{Command, Feature, Parameter, Registry};

    use super::*;

    #[test]
    fn test_info_collects_apis_and_classes() {
        let repo = Repository::new(
            Registry::new()
                .with_command(
                    Command::new("glBindBuffer", "GL")
                        .param(Parameter::new("target", "GLenum"))
                        .param(Parameter::new("buffer", "GLuint").class("buffer")),
                )
                .with_command(
                    Command::new("glIsVertexArray", "GL")
                        .param(Parameter::new("array", "GLuint").class("vertex array")),
                )
                .with_feature(Feature::new("gl", "GL_VERSION_1_0", ApiVersion::new(1, 0)))
                .with_feature(Feature::new("gl", "GL_VERSION_1_1", ApiVersion::new(1, 1)))
                .with_feature(Feature::new("gles2", "GL_ES_VERSION_2_0", ApiVersion::new(2, 0))),
        );

        let report = info(&repo, Path::new("gl.xml"));
        assert_eq!(report.commands, 2);
        assert_eq!(report.apis.len(), 2);
        assert_eq!(report.apis[0].name, "gl");
        assert_eq!(report.apis[0].versions, ["1.0", "1.1"]);
        assert_eq!(report.apis[1].versions, ["2.0"]);

        // glBindBuffer's first parameter carries no class
        assert_eq!(report.classes.len(), 1);
        assert_eq!(report.classes[0].name, "VertexArray");
        assert_eq!(report.classes[0].commands, ["glIsVertexArray"]);
    }
}

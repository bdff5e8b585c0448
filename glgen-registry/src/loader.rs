//! Registry loading from XML files and strings.
//!
//! Each entity has its own builder method that either returns a fully typed
//! record or a [`Error::MalformedSpecification`] pointing at the element.

use std::{path::Path, str::FromStr};

use glgen_core::ApiVersion;
use roxmltree::{Document, Node};

use crate::{
    Error, Result,
    error::SourceContext,
    model::{Command, Enum, EnumCollection, Feature, Parameter, Registry, Remove, Require, Type},
};

impl FromStr for Registry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        load_registry(s, "gl.xml")
    }
}

impl Registry {
    /// Load a registry XML file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        load_registry(&content, &path.display().to_string())
    }

    /// Load a registry from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        load_registry(content, filename)
    }
}

/// Parse and load a registry document.
pub fn load_registry(content: &str, filename: &str) -> Result<Registry> {
    let ctx = SourceContext::new(content, filename);
    let doc = Document::parse(content).map_err(|e| ctx.xml_error(e))?;
    let registry = Loader { ctx: &ctx }.registry(doc.root_element())?;

    tracing::debug!(
        file = filename,
        types = registry.types.len(),
        enum_collections = registry.enum_collections.len(),
        commands = registry.commands.len(),
        features = registry.features.len(),
        "loaded registry"
    );
    Ok(registry)
}

struct Loader<'s> {
    ctx: &'s SourceContext,
}

impl Loader<'_> {
    fn registry(&self, root: Node) -> Result<Registry> {
        if !root.has_tag_name("registry") {
            return Err(self.malformed(
                root,
                format!("expected <registry> root, found <{}>", root.tag_name().name()),
            ));
        }

        let type_sections: Vec<Node> = elements(root, "types").collect();
        if type_sections.is_empty() {
            return Err(self.malformed(root, "registry has no <types> section"));
        }
        let command_sections: Vec<Node> = elements(root, "commands").collect();
        if command_sections.is_empty() {
            return Err(self.malformed(root, "registry has no <commands> section"));
        }

        let mut registry = Registry::new();

        for section in type_sections {
            for node in elements(section, "type") {
                registry.types.push(self.build_type(node)?);
            }
        }

        for node in elements(root, "enums") {
            registry.enum_collections.push(self.build_enum_collection(node)?);
        }

        for section in command_sections {
            let namespace = self.required_attr(section, "namespace")?;
            for node in elements(section, "command") {
                registry.commands.push(self.build_command(namespace, node)?);
            }
        }

        for node in elements(root, "feature") {
            registry.features.push(self.build_feature(node)?);
        }

        Ok(registry)
    }

    fn build_type(&self, node: Node) -> Result<Type> {
        let name = attr(node, "name")
            .or_else(|| child_text(node, "name"))
            .ok_or_else(|| self.malformed(node, "<type> has no name"))?;

        // `<apientry/>` marks the calling convention of callback typedefs
        let definition: String = node
            .descendants()
            .filter_map(|n| {
                if n.is_text() {
                    n.text()
                } else if n.has_tag_name("apientry") {
                    Some(CALLING_CONVENTION)
                } else {
                    None
                }
            })
            .collect();

        Ok(Type {
            name,
            definition: definition.trim().to_string(),
            requires: attr(node, "requires"),
            comment: attr(node, "comment"),
            api: attr(node, "api"),
        })
    }

    fn build_enum_collection(&self, node: Node) -> Result<EnumCollection> {
        let mut collection = EnumCollection {
            namespace: self.required_attr(node, "namespace")?.to_string(),
            group: attr(node, "group"),
            kind: attr(node, "type"),
            vendor: attr(node, "vendor"),
            enums: Vec::new(),
        };

        for entry in elements(node, "enum") {
            collection.enums.push(self.build_enum(entry)?);
        }
        Ok(collection)
    }

    fn build_enum(&self, node: Node) -> Result<Enum> {
        let mut entry = Enum::new(
            self.required_attr(node, "name")?,
            self.required_attr(node, "value")?,
        );
        if let Some(groups) = node.attribute("group") {
            entry = entry.groups(groups);
        }
        entry.api = attr(node, "api");
        entry.alias = attr(node, "alias");
        Ok(entry)
    }

    fn build_command(&self, namespace: &str, node: Node) -> Result<Command> {
        let proto = elements(node, "proto")
            .next()
            .ok_or_else(|| self.malformed(node, "<command> has no <proto>"))?;
        let decl = self.declaration(proto, "command")?;

        let return_type = decl.text();
        if return_type.is_empty() {
            return Err(self.malformed(
                proto,
                format!("command '{}' has no return type", decl.name),
            ));
        }

        let params = elements(node, "param")
            .map(|param| self.build_parameter(param))
            .collect::<Result<Vec<_>>>()?;

        Ok(Command {
            name: decl.name,
            return_type,
            return_base: decl.ptype,
            return_group: attr(proto, "group"),
            params,
            namespace: namespace.to_string(),
            alias: elements(node, "alias").next().and_then(|a| attr(a, "name")),
        })
    }

    fn build_parameter(&self, node: Node) -> Result<Parameter> {
        let decl = self.declaration(node, "parameter")?;
        let ty = decl.base_type().ok_or_else(|| {
            self.malformed(node, format!("parameter '{}' has no type", decl.name))
        })?;

        Ok(Parameter {
            name: decl.name,
            ty,
            is_const: decl.is_const,
            indirection: decl.indirection,
            owning_class: attr(node, "class"),
            group: attr(node, "group"),
            len: attr(node, "len"),
        })
    }

    /// Split a `<proto>` or `<param>` into its name, base type and qualifiers.
    ///
    /// `const <ptype>GLchar</ptype> *const*<name>string</name>` yields name
    /// `string`, type `GLchar`, const, two levels of indirection.
    fn declaration(&self, node: Node, what: &str) -> Result<Declaration> {
        let mut decl = Declaration::default();
        let mut name = None;

        for child in node.children() {
            if child.is_text() {
                if name.is_none() {
                    decl.scan(child.text().unwrap_or(""));
                }
            } else if child.has_tag_name("ptype") {
                let text = element_text(child);
                decl.pieces.push(text.clone());
                decl.ptype = Some(text);
            } else if child.has_tag_name("name") {
                name = Some(element_text(child));
            }
        }

        decl.name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| self.malformed(node, format!("{} has no <name>", what)))?;
        Ok(decl)
    }

    fn build_feature(&self, node: Node) -> Result<Feature> {
        let number_attr = self.required_attr(node, "number")?;
        let number: ApiVersion = number_attr.parse().map_err(|e: String| {
            self.malformed(node, format!("invalid feature number '{}': {}", number_attr, e))
        })?;

        let mut feature = Feature::new(
            self.required_attr(node, "api")?,
            self.required_attr(node, "name")?,
            number,
        );

        for block in elements(node, "require") {
            let mut require = Require::new();
            require.profile = attr(block, "profile");
            require.comment = attr(block, "comment");
            for entry in self.names(block, "enum")? {
                require.enums.insert(entry);
            }
            for entry in self.names(block, "command")? {
                require.commands.insert(entry);
            }
            for entry in self.names(block, "type")? {
                require.types.insert(entry);
            }
            feature.requires.push(require);
        }

        for block in elements(node, "remove") {
            let mut remove = Remove::new();
            remove.profile = attr(block, "profile");
            remove.comment = attr(block, "comment");
            for entry in self.names(block, "enum")? {
                remove.enums.insert(entry);
            }
            for entry in self.names(block, "command")? {
                remove.commands.insert(entry);
            }
            feature.removes.push(remove);
        }

        Ok(feature)
    }

    /// `name` attributes of every `<tag>` child of a require/remove block.
    fn names<'a>(&self, block: Node<'a, '_>, tag: &'static str) -> Result<Vec<&'a str>> {
        elements(block, tag)
            .map(|n| self.required_attr(n, "name"))
            .collect()
    }

    fn required_attr<'a>(&self, node: Node<'a, '_>, name: &str) -> Result<&'a str> {
        node.attribute(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                self.malformed(
                    node,
                    format!("<{}> is missing the '{}' attribute", node.tag_name().name(), name),
                )
            })
    }

    fn malformed(&self, node: Node, message: impl Into<String>) -> Box<Error> {
        self.ctx.malformed_at(message, node.range())
    }
}

/// Macro the C header defines for the platform calling convention.
const CALLING_CONVENTION: &str = "GLCALLCONV";

/// Qualifiers and names collected while walking a declaration.
#[derive(Debug, Default)]
struct Declaration {
    name: String,
    ptype: Option<String>,
    words: Vec<String>,
    pieces: Vec<String>,
    is_const: bool,
    indirection: u8,
}

impl Declaration {
    fn scan(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.pieces.push(text.to_string());

        for token in text.split_whitespace() {
            let stars = u8::try_from(token.matches('*').count()).unwrap_or(u8::MAX);
            self.indirection = self.indirection.saturating_add(stars);
            for word in token.split('*').filter(|w| !w.is_empty()) {
                if word == "const" {
                    self.is_const = true;
                } else {
                    self.words.push(word.to_string());
                }
            }
        }
    }

    /// The `<ptype>` name, or the bare words of an untagged type like `void`.
    fn base_type(&self) -> Option<String> {
        self.ptype.clone().or_else(|| {
            if self.words.is_empty() {
                None
            } else {
                Some(self.words.join(" "))
            }
        })
    }

    /// The full type text before the name, e.g. `const GLubyte *`.
    fn text(&self) -> String {
        self.pieces.join(" ")
    }
}

fn elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.has_tag_name(tag))
}

/// A non-empty, trimmed attribute value. Empty attributes count as absent.
fn attr(node: Node, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn child_text(node: Node, tag: &'static str) -> Option<String> {
    elements(node, tag)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

fn element_text(node: Node) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

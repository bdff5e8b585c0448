use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the registry text and its filename so loader errors can point at
/// the offending element.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an XML syntax error from a roxmltree error.
    pub fn xml_error(&self, source: roxmltree::Error) -> Box<Error> {
        let pos = source.pos();
        let span = byte_offset(&self.src, pos.row, pos.col).map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Xml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a malformed-specification error pointing at a byte range.
    pub fn malformed_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MalformedSpecification {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a malformed-specification error without a span.
    pub fn malformed(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::MalformedSpecification {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }
}

/// Convert a 1-based row/column into a byte offset.
fn byte_offset(src: &str, row: u32, col: u32) -> Option<usize> {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(row.saturating_sub(1) as usize)
        .map(str::len)
        .sum();
    let line = src.get(line_start..)?.lines().next().unwrap_or("");
    let col_offset: usize = line
        .chars()
        .take(col.saturating_sub(1) as usize)
        .map(char::len_utf8)
        .sum();
    Some((line_start + col_offset).min(src.len().saturating_sub(1)))
}

/// What kind of identifier a selection or consolidation failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Api,
    Version,
    RemovedCommand,
    RemovedEnum,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Api => "api",
            Self::Version => "version",
            Self::RemovedCommand => "removed command",
            Self::RemovedEnum => "removed enum",
        };
        f.write_str(s)
    }
}

/// Which index a by-name lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Command,
    Enum,
    Type,
    Group,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Command => "command",
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Group => "group",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(glgen::io),
        help("pass the path to the registry XML, e.g. 'OpenGL-Registry/xml/gl.xml'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry XML")]
    #[diagnostic(code(glgen::xml))]
    Xml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: roxmltree::Error,
    },

    #[error("malformed specification: {message}")]
    #[diagnostic(code(glgen::malformed_specification))]
    MalformedSpecification {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown {kind} '{name}'")]
    #[diagnostic(code(glgen::unknown_identifier), help("{help}"))]
    UnknownIdentifier {
        kind: IdentifierKind,
        name: String,
        help: String,
    },

    #[error("{kind} '{name}' not found")]
    #[diagnostic(code(glgen::not_found))]
    NotFound { kind: LookupKind, name: String },
}

impl Error {
    /// Create an unknown-identifier error
    pub fn unknown(kind: IdentifierKind, name: impl Into<String>, help: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownIdentifier {
            kind,
            name: name.into(),
            help: help.into(),
        })
    }

    /// Create a lookup-miss error
    pub fn not_found(kind: LookupKind, name: impl Into<String>) -> Box<Self> {
        Box::new(Error::NotFound {
            kind,
            name: name.into(),
        })
    }
}

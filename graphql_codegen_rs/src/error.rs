use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for schema parsing and code generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The configured schema path does not exist.
    #[error("schema file not found: {}", path.display())]
    SchemaNotFound { path: PathBuf },

    /// The configured schema path exists but is not a regular file.
    #[error("schema path is not a regular file: {}", path.display())]
    SchemaNotAFile { path: PathBuf },

    /// The schema file exists but could not be read.
    #[error("failed to read schema file {}: {source}", path.display())]
    SchemaUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is malformed or structurally invalid.
    #[error(transparent)]
    SchemaParse(#[from] SchemaParseError),

    /// A scalar has neither a caller override nor a built-in mapping.
    #[error("no target type mapping for scalar `{name}`")]
    UnknownScalar { name: String },

    /// Two schema definitions produce the same artifact in one namespace.
    #[error("`{first}` and `{second}` both generate `{namespace}::{name}`")]
    NameCollision {
        namespace: String,
        name: String,
        first: String,
        second: String,
    },

    /// The configuration is incomplete or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An argument handed to a pure helper was absent or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generation failed for a reason other than the ones above.
    #[error("code generation failed: {message}")]
    Generation { message: String },

    /// A file the run would replace was not written by the generator.
    #[error("refusing to overwrite {}: it has no generated header", path.display())]
    UnownedFile { path: PathBuf },

    /// Writing generated output failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Every structural problem found in one schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaParseError {
    /// Where the document came from (a file path or `<inline>`).
    pub location: String,
    pub issues: Vec<SchemaIssue>,
}

impl SchemaParseError {
    pub(crate) fn single(location: &str, path: &str, kind: SchemaIssueKind) -> Self {
        Self {
            location: location.to_string(),
            issues: vec![SchemaIssue {
                path: path.to_string(),
                kind,
            }],
        }
    }
}

impl std::error::Error for SchemaParseError {}

impl fmt::Display for SchemaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid schema {} ({} issue{})",
            self.location,
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" }
        )?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

/// One problem at a schema coordinate such as `Query.user(id:)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: String,
    pub kind: SchemaIssueKind,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssueKind {
    /// The document has no content.
    Empty,
    /// The document is not valid JSON or does not match the introspection shape.
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    /// Neither `__schema` nor `data.__schema` is present.
    MissingSchemaRoot,
    /// `queryType` is absent or null.
    MissingQueryType,
    /// A root operation type is not an object type.
    RootTypeNotObject { name: String },
    DuplicateType { name: String },
    MissingTypeName,
    /// A named reference that does not resolve to any declared type.
    DanglingReference { name: String },
    /// A reference resolves, but to a type of the wrong kind.
    WrongKind { name: String, expected: &'static str },
    NestedNonNull,
    /// A `LIST`/`NON_NULL` wrapper without `ofType`, or a named kind without a name.
    MissingOfType,
    UnionMemberNotObject { name: String },
    ImplementerNotObject { name: String },
    /// An interface lists an implementer that does not declare the interface.
    ImplementerMissingInterface { implementer: String },
    /// An object declares an interface that does not list it as an implementer.
    UndeclaredImplementer { interface: String },
    InputInOutputPosition { name: String },
    OutputInInputPosition { name: String },
}

impl fmt::Display for SchemaIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "schema document is empty"),
            Self::Syntax { message, .. } => write!(f, "{message}"),
            Self::MissingSchemaRoot => {
                write!(f, "document has neither `__schema` nor `data.__schema`")
            }
            Self::MissingQueryType => write!(f, "query root type is not declared"),
            Self::RootTypeNotObject { name } => {
                write!(f, "root operation type `{name}` is not an object type")
            }
            Self::DuplicateType { name } => write!(f, "type `{name}` is declared more than once"),
            Self::MissingTypeName => write!(f, "type entry has no name"),
            Self::DanglingReference { name } => {
                write!(f, "reference to undeclared type `{name}`")
            }
            Self::WrongKind { name, expected } => {
                write!(f, "`{name}` must be {expected}")
            }
            Self::NestedNonNull => write!(f, "NON_NULL wraps another NON_NULL"),
            Self::MissingOfType => write!(f, "incomplete type reference"),
            Self::UnionMemberNotObject { name } => {
                write!(f, "union member `{name}` is not an object type")
            }
            Self::ImplementerNotObject { name } => {
                write!(f, "implementer `{name}` is not an object type")
            }
            Self::ImplementerMissingInterface { implementer } => write!(
                f,
                "`{implementer}` is listed as an implementer but does not declare the interface"
            ),
            Self::UndeclaredImplementer { interface } => write!(
                f,
                "declares `{interface}` but is not among its possible types"
            ),
            Self::InputInOutputPosition { name } => {
                write!(f, "input object `{name}` used as an output type")
            }
            Self::OutputInInputPosition { name } => {
                write!(f, "output type `{name}` used as an input type")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_lists_every_issue() {
        let error = SchemaParseError {
            location: "schema.json".to_string(),
            issues: vec![
                SchemaIssue {
                    path: "Query.user".to_string(),
                    kind: SchemaIssueKind::DanglingReference {
                        name: "User".to_string(),
                    },
                },
                SchemaIssue {
                    path: String::new(),
                    kind: SchemaIssueKind::MissingQueryType,
                },
            ],
        };
        let expected: &str = "invalid schema schema.json (2 issues)
  Query.user: reference to undeclared type `User`
  query root type is not declared";
        assert_eq!(expected, error.to_string());
    }

    #[test]
    fn codegen_error_wraps_parse_error_transparently() {
        let error: CodegenError =
            SchemaParseError::single("<inline>", "", SchemaIssueKind::Empty).into();
        assert_eq!(
            "invalid schema <inline> (1 issue)\n  schema document is empty",
            error.to_string()
        );
    }
}

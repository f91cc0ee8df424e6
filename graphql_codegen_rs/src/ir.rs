//! Artifact intermediate representation.
//!
//! Generators decide *what* to emit and describe it here; an
//! [`crate::emit::Emitter`] decides how it looks as source text.

use std::fmt;
use std::path::PathBuf;

use crate::model::Deprecation;
use crate::naming::file_stem;
use crate::type_mapper::TargetType;

/// Fixed sub-namespace per artifact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Partition {
    Types,
    Inputs,
    Interfaces,
    Unions,
    Enums,
    Queries,
    Mutations,
}

impl Partition {
    /// Declaration order in the generated root module.
    pub const ALL: [Self; 7] = [
        Self::Types,
        Self::Inputs,
        Self::Interfaces,
        Self::Unions,
        Self::Enums,
        Self::Queries,
        Self::Mutations,
    ];

    #[must_use]
    pub const fn module_name(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Inputs => "inputs",
            Self::Interfaces => "interfaces",
            Self::Unions => "unions",
            Self::Enums => "enums",
            Self::Queries => "queries",
            Self::Mutations => "mutations",
        }
    }
}

/// Fully qualified artifact path, e.g. `crate::api::types::UserDTO`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    pub package: String,
    pub partition: Partition,
    pub name: String,
}

impl QualifiedName {
    #[must_use]
    pub fn new(package: &str, partition: Partition, name: impl Into<String>) -> Self {
        Self {
            package: package.to_string(),
            partition,
            name: name.into(),
        }
    }

    /// Module path without the artifact name.
    #[must_use]
    pub fn namespace(&self) -> String {
        format!("{}::{}", self.package, self.partition.module_name())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.package,
            self.partition.module_name(),
            self.name
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    DataHolder,
    InputBuilder,
    Interface,
    Union,
    Enumeration,
    Operation(OperationKind),
}

/// A field, input field, accessor or operation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactField {
    /// Rust identifier, possibly `r#`-escaped.
    pub ident: String,
    /// Name on the wire.
    pub wire_name: String,
    pub ty: TargetType,
    pub docs: Option<String>,
    /// Input fields only: must be set before `build()`.
    pub required: bool,
    pub deprecation: Option<Deprecation>,
    /// GraphQL literal of the schema default, surfaced as documentation.
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub ident: String,
    pub wire_name: String,
    pub docs: Option<String>,
    pub deprecation: Option<Deprecation>,
}

/// One permitted member of a closed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permit {
    pub variant: String,
    /// Schema name of the member, matched against `__typename`.
    pub type_name: String,
    pub target: QualifiedName,
    /// Accessors this member declares non-null where the interface
    /// declares them nullable.
    pub narrowed: Vec<String>,
}

/// A closed hierarchy a data holder belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    pub hierarchy: QualifiedName,
    /// The variant of `hierarchy` that wraps this artifact.
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub kind: OperationKind,
    pub field_name: String,
    pub result: TargetType,
}

/// One generated source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub name: QualifiedName,
    /// Name of the schema definition (or root field) this came from.
    pub schema_name: String,
    pub docs: Option<String>,
    pub fields: Vec<ArtifactField>,
    pub variants: Vec<EnumVariant>,
    pub permits: Vec<Permit>,
    pub conforms_to: Vec<Conformance>,
    pub operation: Option<OperationSpec>,
}

impl Artifact {
    #[must_use]
    pub fn new(kind: ArtifactKind, name: QualifiedName, schema_name: impl Into<String>) -> Self {
        Self {
            kind,
            name,
            schema_name: schema_name.into(),
            docs: None,
            fields: Vec::new(),
            variants: Vec::new(),
            permits: Vec::new(),
            conforms_to: Vec::new(),
            operation: None,
        }
    }

    #[must_use]
    pub fn with_docs(mut self, docs: Option<&str>) -> Self {
        self.docs = docs.map(str::to_string);
        self
    }

    /// File stem inside the partition directory.
    #[must_use]
    pub fn file_stem(&self) -> String {
        file_stem(&self.name.name)
    }

    /// Path relative to the output directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.name.partition.module_name()).join(format!("{}.rs", self.file_stem()))
    }
}

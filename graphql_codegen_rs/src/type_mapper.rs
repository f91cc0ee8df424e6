//! Schema type reference -> Rust type.
//!
//! `map` is referentially transparent: the same reference always yields
//! the same [`TargetType`] within one run.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CodegenError;
use crate::ir::{Partition, QualifiedName};
use crate::model::{SchemaModel, TypeDefinition, TypeRef};
use crate::naming::NamingConvention;

/// Scalar name -> Rust type used when no override is configured.
const BUILT_IN_SCALARS: &[(&str, &str)] = &[
    ("ID", "String"),
    ("String", "String"),
    ("Int", "i32"),
    ("Float", "f64"),
    ("Boolean", "bool"),
    ("Long", "i64"),
    ("DateTime", "chrono::DateTime<chrono::Utc>"),
    ("Date", "chrono::NaiveDate"),
    ("JSON", "serde_json::Value"),
];

/// A resolved Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// A scalar's Rust type, verbatim.
    Scalar(String),
    /// A generated artifact.
    Artifact(QualifiedName),
    List(Box<TargetType>),
    Nullable(Box<TargetType>),
}

impl TargetType {
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Wraps in `Nullable` unless already nullable.
    #[must_use]
    pub fn into_nullable(self) -> Self {
        if self.is_nullable() {
            self
        } else {
            Self::Nullable(Box::new(self))
        }
    }

    /// Strips one `Nullable` wrapper, if present.
    #[must_use]
    pub fn into_non_null(self) -> Self {
        match self {
            Self::Nullable(inner) => *inner,
            other => other,
        }
    }

    /// Borrowed view of the non-null type.
    #[must_use]
    pub fn non_null(&self) -> &Self {
        match self {
            Self::Nullable(inner) => inner.as_ref(),
            other => other,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(rust_type) => write!(f, "{rust_type}"),
            Self::Artifact(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "Vec<{inner}>"),
            Self::Nullable(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

/// Caller overrides first, then the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarRegistry {
    overrides: BTreeMap<String, String>,
}

impl ScalarRegistry {
    #[must_use]
    pub const fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// # Errors
    ///
    /// Returns `UnknownScalar` if neither table knows `name`.
    pub fn resolve(&self, name: &str) -> Result<String, CodegenError> {
        if let Some(rust_type) = self.overrides.get(name) {
            return Ok(rust_type.trim().to_string());
        }
        BUILT_IN_SCALARS
            .iter()
            .find(|(scalar, _)| *scalar == name)
            .map(|(_, rust_type)| (*rust_type).to_string())
            .ok_or_else(|| CodegenError::UnknownScalar {
                name: name.to_string(),
            })
    }
}

/// Resolves references against one model with one naming convention.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    model: &'a SchemaModel,
    naming: &'a NamingConvention,
    scalars: &'a ScalarRegistry,
    package: &'a str,
}

impl<'a> TypeMapper<'a> {
    #[must_use]
    pub const fn new(
        model: &'a SchemaModel,
        naming: &'a NamingConvention,
        scalars: &'a ScalarRegistry,
        package: &'a str,
    ) -> Self {
        Self {
            model,
            naming,
            scalars,
            package,
        }
    }

    /// Maps a possibly wrapped reference.
    ///
    /// Without `NON_NULL` the result is nullable; `NON_NULL` strips that.
    ///
    /// # Errors
    ///
    /// Returns `UnknownScalar` for unmapped scalars, or `Generation` if the
    /// named type is missing from the model.
    pub fn map(&self, ty: &TypeRef) -> Result<TargetType, CodegenError> {
        match ty {
            TypeRef::NonNull(inner) => Ok(self.map(inner)?.into_non_null()),
            TypeRef::List(inner) => {
                Ok(TargetType::List(Box::new(self.map(inner)?)).into_nullable())
            }
            TypeRef::Named(name) => Ok(self.map_named(name)?.into_nullable()),
        }
    }

    /// Maps a named type to its non-null target.
    ///
    /// # Errors
    ///
    /// See [`TypeMapper::map`].
    pub fn map_named(&self, name: &str) -> Result<TargetType, CodegenError> {
        let Some(definition) = self.model.get(name) else {
            return Err(CodegenError::Generation {
                message: format!("type `{name}` is not part of the schema"),
            });
        };
        match definition {
            TypeDefinition::Scalar(_) => Ok(TargetType::Scalar(self.scalars.resolve(name)?)),
            _ => Ok(TargetType::Artifact(self.artifact_name(definition))),
        }
    }

    /// Name of the artifact a non-scalar definition generates.
    #[must_use]
    pub fn artifact_name(&self, definition: &TypeDefinition) -> QualifiedName {
        let (partition, name): (Partition, String) = match definition {
            TypeDefinition::Object(o) => (Partition::Types, self.naming.type_name(&o.name)),
            TypeDefinition::Interface(i) => {
                (Partition::Interfaces, self.naming.interface_name(&i.name))
            }
            TypeDefinition::Union(u) => (Partition::Unions, self.naming.union_name(&u.name)),
            TypeDefinition::Enum(e) => (Partition::Enums, self.naming.enum_name(&e.name)),
            TypeDefinition::InputObject(i) => {
                (Partition::Inputs, self.naming.input_type_name(&i.name))
            }
            TypeDefinition::Scalar(s) => (Partition::Types, s.name.clone()),
        };
        QualifiedName::new(self.package, partition, name)
    }

    /// Artifact name of the object type called `name`.
    #[must_use]
    pub fn object_name(&self, name: &str) -> QualifiedName {
        QualifiedName::new(self.package, Partition::Types, self.naming.type_name(name))
    }

    #[must_use]
    pub fn interface_name(&self, name: &str) -> QualifiedName {
        QualifiedName::new(
            self.package,
            Partition::Interfaces,
            self.naming.interface_name(name),
        )
    }

    #[must_use]
    pub fn union_name(&self, name: &str) -> QualifiedName {
        QualifiedName::new(self.package, Partition::Unions, self.naming.union_name(name))
    }

    #[must_use]
    pub const fn model(&self) -> &'a SchemaModel {
        self.model
    }

    #[must_use]
    pub const fn naming(&self) -> &'a NamingConvention {
        self.naming
    }

    #[must_use]
    pub const fn package(&self) -> &'a str {
        self.package
    }
}

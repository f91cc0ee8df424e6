//! Normalized, validated schema model.
//!
//! Built once per run by [`crate::parser`] and shared read-only with every
//! generator. Types keep the order in which the document declared them.

use indexmap::IndexMap;
use std::fmt;

/// A possibly wrapped reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Name of the type at the bottom of the wrapper chain.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub arguments: Vec<InputValue>,
    pub deprecation: Option<Deprecation>,
}

impl Field {
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }
}

/// An argument or an input-object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<String>,
}

impl InputValue {
    /// Non-null without a default: callers must always provide it.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub interfaces: Vec<String>,
    /// Unions listing this type, in union declaration order.
    pub unions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Taken from the interface's `possibleTypes`, in that order.
    pub implementers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Option<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    /// Article-prefixed kind, used in diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "a scalar",
            Self::Object(_) => "an object type",
            Self::Interface(_) => "an interface",
            Self::Union(_) => "a union",
            Self::Enum(_) => "an enum",
            Self::InputObject(_) => "an input object",
        }
    }

    /// Scalars, enums and input objects may appear in argument position.
    #[must_use]
    pub const fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Everything except input objects may appear in field position.
    #[must_use]
    pub const fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }
}

/// The validated schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaModel {
    query_type: String,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaModel {
    /// Callers must have validated every invariant; see [`crate::parser`].
    pub(crate) const fn new(
        query_type: String,
        mutation_type: Option<String>,
        subscription_type: Option<String>,
        types: IndexMap<String, TypeDefinition>,
    ) -> Self {
        Self {
            query_type,
            mutation_type,
            subscription_type,
            types,
        }
    }

    #[must_use]
    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    #[must_use]
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    #[must_use]
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    #[must_use]
    pub fn is_root_type(&self, name: &str) -> bool {
        name == self.query_type
            || self.mutation_type.as_deref() == Some(name)
            || self.subscription_type.as_deref() == Some(name)
    }

    /// Whether some output position names `name`: a field of an object or
    /// interface, a union member, or an implementer of an interface.
    #[must_use]
    pub fn is_referenced(&self, name: &str) -> bool {
        self.types.values().any(|definition| match definition {
            TypeDefinition::Object(o) => {
                (o.name == name && !o.interfaces.is_empty())
                    || o.fields.iter().any(|f| f.ty.named_type() == name)
            }
            TypeDefinition::Interface(i) => i.fields.iter().any(|f| f.ty.named_type() == name),
            TypeDefinition::Union(u) => u.possible_types.iter().any(|member| member == name),
            _ => false,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// All definitions in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.types.values().filter_map(|t| match t {
            TypeDefinition::Object(o) => Some(o),
            _ => None,
        })
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.types.values().filter_map(|t| match t {
            TypeDefinition::Interface(i) => Some(i),
            _ => None,
        })
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionType> {
        self.types.values().filter_map(|t| match t {
            TypeDefinition::Union(u) => Some(u),
            _ => None,
        })
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumType> {
        self.types.values().filter_map(|t| match t {
            TypeDefinition::Enum(e) => Some(e),
            _ => None,
        })
    }

    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectType> {
        self.types.values().filter_map(|t| match t {
            TypeDefinition::InputObject(i) => Some(i),
            _ => None,
        })
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        match self.types.get(name) {
            Some(TypeDefinition::Object(o)) => Some(o),
            _ => None,
        }
    }

    /// The query root object.
    #[must_use]
    pub fn query_root(&self) -> Option<&ObjectType> {
        self.object(&self.query_type)
    }

    #[must_use]
    pub fn mutation_root(&self) -> Option<&ObjectType> {
        self.mutation_type.as_deref().and_then(|name| self.object(name))
    }
}

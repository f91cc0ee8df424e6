// @generated by graphql-codegen-rs. Do not edit manually.

pub mod types;
pub mod inputs;
pub mod interfaces;
pub mod unions;
pub mod enums;
pub mod queries;
pub mod mutations;

/// An input builder was built without one of its required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFieldMissing {
    type_name: &'static str,
    field: &'static str,
}

impl RequiredFieldMissing {
    #[must_use]
    pub const fn new(type_name: &'static str, field: &'static str) -> Self {
        Self { type_name, field }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

impl std::fmt::Display for RequiredFieldMissing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "required field `{}.{}` was not set", self.type_name, self.field)
    }
}

impl std::error::Error for RequiredFieldMissing {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A root field call. The value itself serializes to the call's arguments.
pub trait Operation: serde::Serialize {
    type Output: serde::de::DeserializeOwned;

    const KIND: OperationKind;
    const FIELD_NAME: &'static str;
}

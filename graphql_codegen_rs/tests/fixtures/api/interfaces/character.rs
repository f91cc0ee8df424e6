// @generated by graphql-codegen-rs. Do not edit manually.

/// A character in the saga.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "__typename")]
pub enum Character {
    Human(crate::api::types::HumanDTO),
    Droid(crate::api::types::DroidDTO),
}

impl Character {
    /// `__typename` of every permitted member.
    pub const PERMITTED: &'static [&'static str] = &["Human", "Droid"];

    pub fn id(&self) -> Option<&String> {
        match self {
            Self::Human(value) => Some(value.id()),
            Self::Droid(value) => value.id().as_ref(),
        }
    }

    pub fn name(&self) -> &String {
        match self {
            Self::Human(value) => value.name(),
            Self::Droid(value) => value.name(),
        }
    }

    pub fn best_friend(&self) -> &Option<Box<crate::api::interfaces::Character>> {
        match self {
            Self::Human(value) => value.best_friend(),
            Self::Droid(value) => value.best_friend(),
        }
    }
}

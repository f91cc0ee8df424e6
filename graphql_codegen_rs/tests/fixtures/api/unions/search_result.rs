// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchResult {
    Human(crate::api::types::HumanDTO),
    Droid(crate::api::types::DroidDTO),
}

impl SearchResult {
    /// `__typename` of every permitted member.
    pub const PERMITTED: &'static [&'static str] = &["Human", "Droid"];
}

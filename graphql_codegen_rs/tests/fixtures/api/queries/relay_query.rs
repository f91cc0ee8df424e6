// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RelayQuery {}

impl RelayQuery {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl crate::api::Operation for RelayQuery {
    type Output = crate::api::types::QueryDTO;

    const KIND: crate::api::OperationKind = crate::api::OperationKind::Query;
    const FIELD_NAME: &'static str = "relay";
}

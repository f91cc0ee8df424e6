// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HeroQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<crate::api::enums::Episode>,
}

impl HeroQuery {
    #[must_use]
    pub fn new(episode: Option<crate::api::enums::Episode>) -> Self {
        Self { episode }
    }
}

impl crate::api::Operation for HeroQuery {
    type Output = Option<crate::api::interfaces::Character>;

    const KIND: crate::api::OperationKind = crate::api::OperationKind::Query;
    const FIELD_NAME: &'static str = "hero";
}

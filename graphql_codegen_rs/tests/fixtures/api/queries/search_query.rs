// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl crate::api::Operation for SearchQuery {
    type Output = Vec<crate::api::unions::SearchResult>;

    const KIND: crate::api::OperationKind = crate::api::OperationKind::Query;
    const FIELD_NAME: &'static str = "search";
}

// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CreateReviewMutation {
    pub episode: crate::api::enums::Episode,
    pub review: crate::api::inputs::ReviewInput,
}

impl CreateReviewMutation {
    #[must_use]
    pub fn new(episode: crate::api::enums::Episode, review: crate::api::inputs::ReviewInput) -> Self {
        Self { episode, review }
    }
}

impl crate::api::Operation for CreateReviewMutation {
    type Output = Option<crate::api::types::ReviewDTO>;

    const KIND: crate::api::OperationKind = crate::api::OperationKind::Mutation;
    const FIELD_NAME: &'static str = "createReview";
}

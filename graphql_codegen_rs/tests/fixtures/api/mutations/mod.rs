// @generated by graphql-codegen-rs. Do not edit manually.

mod create_review_mutation;

pub use create_review_mutation::CreateReviewMutation;

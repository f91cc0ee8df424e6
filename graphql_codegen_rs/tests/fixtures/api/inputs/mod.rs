// @generated by graphql-codegen-rs. Do not edit manually.

mod review_input;

pub use review_input::{ReviewInput, ReviewInputBuilder};

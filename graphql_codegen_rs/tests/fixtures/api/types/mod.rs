// @generated by graphql-codegen-rs. Do not edit manually.

mod query_dto;
mod human_dto;
mod droid_dto;
mod review_dto;

pub use query_dto::QueryDTO;
pub use human_dto::HumanDTO;
pub use droid_dto::DroidDTO;
pub use review_dto::ReviewDTO;

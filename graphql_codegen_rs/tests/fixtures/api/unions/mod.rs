// @generated by graphql-codegen-rs. Do not edit manually.

mod search_result;

pub use search_result::SearchResult;

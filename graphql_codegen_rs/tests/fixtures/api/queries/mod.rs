// @generated by graphql-codegen-rs. Do not edit manually.

mod hero_query;
mod search_query;
mod relay_query;

pub use hero_query::HeroQuery;
pub use search_query::SearchQuery;
pub use relay_query::RelayQuery;

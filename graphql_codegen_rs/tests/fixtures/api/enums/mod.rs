// @generated by graphql-codegen-rs. Do not edit manually.

mod episode;

pub use episode::Episode;

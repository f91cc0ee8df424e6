// @generated by graphql-codegen-rs. Do not edit manually.

mod character;

pub use character::Character;

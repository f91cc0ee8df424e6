// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueryDTO {
    pub hero: Option<Box<crate::api::interfaces::Character>>,
    pub search: Vec<crate::api::unions::SearchResult>,
    pub relay: Box<crate::api::types::QueryDTO>,
}

impl QueryDTO {
    pub fn hero(&self) -> &Option<Box<crate::api::interfaces::Character>> {
        &self.hero
    }

    pub fn search(&self) -> &Vec<crate::api::unions::SearchResult> {
        &self.search
    }

    pub fn relay(&self) -> &Box<crate::api::types::QueryDTO> {
        &self.relay
    }
}

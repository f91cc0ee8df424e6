// @generated by graphql-codegen-rs. Do not edit manually.

/// A review of one episode.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReviewDTO {
    pub stars: i32,
    pub commentary: Option<String>,
}

impl ReviewDTO {
    pub fn stars(&self) -> &i32 {
        &self.stars
    }

    pub fn commentary(&self) -> &Option<String> {
        &self.commentary
    }
}

// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DroidDTO {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "bestFriend")]
    pub best_friend: Option<Box<crate::api::interfaces::Character>>,
    #[serde(rename = "primaryFunction")]
    pub primary_function: Option<String>,
}

impl DroidDTO {
    pub fn id(&self) -> &Option<String> {
        &self.id
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn best_friend(&self) -> &Option<Box<crate::api::interfaces::Character>> {
        &self.best_friend
    }

    pub fn primary_function(&self) -> &Option<String> {
        &self.primary_function
    }
}

impl From<DroidDTO> for crate::api::interfaces::Character {
    fn from(value: DroidDTO) -> Self {
        Self::Droid(value)
    }
}

impl From<DroidDTO> for crate::api::unions::SearchResult {
    fn from(value: DroidDTO) -> Self {
        Self::Droid(value)
    }
}

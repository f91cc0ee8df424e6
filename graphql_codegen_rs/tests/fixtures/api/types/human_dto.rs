// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HumanDTO {
    pub id: String,
    pub name: String,
    #[serde(rename = "bestFriend")]
    pub best_friend: Option<Box<crate::api::interfaces::Character>>,
    #[serde(rename = "homePlanet")]
    pub home_planet: Option<String>,
}

impl HumanDTO {
    pub fn id(&self) -> &String {
        &self.id
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn best_friend(&self) -> &Option<Box<crate::api::interfaces::Character>> {
        &self.best_friend
    }

    pub fn home_planet(&self) -> &Option<String> {
        &self.home_planet
    }
}

impl From<HumanDTO> for crate::api::interfaces::Character {
    fn from(value: HumanDTO) -> Self {
        Self::Human(value)
    }
}

impl From<HumanDTO> for crate::api::unions::SearchResult {
    fn from(value: HumanDTO) -> Self {
        Self::Human(value)
    }
}

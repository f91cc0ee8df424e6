// @generated by graphql-codegen-rs. Do not edit manually.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Episode {
    #[serde(rename = "NEWHOPE")]
    Newhope,
    #[serde(rename = "EMPIRE")]
    Empire,
    #[serde(rename = "JEDI")]
    Jedi,
}

//! Serde model of a GraphQL introspection result.
//!
//! Only the parts of the document the generator reads are modeled.
//! Extra keys in the JSON are ignored via serde's default behavior.

use serde::Deserialize;

/// Top-level document: either `{"__schema": ..}` or `{"data": {"__schema": ..}}`.
#[derive(Debug, Deserialize)]
pub struct IntrospectionDocument {
    #[serde(default, rename = "__schema")]
    pub schema: Option<IntrospectionSchema>,

    #[serde(default)]
    pub data: Option<DataEnvelope>,
}

impl IntrospectionDocument {
    pub fn into_schema(self) -> Option<IntrospectionSchema> {
        self.schema.or_else(|| self.data.and_then(|d| d.schema))
    }
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope {
    #[serde(default, rename = "__schema")]
    pub schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<RootTypeName>,

    #[serde(default)]
    pub mutation_type: Option<RootTypeName>,

    #[serde(default)]
    pub subscription_type: Option<RootTypeName>,

    #[serde(default)]
    pub types: Vec<FullType>,
}

#[derive(Debug, Deserialize)]
pub struct RootTypeName {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullType {
    pub kind: TypeKind,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub fields: Option<Vec<RawField>>,

    #[serde(default)]
    pub input_fields: Option<Vec<RawInputValue>>,

    #[serde(default)]
    pub interfaces: Option<Vec<RawTypeRef>>,

    #[serde(default)]
    pub enum_values: Option<Vec<RawEnumValue>>,

    #[serde(default)]
    pub possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub args: Vec<RawInputValue>,

    pub r#type: RawTypeRef,

    #[serde(default)]
    pub is_deprecated: bool,

    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputValue {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub r#type: RawTypeRef,

    /// GraphQL literal text, e.g. `"10"` or `"\"abc\""`.
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnumValue {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_deprecated: bool,

    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Nested `{kind, name, ofType}` reference.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeRef {
    pub kind: TypeKind,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub of_type: Option<Box<RawTypeRef>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_is_unwrapped() {
        let json: &str = r#"{"data": {"__schema": {"queryType": {"name": "Query"}, "types": []}}}"#;
        let doc: IntrospectionDocument = serde_json::from_str(json).expect("valid document");
        let schema: IntrospectionSchema = doc.into_schema().expect("schema present");
        assert_eq!(
            Some("Query"),
            schema.query_type.as_ref().map(|q| q.name.as_str())
        );
    }

    #[test]
    fn nested_type_ref_deserializes() {
        let json: &str = r#"{"kind": "NON_NULL", "name": null, "ofType":
            {"kind": "LIST", "name": null, "ofType": {"kind": "SCALAR", "name": "String", "ofType": null}}}"#;
        let r: RawTypeRef = serde_json::from_str(json).expect("valid type ref");
        assert_eq!(TypeKind::NonNull, r.kind);
        let list: &RawTypeRef = r.of_type.as_deref().expect("list");
        assert_eq!(TypeKind::List, list.kind);
        let named: &RawTypeRef = list.of_type.as_deref().expect("named");
        assert_eq!(Some("String"), named.name.as_deref());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json: &str = r#"{"kind": "WIDGET", "name": "X"}"#;
        let result: Result<RawTypeRef, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

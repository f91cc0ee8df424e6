use crate::codegen::{Generator, hierarchy_variant, output_field};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactField, ArtifactKind, Conformance};
use crate::model::{ObjectType, SchemaModel};
use crate::type_mapper::TypeMapper;

/// Object types -> data holders.
///
/// Root operation types are skipped unless a field, union or interface
/// refers to them (`Query.relay: Query!`); their fields always become
/// operation wrappers.
#[derive(Debug, Clone, Copy)]
pub struct ObjectGenerator<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> ObjectGenerator<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }
}

impl Generator for ObjectGenerator<'_> {
    type Definition = ObjectType;

    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        model
            .objects()
            .filter(|object| {
                !model.is_root_type(&object.name) || model.is_referenced(&object.name)
            })
            .map(|object| self.generate_one(object))
            .collect()
    }

    fn generate_one(&self, object: &ObjectType) -> Result<Artifact, CodegenError> {
        let fields: Vec<ArtifactField> = object
            .fields
            .iter()
            .map(|field| output_field(&self.mapper, field))
            .collect::<Result<_, _>>()?;

        let variant: String = hierarchy_variant(&object.name);
        let interfaces = object.interfaces.iter().map(|name| Conformance {
            hierarchy: self.mapper.interface_name(name),
            variant: variant.clone(),
        });
        let unions = object.unions.iter().map(|name| Conformance {
            hierarchy: self.mapper.union_name(name),
            variant: variant.clone(),
        });

        let mut artifact = Artifact::new(
            ArtifactKind::DataHolder,
            self.mapper.object_name(&object.name),
            &object.name,
        )
        .with_docs(object.description.as_deref());
        artifact.fields = fields;
        artifact.conforms_to = interfaces.chain(unions).collect();
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::tests::star_wars;
    use crate::naming::NamingConvention;
    use crate::parser::parse_str;
    use crate::type_mapper::ScalarRegistry;

    #[test]
    fn data_holder_has_one_field_per_schema_field() {
        let model: SchemaModel = star_wars();
        let naming = NamingConvention::default();
        let scalars = ScalarRegistry::default();
        let mapper = TypeMapper::new(&model, &naming, &scalars, "api");
        let human: &ObjectType = model.object("Human").expect("Human");

        let artifact: Artifact = ObjectGenerator::new(mapper)
            .generate_one(human)
            .expect("generates");

        assert_eq!("HumanDTO", artifact.name.name);
        let fields: Vec<(&str, String)> = artifact
            .fields
            .iter()
            .map(|f| (f.ident.as_str(), f.ty.to_string()))
            .collect();
        assert_eq!(
            vec![
                ("id", "String".to_string()),
                ("name", "Option<String>".to_string()),
                ("home_planet", "Option<String>".to_string()),
            ],
            fields
        );
        assert!(artifact.fields[2].deprecation.is_some());
    }

    #[test]
    fn data_holder_conforms_to_interfaces_then_unions() {
        let model: SchemaModel = star_wars();
        let naming = NamingConvention::default();
        let scalars = ScalarRegistry::default();
        let mapper = TypeMapper::new(&model, &naming, &scalars, "api");
        let droid: &ObjectType = model.object("Droid").expect("Droid");

        let artifact: Artifact = ObjectGenerator::new(mapper)
            .generate_one(droid)
            .expect("generates");

        let conformances: Vec<(String, &str)> = artifact
            .conforms_to
            .iter()
            .map(|c| (c.hierarchy.to_string(), c.variant.as_str()))
            .collect();
        assert_eq!(
            vec![
                ("api::interfaces::Character".to_string(), "Droid"),
                ("api::unions::SearchResult".to_string(), "Droid"),
            ],
            conformances
        );
    }

    #[test]
    fn root_types_are_not_data_holders() {
        let model: SchemaModel = star_wars();
        let naming = NamingConvention::default();
        let scalars = ScalarRegistry::default();
        let mapper = TypeMapper::new(&model, &naming, &scalars, "api");
        let artifacts: Vec<Artifact> = ObjectGenerator::new(mapper)
            .generate(&model)
            .expect("generates");
        assert!(
            artifacts
                .iter()
                .all(|a| a.schema_name != "Query" && a.schema_name != "Mutation")
        );
        assert_eq!(4, artifacts.len());
    }

    #[test]
    fn referenced_root_type_is_a_data_holder() {
        let content: &str = r#"{"__schema": {
            "queryType": {"name": "Query"},
            "mutationType": {"name": "Mutation"},
            "types": [
                {"kind": "SCALAR", "name": "String"},
                {"kind": "OBJECT", "name": "Query", "fields": [
                    {"name": "hello", "args": [], "type": {"kind": "SCALAR", "name": "String"}},
                    {"name": "relay", "args": [], "type": {"kind": "NON_NULL", "ofType": {"kind": "OBJECT", "name": "Query"}}}
                ]},
                {"kind": "OBJECT", "name": "Mutation", "fields": [
                    {"name": "ping", "args": [], "type": {"kind": "SCALAR", "name": "String"}}
                ]}
            ]
        }}"#;
        let model: SchemaModel = parse_str(content, "<test>").expect("valid schema");
        let naming = NamingConvention::default();
        let scalars = ScalarRegistry::default();
        let mapper = TypeMapper::new(&model, &naming, &scalars, "api");

        let artifacts: Vec<Artifact> = ObjectGenerator::new(mapper)
            .generate(&model)
            .expect("generates");

        let names: Vec<String> = artifacts.iter().map(|a| a.name.to_string()).collect();
        assert_eq!(vec!["api::types::QueryDTO".to_string()], names);
        let relay: &ArtifactField = &artifacts[0].fields[1];
        assert_eq!("api::types::QueryDTO", relay.ty.to_string());
    }
}

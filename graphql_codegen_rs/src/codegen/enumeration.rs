use crate::codegen::{Generator, qualified};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactKind, EnumVariant, Partition};
use crate::model::{EnumType, SchemaModel};
use crate::naming::variant_idents;
use crate::type_mapper::TypeMapper;

/// Enums -> Rust enums in declaration order. Deprecated values stay.
#[derive(Debug, Clone, Copy)]
pub struct EnumGenerator<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> EnumGenerator<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }
}

impl Generator for EnumGenerator<'_> {
    type Definition = EnumType;

    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        model.enums().map(|e| self.generate_one(e)).collect()
    }

    fn generate_one(&self, enum_type: &EnumType) -> Result<Artifact, CodegenError> {
        let idents: Vec<String> = variant_idents(enum_type.values.iter().map(|v| v.name.as_str()));
        let name: String = self.mapper.naming().enum_name(&enum_type.name);
        let mut artifact = Artifact::new(
            ArtifactKind::Enumeration,
            qualified(&self.mapper, Partition::Enums, name),
            &enum_type.name,
        )
        .with_docs(enum_type.description.as_deref());
        artifact.variants = enum_type
            .values
            .iter()
            .zip(idents)
            .map(|(value, ident)| EnumVariant {
                ident,
                wire_name: value.name.clone(),
                docs: value.description.clone(),
                deprecation: value.deprecation.clone(),
            })
            .collect();
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::tests::star_wars;
    use crate::naming::NamingConvention;
    use crate::type_mapper::ScalarRegistry;

    #[test]
    fn values_keep_order_and_deprecation() {
        let model: SchemaModel = star_wars();
        let naming = NamingConvention::default();
        let scalars = ScalarRegistry::default();
        let mapper = TypeMapper::new(&model, &naming, &scalars, "api");
        let episode: &EnumType = model.enums().next().expect("Episode");

        let artifact: Artifact = EnumGenerator::new(mapper)
            .generate_one(episode)
            .expect("generates");

        let variants: Vec<(&str, &str, bool)> = artifact
            .variants
            .iter()
            .map(|v| {
                (
                    v.ident.as_str(),
                    v.wire_name.as_str(),
                    v.deprecation.is_some(),
                )
            })
            .collect();
        assert_eq!(
            vec![
                ("Newhope", "NEWHOPE", false),
                ("Empire", "EMPIRE", false),
                ("Jedi", "JEDI", true),
            ],
            variants
        );
    }
}

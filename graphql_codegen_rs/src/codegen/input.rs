use crate::codegen::{Generator, input_field, qualified};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactField, ArtifactKind, Partition};
use crate::model::{InputObjectType, SchemaModel};
use crate::type_mapper::TypeMapper;

/// Methods the emitted input type and its builder define next to the
/// per-field accessors and setters.
const BUILDER_METHODS: &[&str] = &["builder", "from_builder", "build"];

/// Input objects -> immutable values built through a builder.
///
/// Required-ness is checked when the generated `build()` runs, not here.
#[derive(Debug, Clone, Copy)]
pub struct InputGenerator<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> InputGenerator<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }
}

impl Generator for InputGenerator<'_> {
    type Definition = InputObjectType;

    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        model
            .input_objects()
            .map(|input| self.generate_one(input))
            .collect()
    }

    fn generate_one(&self, input: &InputObjectType) -> Result<Artifact, CodegenError> {
        let mut fields: Vec<ArtifactField> = input
            .fields
            .iter()
            .map(|value| input_field(&self.mapper, value))
            .collect::<Result<_, _>>()?;
        for field in &mut fields {
            if BUILDER_METHODS.contains(&field.ident.as_str()) {
                field.ident.push('_');
            }
        }
        let name: String = self.mapper.naming().input_type_name(&input.name);
        let mut artifact = Artifact::new(
            ArtifactKind::InputBuilder,
            qualified(&self.mapper, Partition::Inputs, name),
            &input.name,
        )
        .with_docs(input.description.as_deref());
        artifact.fields = fields;
        Ok(artifact)
    }
}

use crate::codegen::{Generator, permit};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactKind};
use crate::model::{SchemaModel, UnionType};
use crate::type_mapper::TypeMapper;

/// Unions -> marker hierarchies without accessors.
#[derive(Debug, Clone, Copy)]
pub struct UnionGenerator<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> UnionGenerator<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }
}

impl Generator for UnionGenerator<'_> {
    type Definition = UnionType;

    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        model.unions().map(|u| self.generate_one(u)).collect()
    }

    fn generate_one(&self, union: &UnionType) -> Result<Artifact, CodegenError> {
        let mut artifact = Artifact::new(
            ArtifactKind::Union,
            self.mapper.union_name(&union.name),
            &union.name,
        )
        .with_docs(union.description.as_deref());
        artifact.permits = union
            .possible_types
            .iter()
            .map(|name| permit(&self.mapper, name))
            .collect();
        Ok(artifact)
    }
}

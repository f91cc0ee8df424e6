use crate::codegen::{Generator, input_field, qualified};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactField, ArtifactKind, OperationKind, OperationSpec, Partition};
use crate::model::{Field, ObjectType, SchemaModel};
use crate::naming::capitalize;
use crate::type_mapper::TypeMapper;

/// Root fields -> operation wrappers, one per field of the query or
/// mutation root type.
#[derive(Debug, Clone, Copy)]
pub struct OperationGenerator<'a> {
    mapper: TypeMapper<'a>,
    kind: OperationKind,
}

impl<'a> OperationGenerator<'a> {
    #[must_use]
    pub const fn queries(mapper: TypeMapper<'a>) -> Self {
        Self {
            mapper,
            kind: OperationKind::Query,
        }
    }

    #[must_use]
    pub const fn mutations(mapper: TypeMapper<'a>) -> Self {
        Self {
            mapper,
            kind: OperationKind::Mutation,
        }
    }

    fn root<'m>(&self, model: &'m SchemaModel) -> Option<&'m ObjectType> {
        match self.kind {
            OperationKind::Query => model.query_root(),
            OperationKind::Mutation => model.mutation_root(),
        }
    }

    fn partition(&self) -> Partition {
        match self.kind {
            OperationKind::Query => Partition::Queries,
            OperationKind::Mutation => Partition::Mutations,
        }
    }

    fn artifact_name(&self, field_name: &str) -> String {
        let naming = self.mapper.naming();
        let base: String = capitalize(field_name);
        match self.kind {
            OperationKind::Query => naming.query_name(&base),
            OperationKind::Mutation => naming.mutation_name(&base),
        }
    }
}

impl Generator for OperationGenerator<'_> {
    type Definition = Field;

    /// No mutation root means no mutation artifacts.
    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        let Some(root) = self.root(model) else {
            return Ok(Vec::new());
        };
        root.fields.iter().map(|f| self.generate_one(f)).collect()
    }

    fn generate_one(&self, field: &Field) -> Result<Artifact, CodegenError> {
        let arguments: Vec<ArtifactField> = field
            .arguments
            .iter()
            .map(|argument| input_field(&self.mapper, argument))
            .collect::<Result<_, _>>()?;
        let name = qualified(
            &self.mapper,
            self.partition(),
            self.artifact_name(&field.name),
        );
        let mut artifact = Artifact::new(ArtifactKind::Operation(self.kind), name, &field.name)
            .with_docs(field.description.as_deref());
        artifact.fields = arguments;
        artifact.operation = Some(OperationSpec {
            kind: self.kind,
            field_name: field.name.clone(),
            result: self.mapper.map(&field.ty)?,
        });
        Ok(artifact)
    }
}

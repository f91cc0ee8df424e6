//! One generator per schema construct, run in a fixed order.

mod enumeration;
mod input;
mod interface;
mod object;
mod operation;
mod union;

pub use enumeration::EnumGenerator;
pub use input::InputGenerator;
pub use interface::InterfaceGenerator;
pub use object::ObjectGenerator;
pub use operation::OperationGenerator;
pub use union::UnionGenerator;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::CodegenError;
use crate::incremental::RunContext;
use crate::ir::{Artifact, ArtifactField, ArtifactKind, Partition, Permit, QualifiedName};
use crate::model::{Field, InputValue, SchemaModel};
use crate::naming::{bare_ident, capitalize, field_ident, file_stem};
use crate::type_mapper::TypeMapper;

/// Turns one kind of schema definition into artifacts.
pub trait Generator {
    type Definition;

    /// Every artifact of this kind, in schema declaration order.
    ///
    /// # Errors
    ///
    /// Fails on the first definition that cannot be generated.
    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError>;

    /// # Errors
    ///
    /// Returns `UnknownScalar` or `Generation` if a referenced type cannot be mapped.
    fn generate_one(&self, definition: &Self::Definition) -> Result<Artifact, CodegenError>;
}

/// Runs every generator over one model.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSet<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> GeneratorSet<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }

    /// Objects, inputs, interfaces, unions, enums, queries, mutations.
    ///
    /// # Errors
    ///
    /// Any generator failure aborts the whole run; so does a name collision.
    pub fn generate_all(
        &self,
        model: &SchemaModel,
        ctx: &RunContext,
    ) -> Result<Vec<Artifact>, CodegenError> {
        let mut artifacts: Vec<Artifact> = Vec::new();
        let batches: [(&str, Vec<Artifact>); 7] = [
            ("object", ObjectGenerator::new(self.mapper).generate(model)?),
            ("input", InputGenerator::new(self.mapper).generate(model)?),
            ("interface", InterfaceGenerator::new(self.mapper).generate(model)?),
            ("union", UnionGenerator::new(self.mapper).generate(model)?),
            ("enum", EnumGenerator::new(self.mapper).generate(model)?),
            ("query", OperationGenerator::queries(self.mapper).generate(model)?),
            (
                "mutation",
                OperationGenerator::mutations(self.mapper).generate(model)?,
            ),
        ];
        for (generator, batch) in batches {
            debug!(run_id = %ctx.run_id, generator, artifacts = batch.len(), "generator finished");
            artifacts.extend(batch);
        }
        check_collisions(&artifacts)?;
        Ok(artifacts)
    }
}

/// Two artifacts may not share a name within one partition, and no two
/// fields of one artifact may share an identifier.
fn check_collisions(artifacts: &[Artifact]) -> Result<(), CodegenError> {
    let mut seen: IndexMap<(Partition, String), &str> = IndexMap::new();
    for artifact in artifacts {
        let mut names: Vec<String> = vec![artifact.name.name.clone()];
        if artifact.kind == ArtifactKind::InputBuilder {
            names.push(format!("{}Builder", artifact.name.name));
        }
        for name in names {
            let key: (Partition, String) = (artifact.name.partition, file_stem(&name));
            if let Some(first) = seen.get(&key) {
                return Err(CodegenError::NameCollision {
                    namespace: artifact.name.namespace(),
                    name,
                    first: (*first).to_string(),
                    second: artifact.schema_name.clone(),
                });
            }
            seen.insert(key, &artifact.schema_name);
        }
        check_member_collisions(artifact)?;
    }
    Ok(())
}

fn check_member_collisions(artifact: &Artifact) -> Result<(), CodegenError> {
    let mut seen: IndexMap<&str, &str> = IndexMap::new();
    for field in &artifact.fields {
        let ident: &str = bare_ident(&field.ident);
        if let Some(first) = seen.get(ident) {
            return Err(CodegenError::NameCollision {
                namespace: artifact.name.to_string(),
                name: ident.to_string(),
                first: (*first).to_string(),
                second: field.wire_name.clone(),
            });
        }
        seen.insert(ident, &field.wire_name);
    }
    Ok(())
}

/// Output field -> accessor/field description.
pub(crate) fn output_field(
    mapper: &TypeMapper<'_>,
    field: &Field,
) -> Result<ArtifactField, CodegenError> {
    Ok(ArtifactField {
        ident: field_ident(&field.name),
        wire_name: field.name.clone(),
        ty: mapper.map(&field.ty)?,
        docs: field.description.clone(),
        required: field.ty.is_non_null(),
        deprecation: field.deprecation.clone(),
        default_value: None,
    })
}

/// Argument or input field. Anything not required is nullable in Rust,
/// so a schema default can apply server-side when the value is omitted.
pub(crate) fn input_field(
    mapper: &TypeMapper<'_>,
    value: &InputValue,
) -> Result<ArtifactField, CodegenError> {
    let mapped = mapper.map(&value.ty)?;
    let required: bool = value.is_required();
    Ok(ArtifactField {
        ident: field_ident(&value.name),
        wire_name: value.name.clone(),
        ty: if required {
            mapped
        } else {
            mapped.into_nullable()
        },
        docs: value.description.clone(),
        required,
        deprecation: None,
        default_value: value.default_value.clone(),
    })
}

/// Closed-hierarchy member for the object type `object_name`.
pub(crate) fn permit(mapper: &TypeMapper<'_>, object_name: &str) -> Permit {
    Permit {
        variant: capitalize(object_name),
        type_name: object_name.to_string(),
        target: mapper.object_name(object_name),
        narrowed: Vec::new(),
    }
}

pub(crate) fn hierarchy_variant(object_name: &str) -> String {
    capitalize(object_name)
}

pub(crate) fn qualified(
    mapper: &TypeMapper<'_>,
    partition: Partition,
    name: String,
) -> QualifiedName {
    QualifiedName::new(mapper.package(), partition, name)
}

use crate::codegen::{Generator, output_field, permit};
use crate::error::CodegenError;
use crate::ir::{Artifact, ArtifactField, ArtifactKind, Permit};
use crate::model::{InterfaceType, ObjectType, SchemaModel};
use crate::type_mapper::{TargetType, TypeMapper};

/// Interfaces -> closed hierarchies whose permitted members are exactly
/// the interface's possible types.
///
/// A member may declare an accessor non-null where the interface leaves it
/// nullable; that is recorded on its permit. Any other difference between
/// member and interface field types is rejected.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceGenerator<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> InterfaceGenerator<'a> {
    #[must_use]
    pub const fn new(mapper: TypeMapper<'a>) -> Self {
        Self { mapper }
    }

    fn member(
        &self,
        interface: &InterfaceType,
        accessors: &[ArtifactField],
        name: &str,
    ) -> Result<Permit, CodegenError> {
        let object: &ObjectType = self.mapper.model().object(name).ok_or_else(|| {
            CodegenError::Generation {
                message: format!("`{}` permits non-object `{name}`", interface.name),
            }
        })?;
        let mut member: Permit = permit(&self.mapper, name);
        for (field, accessor) in interface.fields.iter().zip(accessors) {
            let Some(own) = object.fields.iter().find(|f| f.name == field.name) else {
                return Err(CodegenError::Generation {
                    message: format!(
                        "`{name}` implements `{}` but has no field `{}`",
                        interface.name, field.name
                    ),
                });
            };
            let own_ty: TargetType = self.mapper.map(&own.ty)?;
            if own_ty == accessor.ty {
                continue;
            }
            if accessor.ty.is_nullable() && &own_ty == accessor.ty.non_null() {
                member.narrowed.push(accessor.ident.clone());
            } else {
                return Err(CodegenError::Generation {
                    message: format!(
                        "`{name}.{}` is `{own_ty}`, which `{}.{}` cannot return as `{}`",
                        own.name, interface.name, field.name, accessor.ty
                    ),
                });
            }
        }
        Ok(member)
    }
}

impl Generator for InterfaceGenerator<'_> {
    type Definition = InterfaceType;

    fn generate(&self, model: &SchemaModel) -> Result<Vec<Artifact>, CodegenError> {
        model
            .interfaces()
            .map(|interface| self.generate_one(interface))
            .collect()
    }

    fn generate_one(&self, interface: &InterfaceType) -> Result<Artifact, CodegenError> {
        let accessors: Vec<ArtifactField> = interface
            .fields
            .iter()
            .map(|field| output_field(&self.mapper, field))
            .collect::<Result<_, _>>()?;
        let permits: Vec<Permit> = interface
            .implementers
            .iter()
            .map(|name| self.member(interface, &accessors, name))
            .collect::<Result<_, _>>()?;
        let mut artifact = Artifact::new(
            ArtifactKind::Interface,
            self.mapper.interface_name(&interface.name),
            &interface.name,
        )
        .with_docs(interface.description.as_deref());
        artifact.fields = accessors;
        artifact.permits = permits;
        Ok(artifact)
    }
}

//! Generate typed Rust modules from a GraphQL introspection schema.
//!
//! The pipeline reads introspection JSON into a validated [`SchemaModel`],
//! maps every schema construct to an [`Artifact`] description, renders the
//! artifacts through an [`Emitter`] and records a content digest so that
//! unchanged input is not regenerated.
//!
//! ```no_run
//! use graphql_codegen_rs::{CodegenConfig, GenerationStatus, generate};
//!
//! let config = CodegenConfig::new("schema.json", "src/api", "crate::api");
//! let result = generate(&config)?;
//! if result.status == GenerationStatus::Generated {
//!     println!("wrote {} artifacts", result.artifact_count);
//! }
//! # Ok::<(), graphql_codegen_rs::CodegenError>(())
//! ```

pub mod codegen;
mod emit;
mod error;
mod incremental;
mod introspection;
mod ir;
mod model;
mod naming;
mod parser;
mod settings;
mod type_mapper;

pub use emit::{Emitter, GENERATED_HEADER, RustEmitter};
pub use error::{CodegenError, SchemaIssue, SchemaIssueKind, SchemaParseError};
pub use incremental::{
    GenerationResult, GenerationStatus, MARKER_FILE, RunContext, compute_digest, generate,
    generate_with_emitter,
};
pub use ir::{
    Artifact, ArtifactField, ArtifactKind, Conformance, EnumVariant, OperationKind,
    OperationSpec, Partition, Permit, QualifiedName,
};
pub use model::{
    Deprecation, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
    ObjectType, ScalarType, SchemaModel, TypeDefinition, TypeRef, UnionType,
};
pub use naming::{NamingConvention, NamingSuffixes};
pub use parser::{SchemaSource, parse_source, parse_str};
pub use settings::{CodegenConfig, NamingConfig};
pub use type_mapper::{ScalarRegistry, TargetType, TypeMapper};

/// Reads and validates a schema file without generating anything.
///
/// # Errors
///
/// Returns `SchemaNotFound`, `SchemaNotAFile`, `SchemaUnreadable` or
/// `SchemaParse`.
pub fn parse_schema(path: impl AsRef<std::path::Path>) -> Result<SchemaModel, CodegenError> {
    parse_source(&SchemaSource::Path(path.as_ref().to_path_buf()))
}

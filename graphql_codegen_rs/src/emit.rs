//! Artifact -> Rust source text.
//!
//! Everything is written with `writeln!` against a `dyn Write`, one
//! artifact per file. Generated code refers to other artifacts by their
//! fully qualified path, so files need no `use` lines.

use std::io::{self, Write};

use crate::ir::{Artifact, ArtifactField, ArtifactKind, Partition, Permit};
use crate::model::Deprecation;
use crate::naming::bare_ident;
use crate::type_mapper::TargetType;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by graphql-codegen-rs. Do not edit manually.";

/// Renders artifacts and the module files that tie them together.
pub trait Emitter {
    /// # Errors
    ///
    /// Propagates write failures.
    fn emit_artifact(&self, artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()>;

    /// `mod.rs` of one partition directory.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    fn emit_partition_index(
        &self,
        artifacts: &[&Artifact],
        writer: &mut dyn Write,
    ) -> io::Result<()>;

    /// `mod.rs` of the output directory: partition declarations plus the
    /// runtime items generated code depends on.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    fn emit_root_module(&self, partitions: &[Partition], writer: &mut dyn Write) -> io::Result<()>;

    /// First line of every file this emitter writes. Files in the output
    /// directory that do not start with it are never deleted or replaced.
    fn generated_header(&self) -> &str {
        GENERATED_HEADER
    }
}

/// Emits plain Rust with serde derives.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn emit_artifact(&self, artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{GENERATED_HEADER}")?;
        writeln!(writer)?;
        match artifact.kind {
            ArtifactKind::DataHolder => emit_data_holder(artifact, writer),
            ArtifactKind::InputBuilder => emit_input_builder(artifact, writer),
            ArtifactKind::Interface => emit_hierarchy(artifact, writer, true),
            ArtifactKind::Union => emit_hierarchy(artifact, writer, false),
            ArtifactKind::Enumeration => emit_enumeration(artifact, writer),
            ArtifactKind::Operation(_) => emit_operation(artifact, writer),
        }
    }

    fn emit_partition_index(
        &self,
        artifacts: &[&Artifact],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer, "{GENERATED_HEADER}")?;
        writeln!(writer)?;
        for artifact in artifacts {
            writeln!(writer, "mod {};", artifact.file_stem())?;
        }
        if !artifacts.is_empty() {
            writeln!(writer)?;
        }
        for artifact in artifacts {
            if artifact.kind == ArtifactKind::InputBuilder {
                writeln!(
                    writer,
                    "pub use {}::{{{name}, {}}};",
                    artifact.file_stem(),
                    builder_name(artifact),
                    name = artifact.name.name
                )?;
            } else {
                writeln!(
                    writer,
                    "pub use {}::{};",
                    artifact.file_stem(),
                    artifact.name.name
                )?;
            }
        }
        Ok(())
    }

    fn emit_root_module(&self, partitions: &[Partition], writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{GENERATED_HEADER}")?;
        writeln!(writer)?;
        for partition in partitions {
            writeln!(writer, "pub mod {};", partition.module_name())?;
        }
        if !partitions.is_empty() {
            writeln!(writer)?;
        }
        writer.write_all(RUNTIME_ITEMS.as_bytes())
    }
}

/// Shared items referenced by input builders and operation wrappers.
const RUNTIME_ITEMS: &str = r#"/// An input builder was built without one of its required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFieldMissing {
    type_name: &'static str,
    field: &'static str,
}

impl RequiredFieldMissing {
    #[must_use]
    pub const fn new(type_name: &'static str, field: &'static str) -> Self {
        Self { type_name, field }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

impl std::fmt::Display for RequiredFieldMissing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "required field `{}.{}` was not set", self.type_name, self.field)
    }
}

impl std::error::Error for RequiredFieldMissing {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A root field call. The value itself serializes to the call's arguments.
pub trait Operation: serde::Serialize {
    type Output: serde::de::DeserializeOwned;

    const KIND: OperationKind;
    const FIELD_NAME: &'static str;
}
"#;

/// Escape a string for use inside a Rust double-quoted attribute.
fn escape_for_rust_attr(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Each line of `description` becomes a `///` line prefixed by `line_prefix`.
fn emit_doc_comment(
    writer: &mut dyn Write,
    description: Option<&str>,
    line_prefix: &str,
) -> io::Result<()> {
    let Some(desc) = description else {
        return Ok(());
    };
    let trimmed: &str = desc.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    for line in trimmed.lines() {
        let line: &str = line.trim_end();
        if line.is_empty() {
            writeln!(writer, "{line_prefix}///")?;
        } else {
            writeln!(writer, "{line_prefix}/// {line}")?;
        }
    }
    Ok(())
}

fn emit_deprecated(
    writer: &mut dyn Write,
    deprecation: Option<&Deprecation>,
    line_prefix: &str,
) -> io::Result<()> {
    match deprecation {
        None => Ok(()),
        Some(Deprecation { reason: Some(reason) }) => writeln!(
            writer,
            "{line_prefix}#[deprecated(note = \"{}\")]",
            escape_for_rust_attr(reason)
        ),
        Some(Deprecation { reason: None }) => writeln!(writer, "{line_prefix}#[deprecated]"),
    }
}

/// Struct-field type. Artifact references outside a `Vec` are boxed so
/// self-referencing types stay finitely sized; enums never recurse.
fn render_field_type(ty: &TargetType) -> String {
    match ty {
        TargetType::Nullable(inner) => format!("Option<{}>", render_field_type(inner)),
        TargetType::Artifact(name) if name.partition != Partition::Enums => {
            format!("Box<{name}>")
        }
        other => other.to_string(),
    }
}

/// Expression turning a setter argument of type `ty.non_null()` into the
/// stored (possibly boxed) value.
fn stored_value(ty: &TargetType) -> &'static str {
    match ty.non_null() {
        TargetType::Artifact(name) if name.partition != Partition::Enums => "Box::new(value)",
        _ => "value",
    }
}

/// Doc comment, schema default and wire rename of one field.
fn emit_field_attrs(writer: &mut dyn Write, field: &ArtifactField) -> io::Result<()> {
    emit_doc_comment(writer, field.docs.as_deref(), "    ")?;
    if let Some(default) = &field.default_value {
        if field.docs.is_some() {
            writeln!(writer, "    ///")?;
        }
        writeln!(writer, "    /// Server default: `{default}`.")?;
    }
    if bare_ident(&field.ident) != field.wire_name {
        writeln!(
            writer,
            "    #[serde(rename = \"{}\")]",
            escape_for_rust_attr(&field.wire_name)
        )?;
    }
    Ok(())
}

/// Accessor returning `&T` for a field stored as `T`.
fn emit_accessor(writer: &mut dyn Write, field: &ArtifactField, body: &str) -> io::Result<()> {
    let returns: String = format!("&{}", render_field_type(&field.ty));
    emit_accessor_returning(writer, field, &returns, body)
}

fn emit_accessor_returning(
    writer: &mut dyn Write,
    field: &ArtifactField,
    returns: &str,
    body: &str,
) -> io::Result<()> {
    emit_deprecated(writer, field.deprecation.as_ref(), "    ")?;
    writeln!(writer, "    pub fn {}(&self) -> {returns} {{", field.ident)?;
    writeln!(writer, "        {body}")?;
    writeln!(writer, "    }}")
}

fn emit_data_holder(artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()> {
    let name: &str = &artifact.name.name;
    emit_doc_comment(writer, artifact.docs.as_deref(), "")?;
    writeln!(
        writer,
        "#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]"
    )?;
    writeln!(writer, "pub struct {name} {{")?;
    for field in &artifact.fields {
        emit_field_attrs(writer, field)?;
        writeln!(
            writer,
            "    pub {}: {},",
            field.ident,
            render_field_type(&field.ty)
        )?;
    }
    writeln!(writer, "}}")?;

    if !artifact.fields.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "impl {name} {{")?;
        for (index, field) in artifact.fields.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }
            emit_accessor(writer, field, &format!("&self.{}", field.ident))?;
        }
        writeln!(writer, "}}")?;
    }

    for conformance in &artifact.conforms_to {
        writeln!(writer)?;
        writeln!(writer, "impl From<{name}> for {} {{", conformance.hierarchy)?;
        writeln!(writer, "    fn from(value: {name}) -> Self {{")?;
        writeln!(writer, "        Self::{}(value)", conformance.variant)?;
        writeln!(writer, "    }}")?;
        writeln!(writer, "}}")?;
    }
    Ok(())
}

/// Builder type generated next to an input artifact.
fn builder_name(artifact: &Artifact) -> String {
    format!("{}Builder", artifact.name.name)
}

fn emit_input_builder(artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()> {
    let name: &str = &artifact.name.name;
    let builder: String = builder_name(artifact);
    let missing: String = format!("{}::RequiredFieldMissing", artifact.name.package);

    emit_doc_comment(writer, artifact.docs.as_deref(), "")?;
    writeln!(writer, "#[derive(Debug, Clone, PartialEq, serde::Serialize)]")?;
    writeln!(writer, "pub struct {name} {{")?;
    for field in &artifact.fields {
        emit_field_attrs(writer, field)?;
        if field.ty.is_nullable() {
            writeln!(
                writer,
                "    #[serde(skip_serializing_if = \"Option::is_none\")]"
            )?;
        }
        writeln!(
            writer,
            "    {}: {},",
            field.ident,
            render_field_type(&field.ty)
        )?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "impl {name} {{")?;
    writeln!(writer, "    #[must_use]")?;
    writeln!(writer, "    pub fn builder() -> {builder} {{")?;
    writeln!(writer, "        {builder}::default()")?;
    writeln!(writer, "    }}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "    fn from_builder(builder: {builder}) -> Result<Self, {missing}> {{"
    )?;
    writeln!(writer, "        Ok(Self {{")?;
    for field in &artifact.fields {
        if field.required {
            writeln!(
                writer,
                "            {ident}: builder.{ident}.ok_or_else(|| {missing}::new(\"{name}\", \"{wire}\"))?,",
                ident = field.ident,
                wire = escape_for_rust_attr(&field.wire_name),
            )?;
        } else {
            writeln!(writer, "            {ident}: builder.{ident},", ident = field.ident)?;
        }
    }
    writeln!(writer, "        }})")?;
    writeln!(writer, "    }}")?;
    for field in &artifact.fields {
        writeln!(writer)?;
        emit_accessor(writer, field, &format!("&self.{}", field.ident))?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    emit_builder(artifact, &builder, &missing, writer)
}

/// The `Default` builder: one setter per field, then `build()`.
fn emit_builder(
    artifact: &Artifact,
    builder: &str,
    missing: &str,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let name: &str = &artifact.name.name;
    writeln!(writer, "#[derive(Debug, Clone, Default)]")?;
    writeln!(writer, "pub struct {builder} {{")?;
    for field in &artifact.fields {
        let stored: TargetType = field.ty.clone().into_nullable();
        writeln!(
            writer,
            "    {}: {},",
            field.ident,
            render_field_type(&stored)
        )?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "impl {builder} {{")?;
    for field in &artifact.fields {
        emit_doc_comment(writer, field.docs.as_deref(), "    ")?;
        writeln!(writer, "    #[must_use]")?;
        writeln!(
            writer,
            "    pub fn {}(mut self, value: {}) -> Self {{",
            field.ident,
            field.ty.non_null()
        )?;
        writeln!(
            writer,
            "        self.{} = Some({});",
            field.ident,
            stored_value(&field.ty)
        )?;
        writeln!(writer, "        self")?;
        writeln!(writer, "    }}")?;
        writeln!(writer)?;
    }
    writeln!(writer, "    /// # Errors")?;
    writeln!(writer, "    ///")?;
    writeln!(
        writer,
        "    /// Returns `RequiredFieldMissing` naming the first unset required field."
    )?;
    writeln!(
        writer,
        "    pub fn build(self) -> Result<{name}, {missing}> {{"
    )?;
    writeln!(writer, "        {name}::from_builder(self)")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "}}")
}

fn emit_permitted(writer: &mut dyn Write, permits: &[Permit]) -> io::Result<()> {
    let names: Vec<String> = permits
        .iter()
        .map(|p| format!("\"{}\"", escape_for_rust_attr(&p.type_name)))
        .collect();
    writeln!(writer, "    /// `__typename` of every permitted member.")?;
    writeln!(
        writer,
        "    pub const PERMITTED: &'static [&'static str] = &[{}];",
        names.join(", ")
    )
}

/// Interfaces carry accessors; unions are bare markers.
fn emit_hierarchy(
    artifact: &Artifact,
    writer: &mut dyn Write,
    with_accessors: bool,
) -> io::Result<()> {
    let name: &str = &artifact.name.name;
    emit_doc_comment(writer, artifact.docs.as_deref(), "")?;
    writeln!(
        writer,
        "#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]"
    )?;
    if !artifact.permits.is_empty() {
        writeln!(writer, "#[serde(tag = \"__typename\")]")?;
    }
    writeln!(writer, "pub enum {name} {{")?;
    for permit in &artifact.permits {
        if permit.variant != permit.type_name {
            writeln!(
                writer,
                "    #[serde(rename = \"{}\")]",
                escape_for_rust_attr(&permit.type_name)
            )?;
        }
        writeln!(writer, "    {}({}),", permit.variant, permit.target)?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "impl {name} {{")?;
    emit_permitted(writer, &artifact.permits)?;
    if with_accessors {
        for field in &artifact.fields {
            writeln!(writer)?;
            emit_doc_comment(writer, field.docs.as_deref(), "    ")?;
            if field.deprecation.is_some() {
                writeln!(writer, "    #[allow(deprecated)]")?;
            }
            emit_dispatching_accessor(writer, field, &artifact.permits)?;
        }
    }
    writeln!(writer, "}}")
}

/// Forwards to the member's own accessor. When some member declares the
/// field non-null, every arm is lifted to `Option<&T>`.
fn emit_dispatching_accessor(
    writer: &mut dyn Write,
    field: &ArtifactField,
    permits: &[Permit],
) -> io::Result<()> {
    if permits.is_empty() {
        return emit_accessor(writer, field, "match *self {}");
    }
    let lifted: bool = permits.iter().any(|p| p.narrowed.contains(&field.ident));
    let arms: Vec<String> = permits
        .iter()
        .map(|p| {
            let call: String = format!("value.{}()", field.ident);
            let value: String = if p.narrowed.contains(&field.ident) {
                format!("Some({call})")
            } else if lifted {
                format!("{call}.as_ref()")
            } else {
                call
            };
            format!("            Self::{}(value) => {value},", p.variant)
        })
        .collect();
    let body: String = format!("match self {{\n{}\n        }}", arms.join("\n"));
    if lifted {
        let returns: String = format!("Option<&{}>", render_field_type(field.ty.non_null()));
        emit_accessor_returning(writer, field, &returns, &body)
    } else {
        emit_accessor(writer, field, &body)
    }
}

fn emit_enumeration(artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()> {
    emit_doc_comment(writer, artifact.docs.as_deref(), "")?;
    writeln!(
        writer,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]"
    )?;
    writeln!(writer, "pub enum {} {{", artifact.name.name)?;
    for variant in &artifact.variants {
        emit_doc_comment(writer, variant.docs.as_deref(), "    ")?;
        emit_deprecated(writer, variant.deprecation.as_ref(), "    ")?;
        writeln!(
            writer,
            "    #[serde(rename = \"{}\")]",
            escape_for_rust_attr(&variant.wire_name)
        )?;
        writeln!(writer, "    {},", variant.ident)?;
    }
    writeln!(writer, "}}")
}

fn emit_operation(artifact: &Artifact, writer: &mut dyn Write) -> io::Result<()> {
    let Some(operation) = &artifact.operation else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` has no operation description", artifact.name),
        ));
    };
    let name: &str = &artifact.name.name;
    let package: &str = &artifact.name.package;

    emit_doc_comment(writer, artifact.docs.as_deref(), "")?;
    writeln!(writer, "#[derive(Debug, Clone, PartialEq, serde::Serialize)]")?;
    if artifact.fields.is_empty() {
        writeln!(writer, "pub struct {name} {{}}")?;
    } else {
        writeln!(writer, "pub struct {name} {{")?;
        for field in &artifact.fields {
            emit_field_attrs(writer, field)?;
            if field.ty.is_nullable() {
                writeln!(
                    writer,
                    "    #[serde(skip_serializing_if = \"Option::is_none\")]"
                )?;
            }
            writeln!(writer, "    pub {}: {},", field.ident, field.ty)?;
        }
        writeln!(writer, "}}")?;
    }
    writeln!(writer)?;

    let params: Vec<String> = artifact
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.ident, f.ty))
        .collect();
    let idents: Vec<&str> = artifact.fields.iter().map(|f| f.ident.as_str()).collect();
    writeln!(writer, "impl {name} {{")?;
    writeln!(writer, "    #[must_use]")?;
    writeln!(writer, "    pub fn new({}) -> Self {{", params.join(", "))?;
    if idents.is_empty() {
        writeln!(writer, "        Self {{}}")?;
    } else {
        writeln!(writer, "        Self {{ {} }}", idents.join(", "))?;
    }
    writeln!(writer, "    }}")?;
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "impl {package}::Operation for {name} {{")?;
    writeln!(writer, "    type Output = {};", operation.result)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "    const KIND: {package}::OperationKind = {package}::OperationKind::{};",
        operation.kind.variant_name()
    )?;
    writeln!(
        writer,
        "    const FIELD_NAME: &'static str = \"{}\";",
        escape_for_rust_attr(&operation.field_name)
    )?;
    writeln!(writer, "}}")
}

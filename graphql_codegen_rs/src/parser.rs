//! Introspection document -> [`SchemaModel`].
//!
//! Parsing happens in three passes. The first registers every declared
//! type name, the second converts each definition while resolving its
//! references against the registry, and the third checks the
//! cross-definition invariants (interface implementers, root types) and
//! derives union memberships. Issues from all passes are collected and
//! reported together.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::{CodegenError, SchemaIssue, SchemaIssueKind, SchemaParseError};
use crate::introspection::{
    FullType, IntrospectionDocument, IntrospectionSchema, RawEnumValue, RawField, RawInputValue,
    RawTypeRef, RootTypeName, TypeKind,
};
use crate::model::{
    Deprecation, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
    ObjectType, ScalarType, SchemaModel, TypeDefinition, TypeRef, UnionType,
};

const INLINE_LOCATION: &str = "<inline>";

/// Where the schema document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Path(PathBuf),
    Inline(String),
}

impl SchemaSource {
    /// Human-readable origin used in diagnostics.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Inline(_) => INLINE_LOCATION.to_string(),
        }
    }

    /// Returns the raw document text.
    ///
    /// # Errors
    ///
    /// For file sources: `SchemaNotFound`, `SchemaNotAFile` or `SchemaUnreadable`.
    pub fn read(&self) -> Result<String, CodegenError> {
        match self {
            Self::Path(path) => read_schema_file(path),
            Self::Inline(content) => Ok(content.clone()),
        }
    }
}

pub(crate) fn check_schema_file(path: &Path) -> Result<(), CodegenError> {
    let metadata: std::fs::Metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CodegenError::SchemaNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(CodegenError::SchemaUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if metadata.is_file() {
        Ok(())
    } else {
        Err(CodegenError::SchemaNotAFile {
            path: path.to_path_buf(),
        })
    }
}

fn read_schema_file(path: &Path) -> Result<String, CodegenError> {
    check_schema_file(path)?;
    std::fs::read_to_string(path).map_err(|source| CodegenError::SchemaUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses a schema from any source.
///
/// # Errors
///
/// Returns the source's read error, or `CodegenError::SchemaParse`.
pub fn parse_source(source: &SchemaSource) -> Result<SchemaModel, CodegenError> {
    let content: String = source.read()?;
    Ok(parse_str(&content, &source.location())?)
}

/// Parses introspection JSON into a validated model.
///
/// # Errors
///
/// Returns `SchemaParseError` listing every issue found.
pub fn parse_str(content: &str, location: &str) -> Result<SchemaModel, SchemaParseError> {
    if content.trim().is_empty() {
        return Err(SchemaParseError::single(location, "", SchemaIssueKind::Empty));
    }

    let document: IntrospectionDocument = serde_json::from_str(content).map_err(|e| {
        SchemaParseError::single(
            location,
            "",
            SchemaIssueKind::Syntax {
                line: e.line(),
                column: e.column(),
                message: e.to_string(),
            },
        )
    })?;

    let Some(schema) = document.into_schema() else {
        return Err(SchemaParseError::single(
            location,
            "",
            SchemaIssueKind::MissingSchemaRoot,
        ));
    };

    Normalizer::default().run(schema, location)
}

/// Normalize description: trim and treat empty/whitespace as None.
fn normalize_description(s: Option<String>) -> Option<String> {
    s.and_then(|t| {
        let trimmed: &str = t.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn deprecation(is_deprecated: bool, reason: Option<String>) -> Option<Deprecation> {
    is_deprecated.then(|| Deprecation {
        reason: normalize_description(reason),
    })
}

/// Which positions a referenced type may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Output,
    Input,
}

#[derive(Default)]
struct Normalizer {
    kinds: IndexMap<String, TypeKind>,
    issues: Vec<SchemaIssue>,
}

impl Normalizer {
    fn push(&mut self, path: impl Into<String>, kind: SchemaIssueKind) {
        self.issues.push(SchemaIssue {
            path: path.into(),
            kind,
        });
    }

    fn run(
        mut self,
        schema: IntrospectionSchema,
        location: &str,
    ) -> Result<SchemaModel, SchemaParseError> {
        let IntrospectionSchema {
            query_type,
            mutation_type,
            subscription_type,
            types,
        } = schema;

        let entries: Vec<(String, FullType)> = self.register(types);

        let mut definitions: IndexMap<String, TypeDefinition> = IndexMap::new();
        for (name, full_type) in entries {
            if let Some(definition) = self.convert(&name, full_type) {
                definitions.insert(name, definition);
            }
        }

        self.check_implementers(&definitions);
        derive_union_memberships(&mut definitions);

        let query_type: Option<String> = match query_type {
            Some(root) => self.check_root("queryType", root),
            None => {
                self.push("", SchemaIssueKind::MissingQueryType);
                None
            }
        };
        let mutation_type: Option<String> =
            mutation_type.and_then(|root| self.check_root("mutationType", root));
        let subscription_type: Option<String> =
            subscription_type.and_then(|root| self.check_root("subscriptionType", root));

        match query_type {
            Some(query_type) if self.issues.is_empty() => Ok(SchemaModel::new(
                query_type,
                mutation_type,
                subscription_type,
                definitions,
            )),
            _ => Err(SchemaParseError {
                location: location.to_string(),
                issues: self.issues,
            }),
        }
    }

    /// First pass: record every named definition, dropping `__` meta types.
    fn register(&mut self, types: Vec<FullType>) -> Vec<(String, FullType)> {
        let mut entries: Vec<(String, FullType)> = Vec::with_capacity(types.len());
        for (index, full_type) in types.into_iter().enumerate() {
            let Some(name) = full_type.name.clone().filter(|n| !n.trim().is_empty()) else {
                self.push(format!("types[{index}]"), SchemaIssueKind::MissingTypeName);
                continue;
            };
            if name.starts_with("__") {
                continue;
            }
            if matches!(full_type.kind, TypeKind::List | TypeKind::NonNull) {
                self.push(
                    name.clone(),
                    SchemaIssueKind::WrongKind {
                        name,
                        expected: "a named type kind",
                    },
                );
                continue;
            }
            if self.kinds.contains_key(&name) {
                self.push(name.clone(), SchemaIssueKind::DuplicateType { name });
                continue;
            }
            self.kinds.insert(name.clone(), full_type.kind);
            entries.push((name, full_type));
        }
        entries
    }

    /// Second pass: convert one definition.
    fn convert(&mut self, name: &str, full_type: FullType) -> Option<TypeDefinition> {
        let description: Option<String> = normalize_description(full_type.description);
        let definition: TypeDefinition = match full_type.kind {
            TypeKind::Scalar => TypeDefinition::Scalar(ScalarType {
                name: name.to_string(),
                description,
            }),
            TypeKind::Object => {
                let fields: Vec<Field> = self.convert_fields(name, full_type.fields);
                let interfaces: Vec<String> = self.resolve_names(
                    name,
                    full_type.interfaces.unwrap_or_default(),
                    |kind| kind == TypeKind::Interface,
                    |name| SchemaIssueKind::WrongKind {
                        name,
                        expected: "an interface",
                    },
                );
                TypeDefinition::Object(ObjectType {
                    name: name.to_string(),
                    description,
                    fields,
                    interfaces,
                    unions: Vec::new(),
                })
            }
            TypeKind::Interface => {
                let fields: Vec<Field> = self.convert_fields(name, full_type.fields);
                let implementers: Vec<String> = self.resolve_names(
                    name,
                    full_type.possible_types.unwrap_or_default(),
                    |kind| kind == TypeKind::Object,
                    |name| SchemaIssueKind::ImplementerNotObject { name },
                );
                TypeDefinition::Interface(InterfaceType {
                    name: name.to_string(),
                    description,
                    fields,
                    implementers,
                })
            }
            TypeKind::Union => {
                let possible_types: Vec<String> = self.resolve_names(
                    name,
                    full_type.possible_types.unwrap_or_default(),
                    |kind| kind == TypeKind::Object,
                    |name| SchemaIssueKind::UnionMemberNotObject { name },
                );
                TypeDefinition::Union(UnionType {
                    name: name.to_string(),
                    description,
                    possible_types,
                })
            }
            TypeKind::Enum => TypeDefinition::Enum(EnumType {
                name: name.to_string(),
                description,
                values: full_type
                    .enum_values
                    .unwrap_or_default()
                    .into_iter()
                    .map(convert_enum_value)
                    .collect(),
            }),
            TypeKind::InputObject => {
                let fields: Vec<InputValue> = full_type
                    .input_fields
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|raw| {
                        let path: String = format!("{name}.{}", raw.name);
                        self.convert_input_value(&path, raw)
                    })
                    .collect();
                TypeDefinition::InputObject(InputObjectType {
                    name: name.to_string(),
                    description,
                    fields,
                })
            }
            TypeKind::List | TypeKind::NonNull => return None,
        };
        Some(definition)
    }

    fn convert_fields(&mut self, owner: &str, raw: Option<Vec<RawField>>) -> Vec<Field> {
        raw.unwrap_or_default()
            .into_iter()
            .filter_map(|field| self.convert_field(owner, field))
            .collect()
    }

    fn convert_field(&mut self, owner: &str, raw: RawField) -> Option<Field> {
        let path: String = format!("{owner}.{}", raw.name);
        let arguments: Vec<InputValue> = raw
            .args
            .into_iter()
            .filter_map(|arg| {
                let arg_path: String = format!("{path}({}:)", arg.name);
                self.convert_input_value(&arg_path, arg)
            })
            .collect();
        let ty: TypeRef = self.convert_type_ref(&path, &raw.r#type, Position::Output)?;
        Some(Field {
            name: raw.name,
            description: normalize_description(raw.description),
            ty,
            arguments,
            deprecation: deprecation(raw.is_deprecated, raw.deprecation_reason),
        })
    }

    fn convert_input_value(&mut self, path: &str, raw: RawInputValue) -> Option<InputValue> {
        let ty: TypeRef = self.convert_type_ref(path, &raw.r#type, Position::Input)?;
        Some(InputValue {
            name: raw.name,
            description: normalize_description(raw.description),
            ty,
            default_value: raw.default_value,
        })
    }

    /// Unwraps `LIST`/`NON_NULL` recursively and resolves the named type.
    fn convert_type_ref(
        &mut self,
        path: &str,
        raw: &RawTypeRef,
        position: Position,
    ) -> Option<TypeRef> {
        match raw.kind {
            TypeKind::NonNull => {
                let Some(inner) = raw.of_type.as_deref() else {
                    self.push(path, SchemaIssueKind::MissingOfType);
                    return None;
                };
                if inner.kind == TypeKind::NonNull {
                    self.push(path, SchemaIssueKind::NestedNonNull);
                    return None;
                }
                let inner: TypeRef = self.convert_type_ref(path, inner, position)?;
                Some(TypeRef::NonNull(Box::new(inner)))
            }
            TypeKind::List => {
                let Some(inner) = raw.of_type.as_deref() else {
                    self.push(path, SchemaIssueKind::MissingOfType);
                    return None;
                };
                let inner: TypeRef = self.convert_type_ref(path, inner, position)?;
                Some(TypeRef::List(Box::new(inner)))
            }
            _ => {
                let Some(name) = raw.name.as_deref() else {
                    self.push(path, SchemaIssueKind::MissingOfType);
                    return None;
                };
                let Some(kind) = self.kinds.get(name).copied() else {
                    self.push(
                        path,
                        SchemaIssueKind::DanglingReference {
                            name: name.to_string(),
                        },
                    );
                    return None;
                };
                let allowed: bool = match position {
                    Position::Output => kind != TypeKind::InputObject,
                    Position::Input => matches!(
                        kind,
                        TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject
                    ),
                };
                if !allowed {
                    let name: String = name.to_string();
                    let issue: SchemaIssueKind = match position {
                        Position::Output => SchemaIssueKind::InputInOutputPosition { name },
                        Position::Input => SchemaIssueKind::OutputInInputPosition { name },
                    };
                    self.push(path, issue);
                    return None;
                }
                Some(TypeRef::Named(name.to_string()))
            }
        }
    }

    /// Resolves a list of named references (interfaces, possible types),
    /// requiring each to exist and satisfy `accept`.
    fn resolve_names(
        &mut self,
        owner: &str,
        refs: Vec<RawTypeRef>,
        accept: impl Fn(TypeKind) -> bool,
        wrong_kind: impl Fn(String) -> SchemaIssueKind,
    ) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(refs.len());
        for raw in refs {
            let Some(name) = raw.name else {
                self.push(owner, SchemaIssueKind::MissingOfType);
                continue;
            };
            match self.kinds.get(&name).copied() {
                None => self.push(owner, SchemaIssueKind::DanglingReference { name }),
                Some(kind) if !accept(kind) => self.push(owner, wrong_kind(name)),
                Some(_) => {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
        }
        names
    }

    /// Interface `possibleTypes` and object `interfaces` must agree.
    fn check_implementers(&mut self, definitions: &IndexMap<String, TypeDefinition>) {
        let mut found: Vec<(String, SchemaIssueKind)> = Vec::new();
        for definition in definitions.values() {
            match definition {
                TypeDefinition::Interface(interface) => {
                    for implementer in &interface.implementers {
                        let declares: bool = matches!(
                            definitions.get(implementer),
                            Some(TypeDefinition::Object(o)) if o.interfaces.contains(&interface.name)
                        );
                        if !declares {
                            found.push((
                                interface.name.clone(),
                                SchemaIssueKind::ImplementerMissingInterface {
                                    implementer: implementer.clone(),
                                },
                            ));
                        }
                    }
                }
                TypeDefinition::Object(object) => {
                    for interface_name in &object.interfaces {
                        let listed: bool = matches!(
                            definitions.get(interface_name),
                            Some(TypeDefinition::Interface(i)) if i.implementers.contains(&object.name)
                        );
                        if !listed {
                            found.push((
                                object.name.clone(),
                                SchemaIssueKind::UndeclaredImplementer {
                                    interface: interface_name.clone(),
                                },
                            ));
                        }
                    }
                }
                _ => {}
            }
        }
        for (path, kind) in found {
            self.push(path, kind);
        }
    }

    fn check_root(&mut self, path: &str, root: RootTypeName) -> Option<String> {
        match self.kinds.get(&root.name).copied() {
            None => {
                self.push(path, SchemaIssueKind::DanglingReference { name: root.name });
                None
            }
            Some(TypeKind::Object) => Some(root.name),
            Some(_) => {
                self.push(path, SchemaIssueKind::RootTypeNotObject { name: root.name });
                None
            }
        }
    }
}

fn convert_enum_value(raw: RawEnumValue) -> EnumValue {
    EnumValue {
        name: raw.name,
        description: normalize_description(raw.description),
        deprecation: deprecation(raw.is_deprecated, raw.deprecation_reason),
    }
}

/// Fills `ObjectType::unions` from each union's possible types.
fn derive_union_memberships(definitions: &mut IndexMap<String, TypeDefinition>) {
    let memberships: Vec<(String, String)> = definitions
        .values()
        .filter_map(|d| match d {
            TypeDefinition::Union(u) => Some(u),
            _ => None,
        })
        .flat_map(|u| {
            u.possible_types
                .iter()
                .map(move |member| (member.clone(), u.name.clone()))
        })
        .collect();
    for (member, union_name) in memberships {
        if let Some(TypeDefinition::Object(object)) = definitions.get_mut(&member) {
            object.unions.push(union_name);
        }
    }
}

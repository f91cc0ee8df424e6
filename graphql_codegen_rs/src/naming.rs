//! Schema name -> artifact name transforms.
//!
//! Every function here is pure. Suffixing is idempotent: a name that
//! already ends with its suffix is returned unchanged, so
//! `query_name(&query_name(n)) == query_name(n)`.

use heck::{ToSnakeCase, ToUpperCamelCase};
use std::collections::BTreeMap;

use crate::error::CodegenError;

pub const DEFAULT_TYPE_SUFFIX: &str = "DTO";
pub const DEFAULT_INPUT_SUFFIX: &str = "Input";
pub const DEFAULT_QUERY_SUFFIX: &str = "Query";
pub const DEFAULT_MUTATION_SUFFIX: &str = "Mutation";
pub const PROJECTION_SUFFIX: &str = "Projection";

/// Words that must be written as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a trailing `_`.
const RESERVED_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// The four configurable suffixes, validated as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingSuffixes {
    type_suffix: String,
    input_suffix: String,
    query_suffix: String,
    mutation_suffix: String,
}

impl Default for NamingSuffixes {
    fn default() -> Self {
        Self {
            type_suffix: DEFAULT_TYPE_SUFFIX.to_string(),
            input_suffix: DEFAULT_INPUT_SUFFIX.to_string(),
            query_suffix: DEFAULT_QUERY_SUFFIX.to_string(),
            mutation_suffix: DEFAULT_MUTATION_SUFFIX.to_string(),
        }
    }
}

impl NamingSuffixes {
    /// Builds a custom bundle. Every suffix must be present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first absent suffix.
    pub fn new(
        type_suffix: Option<&str>,
        input_suffix: Option<&str>,
        query_suffix: Option<&str>,
        mutation_suffix: Option<&str>,
    ) -> Result<Self, CodegenError> {
        fn require(value: Option<&str>, label: &str) -> Result<String, CodegenError> {
            value
                .map(str::to_string)
                .ok_or_else(|| CodegenError::InvalidArgument(format!("{label} is required")))
        }
        Ok(Self {
            type_suffix: require(type_suffix, "type suffix")?,
            input_suffix: require(input_suffix, "input suffix")?,
            query_suffix: require(query_suffix, "query suffix")?,
            mutation_suffix: require(mutation_suffix, "mutation suffix")?,
        })
    }

    #[must_use]
    pub fn type_suffix(&self) -> &str {
        &self.type_suffix
    }

    #[must_use]
    pub fn input_suffix(&self) -> &str {
        &self.input_suffix
    }

    #[must_use]
    pub fn query_suffix(&self) -> &str {
        &self.query_suffix
    }

    #[must_use]
    pub fn mutation_suffix(&self) -> &str {
        &self.mutation_suffix
    }
}

/// Applies the naming rules with one suffix bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingConvention {
    suffixes: NamingSuffixes,
}

impl NamingConvention {
    #[must_use]
    pub const fn new(suffixes: NamingSuffixes) -> Self {
        Self { suffixes }
    }

    #[must_use]
    pub const fn suffixes(&self) -> &NamingSuffixes {
        &self.suffixes
    }

    /// Object type -> data-holder name, e.g. `User` -> `UserDTO`.
    #[must_use]
    pub fn type_name(&self, raw: &str) -> String {
        with_suffix(raw, &self.suffixes.type_suffix)
    }

    #[must_use]
    pub fn input_type_name(&self, raw: &str) -> String {
        with_suffix(raw, &self.suffixes.input_suffix)
    }

    #[must_use]
    pub fn query_name(&self, raw: &str) -> String {
        with_suffix(raw, &self.suffixes.query_suffix)
    }

    #[must_use]
    pub fn mutation_name(&self, raw: &str) -> String {
        with_suffix(raw, &self.suffixes.mutation_suffix)
    }

    #[must_use]
    pub fn enum_name(&self, raw: &str) -> String {
        capitalize(raw)
    }

    #[must_use]
    pub fn interface_name(&self, raw: &str) -> String {
        capitalize(raw)
    }

    #[must_use]
    pub fn union_name(&self, raw: &str) -> String {
        capitalize(raw)
    }

    /// Always appends `Projection`, even when already present.
    #[must_use]
    pub fn projection_name(&self, raw: &str) -> String {
        format!("{raw}{PROJECTION_SUFFIX}")
    }
}

fn with_suffix(raw: &str, suffix: &str) -> String {
    if !suffix.is_empty() && raw.ends_with(suffix) {
        raw.to_string()
    } else {
        format!("{raw}{suffix}")
    }
}

/// Uppercases the first character only.
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Schema field/argument name -> Rust field identifier.
///
/// `homePlanet` -> `home_planet`, `type` -> `r#type`, `self` -> `self_`.
#[must_use]
pub fn field_ident(raw: &str) -> String {
    let mut ident: String = raw.to_snake_case();
    if ident.is_empty() {
        ident = "field".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    escape_keyword(ident)
}

fn escape_keyword(ident: String) -> String {
    if RESERVED_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Field identifier without any `r#` prefix, e.g. for method-name prefixes.
#[must_use]
pub fn bare_ident(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Artifact name -> file stem, e.g. `UserDTO` -> `user_dto`.
#[must_use]
pub fn file_stem(artifact_name: &str) -> String {
    let stem: String = artifact_name.to_snake_case();
    if RAW_KEYWORDS.contains(&stem.as_str()) || RESERVED_KEYWORDS.contains(&stem.as_str()) {
        format!("{stem}_")
    } else {
        stem
    }
}

/// Enum value -> Rust variant identifier (`UpperCamelCase`).
/// Prefixes with `V` if the result is empty or starts with a digit.
fn variant_ident(raw: &str) -> String {
    let base: String = raw.to_upper_camel_case();
    if base.is_empty() || base.starts_with(|c: char| c.is_ascii_digit()) {
        format!("V{base}")
    } else if base == "Self" {
        "Self_".to_string()
    } else {
        base
    }
}

/// Variant identifiers for a whole enum, in declaration order.
///
/// Values whose identifiers collide get `_0`, `_1`, ... suffixes.
#[must_use]
pub fn variant_idents<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let base_names: Vec<String> = values.into_iter().map(variant_ident).collect();
    let mut name_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for base in &base_names {
        *name_counts.entry(base.as_str()).or_insert(0) += 1;
    }

    let mut name_indices: BTreeMap<&str, usize> = BTreeMap::new();
    let mut result: Vec<String> = Vec::with_capacity(base_names.len());
    for base in &base_names {
        if name_counts.get(base.as_str()).copied().unwrap_or(0) > 1 {
            let idx: &mut usize = name_indices.entry(base.as_str()).or_insert(0);
            result.push(format!("{base}_{idx}"));
            *idx += 1;
        } else {
            result.push(base.clone());
        }
    }
    result
}

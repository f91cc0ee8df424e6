//! Settings for a code generation run.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::CodegenError;
use crate::naming::{NamingConvention, NamingSuffixes};

/// Matches `crate::generated`, `my_api`, `super::types`, ...
const MODULE_PATH_PATTERN: &str =
    r"^(?:crate|self|super|[A-Za-z_][A-Za-z0-9_]*)(?:::[A-Za-z_][A-Za-z0-9_]*)*$";

/// Optional suffix overrides as they appear in a config file.
///
/// Either all four are given or none; see [`NamingSuffixes::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    #[serde(default)]
    pub type_suffix: Option<String>,

    #[serde(default)]
    pub input_suffix: Option<String>,

    #[serde(default)]
    pub query_suffix: Option<String>,

    #[serde(default)]
    pub mutation_suffix: Option<String>,
}

impl NamingConfig {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any suffix is absent.
    pub fn to_suffixes(&self) -> Result<NamingSuffixes, CodegenError> {
        NamingSuffixes::new(
            self.type_suffix.as_deref(),
            self.input_suffix.as_deref(),
            self.query_suffix.as_deref(),
            self.mutation_suffix.as_deref(),
        )
    }
}

/// Everything the controller needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Introspection JSON to read.
    pub schema_path: PathBuf,

    /// Directory that receives the generated module tree and the hash marker.
    ///
    /// The generator owns only files that start with its header line. Stale
    /// generated files in the partition directories are deleted; anything
    /// else is left in place, and a run that would overwrite such a file
    /// fails with `UnownedFile` before touching the directory.
    pub output_dir: PathBuf,

    /// Rust module path the output directory is mounted at, e.g. `crate::api`.
    pub package: String,

    /// When true, an unchanged schema and configuration skip generation.
    ///
    /// **Default: true.**
    #[serde(default = "default_skip_if_up_to_date")]
    pub skip_if_up_to_date: bool,

    /// Scalar name -> Rust type, consulted before the built-in table.
    #[serde(default)]
    pub custom_scalars: BTreeMap<String, String>,

    #[serde(default)]
    pub naming: Option<NamingConfig>,
}

const fn default_skip_if_up_to_date() -> bool {
    true
}

impl CodegenConfig {
    #[must_use]
    pub fn new(
        schema_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_dir: output_dir.into(),
            package: package.into(),
            skip_if_up_to_date: true,
            custom_scalars: BTreeMap::new(),
            naming: None,
        }
    }

    /// Loads a config from a JSON file. Relative paths stay relative to the
    /// process working directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let path: &Path = path.as_ref();
        let content: String = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| CodegenError::InvalidConfig(format!("{}: {e}", path.display())))
    }

    /// The naming convention in effect, validating any custom bundle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a custom bundle is incomplete.
    pub fn naming_convention(&self) -> Result<NamingConvention, CodegenError> {
        let suffixes: NamingSuffixes = match &self.naming {
            Some(naming) => naming.to_suffixes()?,
            None => NamingSuffixes::default(),
        };
        Ok(NamingConvention::new(suffixes))
    }

    /// Checks everything that does not require reading the schema.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty output directory, a malformed
    /// package path or a blank scalar mapping, and `InvalidArgument` for an
    /// incomplete naming bundle.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(CodegenError::InvalidConfig(
                "output directory is required".to_string(),
            ));
        }
        if self.package.trim().is_empty() {
            return Err(CodegenError::InvalidConfig(
                "target package is required".to_string(),
            ));
        }
        if !is_module_path(&self.package)? {
            return Err(CodegenError::InvalidConfig(format!(
                "`{}` is not a Rust module path",
                self.package
            )));
        }
        for (scalar, target) in &self.custom_scalars {
            if scalar.trim().is_empty() || target.trim().is_empty() || target.contains('\n') {
                return Err(CodegenError::InvalidConfig(format!(
                    "custom scalar mapping `{scalar}` -> `{target}` is blank or malformed"
                )));
            }
        }
        self.naming_convention()?;
        Ok(())
    }
}

fn is_module_path(candidate: &str) -> Result<bool, CodegenError> {
    let pattern: regress::Regex = regress::Regex::new(MODULE_PATH_PATTERN).map_err(|e| {
        CodegenError::Generation {
            message: format!("module path pattern: {e}"),
        }
    })?;
    Ok(pattern.find(candidate).is_some())
}

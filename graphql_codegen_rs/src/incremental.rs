//! Generate-or-skip controller.
//!
//! A run is skipped when the digest of the schema bytes plus every
//! output-affecting setting matches the marker left by the last successful
//! run. The marker is removed before any artifact is written and only
//! restored after the last one, so a failed run always forces the next
//! run to regenerate.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::codegen::GeneratorSet;
use crate::emit::{Emitter, RustEmitter};
use crate::error::CodegenError;
use crate::ir::{Artifact, Partition};
use crate::model::SchemaModel;
use crate::naming::NamingConvention;
use crate::parser::{check_schema_file, parse_str};
use crate::settings::CodegenConfig;
use crate::type_mapper::{ScalarRegistry, TypeMapper};

/// Name of the hash marker inside the output directory.
pub const MARKER_FILE: &str = ".graphql-codegen.hash";

const MARKER_TMP_FILE: &str = ".graphql-codegen.hash.tmp";

const ROOT_MODULE_FILE: &str = "mod.rs";

/// Correlates every log event of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub run_id: Uuid,
}

impl RunContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Generated,
    Skipped,
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => f.write_str("generated"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

/// Outcome of one [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub status: GenerationStatus,
    /// Artifacts written by this run; zero when skipped.
    pub artifact_count: usize,
    /// Hex digest now recorded in the marker.
    pub digest: String,
    pub run_id: Uuid,
}

/// Runs the controller with the Rust emitter.
///
/// # Errors
///
/// Configuration, schema, mapping and write failures, each as its own
/// [`CodegenError`] variant. No marker is left behind on failure.
pub fn generate(config: &CodegenConfig) -> Result<GenerationResult, CodegenError> {
    generate_with_emitter(config, &RustEmitter)
}

/// Runs the controller with a caller-supplied text backend.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with_emitter(
    config: &CodegenConfig,
    emitter: &dyn Emitter,
) -> Result<GenerationResult, CodegenError> {
    let ctx: RunContext = RunContext::new();
    let span = info_span!("codegen_run", run_id = %ctx.run_id);
    let _guard = span.enter();

    config.validate()?;
    check_schema_file(&config.schema_path)?;
    let content: String = fs::read_to_string(&config.schema_path).map_err(|source| {
        CodegenError::SchemaUnreadable {
            path: config.schema_path.clone(),
            source,
        }
    })?;
    let model: SchemaModel = parse_str(&content, &config.schema_path.display().to_string())?;
    let naming: NamingConvention = config.naming_convention()?;
    let digest: String = compute_digest(content.as_bytes(), config, &naming);

    let marker: PathBuf = config.output_dir.join(MARKER_FILE);
    if config.skip_if_up_to_date && read_marker(&marker)?.as_deref() == Some(digest.as_str()) {
        info!(status = %GenerationStatus::Skipped, %digest, "output is up to date");
        return Ok(GenerationResult {
            status: GenerationStatus::Skipped,
            artifact_count: 0,
            digest,
            run_id: ctx.run_id,
        });
    }

    let scalars: ScalarRegistry = ScalarRegistry::new(config.custom_scalars.clone());
    let mapper: TypeMapper<'_> = TypeMapper::new(&model, &naming, &scalars, &config.package);
    let artifacts: Vec<Artifact> = GeneratorSet::new(mapper).generate_all(&model, &ctx)?;

    check_ownership(&config.output_dir, &artifacts, emitter.generated_header())?;
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| CodegenError::io(&config.output_dir, e))?;
    remove_marker(&marker)?;
    write_output(&config.output_dir, &artifacts, emitter)?;
    write_marker(&config.output_dir, &digest)?;

    info!(
        status = %GenerationStatus::Generated,
        artifacts = artifacts.len(),
        %digest,
        "generation finished"
    );
    Ok(GenerationResult {
        status: GenerationStatus::Generated,
        artifact_count: artifacts.len(),
        digest,
        run_id: ctx.run_id,
    })
}

/// BLAKE3 over the crate version, the schema bytes and the settings that
/// change generated text. Every component is length-prefixed.
#[must_use]
pub fn compute_digest(schema: &[u8], config: &CodegenConfig, naming: &NamingConvention) -> String {
    let mut hasher = blake3::Hasher::new();
    update_framed(&mut hasher, env!("CARGO_PKG_VERSION").as_bytes());
    update_framed(&mut hasher, schema);
    update_framed(&mut hasher, config.package.as_bytes());

    hasher.update(&frame_len(config.custom_scalars.len()));
    for (scalar, target) in &config.custom_scalars {
        update_framed(&mut hasher, scalar.as_bytes());
        update_framed(&mut hasher, target.trim().as_bytes());
    }

    let suffixes = naming.suffixes();
    for suffix in [
        suffixes.type_suffix(),
        suffixes.input_suffix(),
        suffixes.query_suffix(),
        suffixes.mutation_suffix(),
    ] {
        update_framed(&mut hasher, suffix.as_bytes());
    }

    hasher.finalize().to_hex().to_string()
}

fn frame_len(len: usize) -> [u8; 8] {
    u64::try_from(len).unwrap_or(u64::MAX).to_le_bytes()
}

fn update_framed(hasher: &mut blake3::Hasher, bytes: &[u8]) {
    hasher.update(&frame_len(bytes.len()));
    hasher.update(bytes);
}

/// Digest recorded by the last successful run, if any.
fn read_marker(marker: &Path) -> Result<Option<String>, CodegenError> {
    match fs::read_to_string(marker) {
        Ok(content) => Ok(Some(content.trim().to_string())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CodegenError::io(marker, e)),
    }
}

fn remove_marker(marker: &Path) -> Result<(), CodegenError> {
    match fs::remove_file(marker) {
        Ok(()) => {
            warn!(marker = %marker.display(), "removed stale hash marker");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CodegenError::io(marker, e)),
    }
}

/// Temp file plus rename, so a marker is either absent or complete.
fn write_marker(output_dir: &Path, digest: &str) -> Result<(), CodegenError> {
    let tmp: PathBuf = output_dir.join(MARKER_TMP_FILE);
    let marker: PathBuf = output_dir.join(MARKER_FILE);
    fs::write(&tmp, format!("{digest}\n")).map_err(|e| CodegenError::io(&tmp, e))?;
    fs::rename(&tmp, &marker).map_err(|e| CodegenError::io(&marker, e))
}

/// Whether `path` starts with `header`. Missing files are not generated.
fn is_generated(path: &Path, header: &str) -> Result<bool, CodegenError> {
    match fs::read(path) {
        Ok(content) => Ok(content.starts_with(header.as_bytes())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CodegenError::io(path, e)),
    }
}

/// Every file this run would replace must be absent or generated.
fn check_ownership(
    output_dir: &Path,
    artifacts: &[Artifact],
    header: &str,
) -> Result<(), CodegenError> {
    let indexes = Partition::ALL
        .iter()
        .map(|partition| output_dir.join(partition.module_name()).join(ROOT_MODULE_FILE));
    let sources = artifacts
        .iter()
        .map(|artifact| output_dir.join(artifact.relative_path()));
    for path in std::iter::once(output_dir.join(ROOT_MODULE_FILE))
        .chain(indexes)
        .chain(sources)
    {
        if path.exists() && !is_generated(&path, header)? {
            return Err(CodegenError::UnownedFile { path });
        }
    }
    Ok(())
}

/// Deletes the generated files directly inside `dir`, then `dir` itself if
/// nothing else is left.
fn clear_generated(dir: &Path, header: &str) -> Result<(), CodegenError> {
    let entries = fs::read_dir(dir).map_err(|e| CodegenError::io(dir, e))?;
    for entry in entries {
        let path: PathBuf = entry.map_err(|e| CodegenError::io(dir, e))?.path();
        if path.is_file() && is_generated(&path, header)? {
            fs::remove_file(&path).map_err(|e| CodegenError::io(&path, e))?;
        }
    }
    let mut remaining = fs::read_dir(dir).map_err(|e| CodegenError::io(dir, e))?;
    if remaining.next().is_none() {
        fs::remove_dir(dir).map_err(|e| CodegenError::io(dir, e))?;
    } else {
        debug!(dir = %dir.display(), "kept files the generator does not own");
    }
    Ok(())
}

/// Rewrites every partition directory and the root module. Only files that
/// carry the emitter's header are deleted.
fn write_output(
    output_dir: &Path,
    artifacts: &[Artifact],
    emitter: &dyn Emitter,
) -> Result<(), CodegenError> {
    let header: &str = emitter.generated_header();
    let mut by_partition: IndexMap<Partition, Vec<&Artifact>> = Partition::ALL
        .iter()
        .map(|partition| (*partition, Vec::new()))
        .collect();
    for artifact in artifacts {
        by_partition
            .entry(artifact.name.partition)
            .or_default()
            .push(artifact);
    }

    let mut declared: Vec<Partition> = Vec::new();
    for (partition, members) in &by_partition {
        let dir: PathBuf = output_dir.join(partition.module_name());
        if dir.is_dir() {
            clear_generated(&dir, header)?;
        }
        if members.is_empty() {
            continue;
        }
        fs::create_dir_all(&dir).map_err(|e| CodegenError::io(&dir, e))?;
        for artifact in members {
            let path: PathBuf = output_dir.join(artifact.relative_path());
            write_file(&path, |w| emitter.emit_artifact(artifact, w))?;
        }
        write_file(&dir.join(ROOT_MODULE_FILE), |w| {
            emitter.emit_partition_index(members, w)
        })?;
        debug!(partition = partition.module_name(), files = members.len(), "partition written");
        declared.push(*partition);
    }

    write_file(&output_dir.join(ROOT_MODULE_FILE), |w| {
        emitter.emit_root_module(&declared, w)
    })
}

fn write_file(
    path: &Path,
    render: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> Result<(), CodegenError> {
    let file: File = File::create(path).map_err(|e| CodegenError::io(path, e))?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    render(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| CodegenError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingSuffixes;
    use tempfile::TempDir;

    const SCHEMA: &[u8] = br#"{"__schema": {"queryType": {"name": "Query"}, "types": []}}"#;

    fn config() -> CodegenConfig {
        CodegenConfig::new("schema.json", "out", "crate::api")
    }

    #[test]
    fn digest_is_stable_for_identical_input() {
        let naming = NamingConvention::default();
        let first: String = compute_digest(SCHEMA, &config(), &naming);
        let second: String = compute_digest(SCHEMA, &config(), &naming);
        assert_eq!(first, second);
        assert_eq!(64, first.len(), "hex-encoded 32-byte digest");
    }

    #[test]
    fn digest_covers_schema_and_output_settings() {
        let naming = NamingConvention::default();
        let base: String = compute_digest(SCHEMA, &config(), &naming);

        let mut changed_schema: Vec<u8> = SCHEMA.to_vec();
        changed_schema.push(b'\n');
        assert_ne!(base, compute_digest(&changed_schema, &config(), &naming));

        let mut package = config();
        package.package = "crate::other".to_string();
        assert_ne!(base, compute_digest(SCHEMA, &package, &naming));

        let mut scalars = config();
        scalars
            .custom_scalars
            .insert("Money".to_string(), "rust_decimal::Decimal".to_string());
        assert_ne!(base, compute_digest(SCHEMA, &scalars, &naming));

        let suffixes = NamingSuffixes::new(Some("Dto"), Some("Input"), Some("Query"), Some("Mutation"))
            .expect("complete bundle");
        let renamed = NamingConvention::new(suffixes);
        assert_ne!(base, compute_digest(SCHEMA, &config(), &renamed));
    }

    #[test]
    fn skip_flag_does_not_affect_digest() {
        let naming = NamingConvention::default();
        let mut no_skip = config();
        no_skip.skip_if_up_to_date = false;
        assert_eq!(
            compute_digest(SCHEMA, &config(), &naming),
            compute_digest(SCHEMA, &no_skip, &naming)
        );
    }

    #[test]
    fn marker_round_trips_through_temp_file() {
        let dir: TempDir = TempDir::new().expect("temp dir");
        assert_eq!(None, read_marker(&dir.path().join(MARKER_FILE)).expect("readable"));

        write_marker(dir.path(), "abc123").expect("write marker");
        assert_eq!(
            Some("abc123".to_string()),
            read_marker(&dir.path().join(MARKER_FILE)).expect("readable")
        );
        assert!(!dir.path().join(MARKER_TMP_FILE).exists());

        remove_marker(&dir.path().join(MARKER_FILE)).expect("remove marker");
        remove_marker(&dir.path().join(MARKER_FILE)).expect("removing twice is fine");
        assert!(!dir.path().join(MARKER_FILE).exists());
    }
}

//! Command-line front end for the generator.
//!
//! Usage: `gqlcodegen --schema schema.json --out src/api --package crate::api`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use graphql_codegen_rs::{CodegenConfig, CodegenError, NamingConfig, generate};

/// Generate typed Rust modules from a GraphQL introspection schema
#[derive(Parser, Debug)]
#[command(name = "gqlcodegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Introspection JSON to read
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Directory that receives the generated modules
    #[arg(long)]
    out: Option<PathBuf>,

    /// Module path the output directory is mounted at (e.g. "crate::api")
    #[arg(long)]
    package: Option<String>,

    /// Regenerate even if schema and settings are unchanged
    #[arg(long)]
    no_skip: bool,

    /// Custom scalar mapping, repeatable (e.g. "Money=rust_decimal::Decimal")
    #[arg(long = "scalar", value_name = "NAME=TYPE", value_parser = parse_scalar)]
    scalars: Vec<(String, String)>,

    #[arg(long)]
    type_suffix: Option<String>,

    #[arg(long)]
    input_suffix: Option<String>,

    #[arg(long)]
    query_suffix: Option<String>,

    #[arg(long)]
    mutation_suffix: Option<String>,
}

fn parse_scalar(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, rust_type)) if !name.trim().is_empty() && !rust_type.trim().is_empty() => {
            Ok((name.trim().to_string(), rust_type.trim().to_string()))
        }
        _ => Err(format!("expected NAME=TYPE, got `{raw}`")),
    }
}

impl Cli {
    fn into_config(self) -> Result<CodegenConfig, CodegenError> {
        let mut config: CodegenConfig = match &self.config {
            Some(path) => CodegenConfig::from_json_file(path)?,
            None => {
                let missing = |flag: &str| CodegenError::InvalidConfig(format!("--{flag} is required"));
                CodegenConfig::new(
                    self.schema.clone().ok_or_else(|| missing("schema"))?,
                    self.out.clone().ok_or_else(|| missing("out"))?,
                    self.package.clone().ok_or_else(|| missing("package"))?,
                )
            }
        };
        if let Some(schema) = self.schema {
            config.schema_path = schema;
        }
        if let Some(out) = self.out {
            config.output_dir = out;
        }
        if let Some(package) = self.package {
            config.package = package;
        }
        if self.no_skip {
            config.skip_if_up_to_date = false;
        }
        config.custom_scalars.extend(self.scalars);

        let suffixes: [&Option<String>; 4] = [
            &self.type_suffix,
            &self.input_suffix,
            &self.query_suffix,
            &self.mutation_suffix,
        ];
        if suffixes.iter().any(|s| s.is_some()) {
            config.naming = Some(NamingConfig {
                type_suffix: self.type_suffix,
                input_suffix: self.input_suffix,
                query_suffix: self.query_suffix,
                mutation_suffix: self.mutation_suffix,
            });
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Cli::parse().into_config().and_then(|config| generate(&config));
    match result {
        Ok(result) => {
            println!(
                "{}: {} artifact(s), digest {}",
                result.status, result.artifact_count, result.digest
            );
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

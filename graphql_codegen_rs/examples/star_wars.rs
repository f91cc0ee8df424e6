//! Generates the module tree for a small Star Wars schema into a temporary
//! directory, runs a second time to show the skip, and prints one artifact.
//!
//! Contains only the input schema and the driver; see the crate README for
//! the shape of every generated artifact.

use std::fs;
use std::path::PathBuf;

use graphql_codegen_rs::{CodegenConfig, CodegenError, generate};

const SCHEMA_JSON: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Query" },
      "mutationType": { "name": "Mutation" },
      "types": [
        { "kind": "SCALAR", "name": "ID" },
        { "kind": "SCALAR", "name": "String" },
        { "kind": "SCALAR", "name": "Int" },
        {
          "kind": "OBJECT", "name": "Query",
          "fields": [
            { "name": "hero", "args": [
                { "name": "episode", "type": { "kind": "ENUM", "name": "Episode" } }
              ],
              "type": { "kind": "INTERFACE", "name": "Character" } }
          ]
        },
        {
          "kind": "OBJECT", "name": "Mutation",
          "fields": [
            { "name": "createReview", "args": [
                { "name": "review", "type": { "kind": "NON_NULL", "ofType": { "kind": "INPUT_OBJECT", "name": "ReviewInput" } } }
              ],
              "type": { "kind": "OBJECT", "name": "Review" } }
          ]
        },
        {
          "kind": "INTERFACE", "name": "Character", "description": "A character in the saga.",
          "fields": [
            { "name": "id", "args": [], "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "ID" } } },
            { "name": "name", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
          ],
          "possibleTypes": [ { "kind": "OBJECT", "name": "Human" }, { "kind": "OBJECT", "name": "Droid" } ]
        },
        {
          "kind": "OBJECT", "name": "Human",
          "fields": [
            { "name": "id", "args": [], "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "ID" } } },
            { "name": "name", "args": [], "type": { "kind": "SCALAR", "name": "String" } },
            { "name": "homePlanet", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
          ],
          "interfaces": [ { "kind": "INTERFACE", "name": "Character" } ]
        },
        {
          "kind": "OBJECT", "name": "Droid",
          "fields": [
            { "name": "id", "args": [], "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "ID" } } },
            { "name": "name", "args": [], "type": { "kind": "SCALAR", "name": "String" } },
            { "name": "primaryFunction", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
          ],
          "interfaces": [ { "kind": "INTERFACE", "name": "Character" } ]
        },
        {
          "kind": "OBJECT", "name": "Review",
          "fields": [
            { "name": "stars", "args": [], "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "Int" } } },
            { "name": "commentary", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
          ]
        },
        {
          "kind": "ENUM", "name": "Episode",
          "enumValues": [ { "name": "NEWHOPE" }, { "name": "EMPIRE" }, { "name": "JEDI" } ]
        },
        {
          "kind": "INPUT_OBJECT", "name": "ReviewInput",
          "inputFields": [
            { "name": "stars", "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "Int" } } },
            { "name": "commentary", "type": { "kind": "SCALAR", "name": "String" } }
          ]
        }
      ]
    }
  }
}"#;

fn main() -> Result<(), CodegenError> {
    let root: PathBuf = std::env::temp_dir().join("graphql-codegen-star-wars");
    let schema_path: PathBuf = root.join("schema.json");
    let output_dir: PathBuf = root.join("api");
    fs::create_dir_all(&root).map_err(|source| CodegenError::Io {
        path: root.clone(),
        source,
    })?;
    fs::write(&schema_path, SCHEMA_JSON).map_err(|source| CodegenError::Io {
        path: schema_path.clone(),
        source,
    })?;

    let config = CodegenConfig::new(&schema_path, &output_dir, "crate::api");
    for run in 1..=2 {
        let result = generate(&config)?;
        println!(
            "run {run}: {} ({} artifacts, digest {})",
            result.status, result.artifact_count, result.digest
        );
    }

    let character: PathBuf = output_dir.join("interfaces").join("character.rs");
    let source: String = fs::read_to_string(&character).map_err(|source| CodegenError::Io {
        path: character.clone(),
        source,
    })?;
    println!("\n{}:\n{source}", character.display());
    Ok(())
}

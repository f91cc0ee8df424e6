//! The generated tree for `tests/fixtures/star_wars.json` is checked in under
//! `tests/fixtures/api` and compiled into this test crate. The first test
//! keeps it identical to what the generator writes today; the rest use it.

use std::fs;
use std::path::{Path, PathBuf};

use graphql_codegen_rs::{CodegenConfig, GenerationStatus, generate};
use serde_json::json;
use tempfile::TempDir;

#[expect(dead_code, reason = "generated accessors not every test calls")]
#[path = "fixtures/api/mod.rs"]
mod api;

use api::enums::Episode;
use api::inputs::{ReviewInput, ReviewInputBuilder};
use api::interfaces::Character;
use api::mutations::CreateReviewMutation;
use api::queries::{HeroQuery, RelayQuery, SearchQuery};
use api::types::{DroidDTO, HumanDTO, QueryDTO, ReviewDTO};
use api::unions::SearchResult;
use api::{Operation, OperationKind, RequiredFieldMissing};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn rust_sources(dir: &Path) -> Vec<(PathBuf, String)> {
    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).expect("readable dir") {
            let path: PathBuf = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let content: String = fs::read_to_string(&path).expect("readable file");
                files.push((path.strip_prefix(dir).expect("inside").to_path_buf(), content));
            }
        }
    }
    files.sort();
    files
}

fn luke() -> HumanDTO {
    HumanDTO {
        id: "1000".to_string(),
        name: "Luke Skywalker".to_string(),
        best_friend: None,
        home_planet: Some("Tatooine".to_string()),
    }
}

#[test]
fn checked_in_tree_matches_generator_output() {
    let dir: TempDir = TempDir::new().expect("temp dir");
    let out: PathBuf = dir.path().join("api");
    let config = CodegenConfig::new(fixtures().join("star_wars.json"), &out, "crate::api");

    let result = generate(&config).expect("generates");

    assert_eq!(GenerationStatus::Generated, result.status);
    let actual: Vec<(PathBuf, String)> = rust_sources(&out);
    let expected: Vec<(PathBuf, String)> = rust_sources(&fixtures().join("api"));
    let actual_paths: Vec<&PathBuf> = actual.iter().map(|(path, _)| path).collect();
    let expected_paths: Vec<&PathBuf> = expected.iter().map(|(path, _)| path).collect();
    assert_eq!(expected_paths, actual_paths);
    for ((path, expected), (_, actual)) in expected.iter().zip(&actual) {
        assert_eq!(expected, actual, "{} differs", path.display());
    }
}

#[test]
fn builder_names_the_missing_required_field() {
    let builder: ReviewInputBuilder = ReviewInput::builder().commentary("Loved it".to_string());

    let err: RequiredFieldMissing = builder.build().expect_err("stars is required");

    assert_eq!("ReviewInput", err.type_name());
    assert_eq!("stars", err.field());
    assert_eq!("required field `ReviewInput.stars` was not set", err.to_string());
}

#[test]
fn built_input_keeps_every_value() {
    let review: ReviewInput = ReviewInput::builder()
        .stars(5)
        .build()
        .expect("all required fields set");

    assert_eq!(&5, review.stars());
    assert_eq!(&None, review.commentary());
    assert_eq!(json!({"stars": 5}), serde_json::to_value(&review).expect("serializes"));
}

#[test]
fn mutation_serializes_to_its_arguments() {
    let review: ReviewInput = ReviewInput::builder()
        .stars(4)
        .commentary("Loved it".to_string())
        .build()
        .expect("all required fields set");
    let mutation = CreateReviewMutation::new(Episode::Empire, review);

    let actual = serde_json::to_value(&mutation).expect("serializes");

    let expected = json!({
        "episode": "EMPIRE",
        "review": {"stars": 4, "commentary": "Loved it"}
    });
    assert_eq!(expected, actual);
    assert_eq!(OperationKind::Mutation, CreateReviewMutation::KIND);
    assert_eq!("createReview", CreateReviewMutation::FIELD_NAME);
}

#[test]
fn absent_optional_argument_is_not_sent() {
    let hero = HeroQuery::new(None);
    let search = SearchQuery::new("sky".to_string());

    assert_eq!(json!({}), serde_json::to_value(&hero).expect("serializes"));
    assert_eq!(json!({"text": "sky"}), serde_json::to_value(&search).expect("serializes"));
    assert_eq!(
        json!({"episode": "JEDI"}),
        serde_json::to_value(HeroQuery::new(Some(Episode::Jedi))).expect("serializes")
    );
    assert_eq!(OperationKind::Query, HeroQuery::KIND);
    assert_eq!("hero", HeroQuery::FIELD_NAME);
}

#[test]
fn interface_result_deserializes_by_typename() {
    let data = json!({
        "__typename": "Human",
        "id": "1000",
        "name": "Luke Skywalker",
        "bestFriend": {
            "__typename": "Droid",
            "id": null,
            "name": "R2-D2",
            "bestFriend": null,
            "primaryFunction": "Astromech"
        },
        "homePlanet": "Tatooine"
    });

    let hero: <HeroQuery as Operation>::Output = serde_json::from_value(data).expect("deserializes");

    let hero: Character = hero.expect("hero present");
    assert_eq!(Some(&"1000".to_string()), hero.id());
    assert_eq!("Luke Skywalker", hero.name());
    let friend: &Character = hero.best_friend().as_deref().expect("has a best friend");
    assert_eq!(None, friend.id());
    assert_eq!("R2-D2", friend.name());
    let Character::Droid(droid) = friend else {
        panic!("expected a droid, got {friend:?}");
    };
    assert_eq!(&Some("Astromech".to_string()), droid.primary_function());
    assert_eq!(&["Human", "Droid"], Character::PERMITTED);
}

#[test]
fn data_holders_convert_into_their_hierarchies() {
    let character: Character = luke().into();
    let result: SearchResult = luke().into();

    assert_eq!(Character::Human(luke()), character);
    assert_eq!(SearchResult::Human(luke()), result);
    assert_eq!(
        json!({
            "__typename": "Human",
            "id": "1000",
            "name": "Luke Skywalker",
            "bestFriend": null,
            "homePlanet": "Tatooine"
        }),
        serde_json::to_value(&result).expect("serializes")
    );
    assert_eq!(&["Human", "Droid"], SearchResult::PERMITTED);
}

#[test]
fn union_list_result_deserializes_each_member() {
    let data = json!([
        {"__typename": "Droid", "id": "2001", "name": "R2-D2", "bestFriend": null, "primaryFunction": null},
        {"__typename": "Human", "id": "1000", "name": "Luke Skywalker", "bestFriend": null, "homePlanet": "Tatooine"}
    ]);

    let results: <SearchQuery as Operation>::Output =
        serde_json::from_value(data).expect("deserializes");

    let droid = DroidDTO {
        id: Some("2001".to_string()),
        name: "R2-D2".to_string(),
        best_friend: None,
        primary_function: None,
    };
    assert_eq!(vec![SearchResult::Droid(droid), SearchResult::Human(luke())], results);
}

#[test]
fn mutation_result_is_the_review_type() {
    let data = json!({"stars": 3, "commentary": null});

    let review: <CreateReviewMutation as Operation>::Output =
        serde_json::from_value(data).expect("deserializes");

    let review: ReviewDTO = review.expect("review present");
    assert_eq!(&3, review.stars());
    assert_eq!(&None, review.commentary());
}

#[test]
fn referenced_query_root_is_a_result_type() {
    fn returns_query<O: Operation<Output = QueryDTO>>(_: &O) {}

    let relay = RelayQuery::new();

    returns_query(&relay);
    assert_eq!(json!({}), serde_json::to_value(&relay).expect("serializes"));
    assert_eq!("relay", RelayQuery::FIELD_NAME);
}

//! End-to-end runs of the `ducks-gen` binary

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_missing_genrc_warns_with_gen_prefix() {
    let project = project("store");

    gen_cmd(project.path())
        .args(["-d", "Cart"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Gen :: No .genrc file exists. Create one with -g flag.",
        ))
        .stdout(predicate::str::contains("Gen :: Successfully wrote state template"));

    assert_eq!(
        file_names(&project.path().join("src/store/state/Cart")),
        ["actions.js", "constants.js", "index.js", "reducer.js", "selectors.js", "test.js"]
    );
}

#[test]
fn test_g_flag_writes_genrc() {
    let project = project("store");

    gen_cmd(project.path()).arg("-g").assert().success();

    let rc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.path().join(".genrc")).unwrap())
            .unwrap();
    assert_eq!(rc["viewFolder"], "src/store/view");
    assert_eq!(rc["stateFolder"], "src/store/state");
    assert!(!project.path().join(".jinnrc").exists());
}

#[test]
fn test_genrc_is_used_and_jinnrc_ignored() {
    let project = project("store");
    fs::write(project.path().join(".genrc"), r#"{ "viewFolder": "legacy/views" }"#).unwrap();
    fs::write(project.path().join(".jinnrc"), r#"{ "viewFolder": "modern/views" }"#).unwrap();

    gen_cmd(project.path())
        .args(["-v", "Badge", "-x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No .genrc").not());

    assert_eq!(
        file_names(&project.path().join("legacy/views/Badge")),
        ["component.js", "index.js", "props.js", "test.js"]
    );
    assert!(!project.path().join("modern").exists());
}

#[test]
fn test_shared_folder_same_name_aborts() {
    let project = project("store");
    fs::write(
        project.path().join(".genrc"),
        r#"{ "viewFolder": "src/app", "stateFolder": "src/app" }"#,
    )
    .unwrap();

    gen_cmd(project.path())
        .args(["-v", "Cart", "-d", "Cart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gen ::").and(predicate::str::contains("Aborting")));

    assert!(!project.path().join("src/app").exists());
}

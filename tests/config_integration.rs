//! Integration tests for the scoped configuration store.
//!
//! These tests run against real initialized repositories and verify the
//! validated set/get/list/unset flow, the persisted INI text, and the
//! never-write-on-invalid-key guarantee.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

use codetrail::core::commands::{GetConfig, InitializeRepository, SetConfig, UnsetConfig};
use codetrail::core::config::{self, CONFIG_OPTIONS, CONFIG_SECTIONS};
use codetrail::core::init::initialize_repository;
use codetrail::core::layout::METADATA_DIR_NAME;
use codetrail::core::CoreError;

/// Fixture holding an initialized repository inside a temp dir.
struct TestRepo {
    dir: assert_fs::TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        let work_tree = dir.path().join("repo");
        initialize_repository(&InitializeRepository::new(&work_tree)).expect("init failed");
        Self { dir }
    }

    fn work_tree(&self) -> PathBuf {
        self.dir.path().join("repo")
    }

    fn config_file(&self) -> assert_fs::fixture::ChildPath {
        self.dir.child(format!("repo/{}/config", METADATA_DIR_NAME))
    }

    fn set(&self, key: &str, value: &str) -> codetrail::core::Result<()> {
        let command = SetConfig::new(key, value)?;
        config::set(&self.work_tree(), &command)
    }

    fn get(&self, key: &str) -> codetrail::core::Result<String> {
        let command = GetConfig::new(key)?;
        config::get(&self.work_tree(), &command)
    }

    fn unset(&self, key: &str) -> codetrail::core::Result<()> {
        let command = UnsetConfig::new(key)?;
        config::unset(&self.work_tree(), &command)
    }

    fn binary_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("codetrail").unwrap();
        cmd.current_dir(dir);
        cmd
    }
}

#[test]
fn set_then_get_round_trips_every_recognized_key() {
    let repo = TestRepo::new();

    for section in CONFIG_SECTIONS {
        for option in CONFIG_OPTIONS {
            let key = format!("{}.{}", section, option);
            repo.set(&key, "Chill Guy").unwrap();
            assert_eq!(repo.get(&key).unwrap(), "Chill Guy");
        }
    }
}

#[test]
fn set_writes_ini_text_to_the_config_file() {
    let repo = TestRepo::new();
    repo.set("user.name", "Chill Guy").unwrap();

    repo.config_file()
        .assert(predicate::str::contains("[user]"))
        .assert(predicate::str::contains("name = Chill Guy"));
}

#[test]
fn set_overwrites_previous_value() {
    let repo = TestRepo::new();
    repo.set("user.name", "First").unwrap();
    repo.set("user.name", "Second").unwrap();

    assert_eq!(repo.get("user.name").unwrap(), "Second");
    repo.config_file()
        .assert(predicate::str::contains("Second"))
        .assert(predicate::str::contains("First").not());
}

#[test]
fn unsupported_section_fails_before_touching_the_file() {
    let repo = TestRepo::new();

    let err = repo.set("users.name", "x").unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedSection { .. }));
    // The config file is still the empty placeholder from init
    assert_eq!(fs::read_to_string(repo.config_file().path()).unwrap(), "");
}

#[test]
fn unsupported_option_fails_before_touching_the_file() {
    let repo = TestRepo::new();

    let err = repo.set("user.names", "x").unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedOption { .. }));
    assert_eq!(fs::read_to_string(repo.config_file().path()).unwrap(), "");
}

#[test]
fn get_on_an_unset_key_is_a_distinct_not_found() {
    let repo = TestRepo::new();

    let err = repo.get("user.name").unwrap_err();
    assert!(matches!(err, CoreError::ConfigValueNotFound(_)));
}

#[test]
fn unset_removes_the_value() {
    let repo = TestRepo::new();
    repo.set("user.name", "Chill Guy").unwrap();
    repo.unset("user.name").unwrap();

    assert!(matches!(
        repo.get("user.name"),
        Err(CoreError::ConfigValueNotFound(_))
    ));
    // The section header survives the removal
    repo.config_file()
        .assert(predicate::str::contains("[user]"))
        .assert(predicate::str::contains("name").not());
}

#[test]
fn unset_of_a_never_set_key_leaves_the_file_unchanged() {
    let repo = TestRepo::new();
    let before = fs::read_to_string(repo.config_file().path()).unwrap();

    repo.unset("user.name").unwrap();

    let after = fs::read_to_string(repo.config_file().path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn list_enumerates_entries_in_file_order() {
    let repo = TestRepo::new();
    repo.set("user.name", "Chill Guy").unwrap();

    let entries = config::list(&repo.work_tree()).unwrap();
    assert_eq!(
        entries,
        vec![("user.name".to_string(), "Chill Guy".to_string())]
    );
}

#[test]
fn config_operations_discover_the_repository_from_a_subdirectory() {
    let repo = TestRepo::new();
    let nested = repo.work_tree().join("src/deeply/nested");
    fs::create_dir_all(&nested).unwrap();

    let command = SetConfig::new("user.name", "Chill Guy").unwrap();
    config::set(&nested, &command).unwrap();

    assert_eq!(repo.get("user.name").unwrap(), "Chill Guy");
}

#[test]
fn config_outside_any_repository_is_not_a_repository() {
    let dir = assert_fs::TempDir::new().unwrap();

    let command = GetConfig::new("user.name").unwrap();
    let err = config::get(dir.path(), &command).unwrap_err();
    assert!(matches!(err, CoreError::NotARepository(_)));
}

#[test]
fn config_binary_set_and_get() {
    let repo = TestRepo::new();

    repo.binary_in(&repo.work_tree())
        .args(["config", "set", "user.name", "Chill Guy"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Set value 'Chill Guy' on key 'user.name'.",
        ));

    repo.binary_in(&repo.work_tree())
        .args(["config", "get", "user.name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chill Guy"));
}

#[test]
fn config_binary_list_prints_key_value_lines() {
    let repo = TestRepo::new();
    repo.set("user.name", "Chill Guy").unwrap();

    repo.binary_in(&repo.work_tree())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user.name = Chill Guy"));
}

#[test]
fn config_binary_reports_unsupported_section_and_exits_normally() {
    let repo = TestRepo::new();

    repo.binary_in(&repo.work_tree())
        .args(["config", "set", "users.name", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid section 'users'"));

    assert_eq!(fs::read_to_string(repo.config_file().path()).unwrap(), "");
}

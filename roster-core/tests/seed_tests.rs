//! Seed roster loading and registry bootstrap from YAML files.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use roster_core::{seed, EmployeeId, EmployeeRegistry, RegistryError};

const SEED: &str = "\
- first_name: Ada
  last_name: Lovelace
  email: ada@example.com
  position: ADMIN
  hire_date: 2021-03-01
  projects: [engine, engine, notes]
- first_name: Charles
  last_name: Babbage
  email: charles@example.com
  position: Engineer
  hire_date: 2019-06-15
";

#[test]
fn seed_builds_registry_through_add_rules() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("staff.yaml");
    file.write_str(SEED).expect("write");
    file.assert(predicate::path::exists());

    let entries = seed::load_seed(file.path()).expect("load");
    let reg = EmployeeRegistry::from_seed(entries).expect("seed");

    assert_eq!(reg.len(), 2);
    let ada = reg.get(EmployeeId(1)).expect("ada");
    assert_eq!(ada.email, "ada@example.com");
    assert_eq!(ada.projects, vec!["engine", "notes"]);

    let ids: Vec<u64> = reg.list_all().iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn seed_with_duplicate_email_fails() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("dup.yaml");
    file.write_str(&format!(
        "{SEED}- first_name: Other\n  last_name: Ada\n  email: ada@example.com\n  position: Dev\n  hire_date: 2022-01-01\n"
    ))
    .expect("write");

    let entries = seed::load_seed(file.path()).expect("load");
    let err = EmployeeRegistry::from_seed(entries).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateEmail { .. }), "got: {err}");
}

#[test]
fn missing_seed_returns_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = seed::load_seed(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, RegistryError::SeedNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn mapping_instead_of_list_is_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("wrong.yaml");
    file.write_str("first_name: Ada\n").expect("write");
    let err = seed::load_seed(file.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("wrong.yaml"));
}

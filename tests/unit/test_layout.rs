use std::path::PathBuf;
use upm_semver::services::layout::{validate_layout, REQUIRED_DIRECTORIES};
use upm_semver::utils::error::UpmError;

fn listing(names: &[&str]) -> Vec<String> {
    // list_subdirectories lowercases names before validation runs
    names.iter().map(|s| s.to_lowercase()).collect()
}

#[test]
fn succeeds_when_all_required_directories_are_present() {
    let root = PathBuf::from("/workspace/Packages/com.example.tools");
    assert!(validate_layout(&root, &listing(&["Editor", "Runtime", "Tests", "Documentation"])).is_ok());
}

#[test]
fn succeeds_regardless_of_listing_order() {
    let root = PathBuf::from("/pkg");
    assert!(validate_layout(&root, &listing(&["documentation", "tests", "editor", "runtime"])).is_ok());
}

#[test]
fn succeeds_with_extra_unrecognized_directories() {
    let root = PathBuf::from("/pkg");
    let names = listing(&["Editor", "Runtime", "Tests", "Documentation", "Samples~", "Plugins"]);
    assert!(validate_layout(&root, &names).is_ok());
}

#[test]
fn fails_when_any_single_required_directory_is_absent() {
    let root = PathBuf::from("/pkg");
    for absent in REQUIRED_DIRECTORIES {
        let names: Vec<String> = REQUIRED_DIRECTORIES
            .iter()
            .filter(|name| **name != absent)
            .map(|name| (*name).to_string())
            .collect();

        let err = validate_layout(&root, &names).unwrap_err();
        match err {
            UpmError::Layout { missing, .. } => assert_eq!(missing, vec![absent.to_string()]),
            other => panic!("expected layout error, got {:?}", other),
        }
    }
}

#[test]
fn fails_on_empty_listing_and_reports_everything_missing() {
    let root = PathBuf::from("/pkg");
    let err = validate_layout(&root, &[]).unwrap_err();
    match err {
        UpmError::Layout { missing, .. } => {
            assert_eq!(missing.len(), REQUIRED_DIRECTORIES.len());
        }
        other => panic!("expected layout error, got {:?}", other),
    }
}

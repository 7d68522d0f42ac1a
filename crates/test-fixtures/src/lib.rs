//! Test fixture loader for Wayfarer corpus files.
//!
//! Provides paths and raw contents of the JSON corpora under
//! `crates/test-fixtures/corpus/` for tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Ten cities, `name`/`description` only.
pub const FALLBACK_CORPUS: &str = "corpus/fallback_destinations.json";
/// Ten cities with attraction/restaurant/accommodation lists.
pub const DYNAMIC_CORPUS: &str = "corpus/dynamic_destinations.json";
/// Kyoto and Paris only.
pub const TWO_CITY_CORPUS: &str = "corpus/two_cities.json";
/// Fallback shape with a repeated name.
pub const DUPLICATE_CORPUS: &str = "corpus/duplicate_names.json";
/// Neither shape.
pub const UNRECOGNIZED_CORPUS: &str = "corpus/unrecognized_shape.json";

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("corpus").exists() {
        if path.ends_with("test-fixtures") && path.join("corpus").exists() {
            return path;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Raw text of a fixture file.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

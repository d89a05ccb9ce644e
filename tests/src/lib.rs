use std::fs;
use std::path::{Path, PathBuf};

/// Path to a file under `testdata/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

/// Contents of a file under `testdata/`.
pub fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_exists() {
        assert!(fixture_path("CHANGELOG.md").exists());
        assert!(fixture_text("CHANGELOG.md").starts_with("# Change Log"));
    }
}

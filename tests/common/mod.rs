// Common test utilities shared across test files

use std::io::Write;

use tempfile::NamedTempFile;

/// Write a routes file to a temporary location
#[allow(dead_code)]
pub fn write_routes_file(yml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(yml.as_bytes())
        .expect("Failed to write routes file");
    file
}

/// A small routes file used by several tests
#[allow(dead_code)]
pub const SAMPLE_ROUTES: &str = r#"
routes:
  - name: home
    path: /
    description: Landing page
  - name: user
    path: /users/{id}
  - name: post
    path: /users/{id}/posts/{slug}
"#;

/// Collect `(key, value)` string pairs into a parameter list
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

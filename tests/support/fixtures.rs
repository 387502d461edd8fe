// tests/support/fixtures.rs
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a temporary `.json` file that lives as long as the
/// returned handle.
///
/// # Panics
///
/// Panics when the temporary file cannot be created or written.
#[must_use]
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SAMPLE_ROWS: &str = r#"[
  {"id": 1, "title": "Intro Laravel", "slug": "intro-laravel", "category": "php", "views": 120, "author": "Amina", "published": true, "tags": ["php", "laravel"]},
  {"id": 2, "title": "PHP 8 en pratique", "slug": "php-8-en-pratique", "category": "php", "views": "300", "author": "Yassine", "published": true, "tags": ["php"]},
  {"id": 3, "title": "Composer & Autoload", "slug": "composer-autoload", "category": "outils", "views": 90, "author": "Amina", "published": false, "tags": ["composer", "php"]},
  {"id": 4, "title": "Validation FormRequest", "slug": "validation-formrequest", "category": "laravel", "views": 210, "author": "Sara", "published": true, "tags": ["laravel", "validation"]}
]"#;

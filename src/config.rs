/// Run configuration for the matcher
///
/// All values can come from a JSON config file, with individual fields
/// overridden by command-line flags. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MatchupError;

/// Settings controlling one matching run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory containing the scanned page images
    pub image_dir: PathBuf,

    /// SQLite database file holding the labels table
    pub db_path: PathBuf,

    /// Base path joined in front of each filename when stored in a row
    pub db_image_base_path: String,

    /// Image file extension, including the dot
    pub image_ext: String,

    /// Pages per physical book. A wrong value silently produces wrong
    /// global page numbers, so rows end up skipped or mismatched.
    pub pages_per_book: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("mb_images"),
            db_path: PathBuf::from("labels.db"),
            db_image_base_path: "mb_images".to_string(),
            image_ext: ".png".to_string(),
            pages_per_book: 16,
        }
    }
}

impl Config {
    /// Parse from a JSON string; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON config file
    pub fn load(path: &Path) -> Result<Self, MatchupError> {
        let json = fs::read_to_string(path).map_err(|source| MatchupError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| MatchupError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.image_ext, ".png");
        assert_eq!(config.pages_per_book, 16);
        assert_eq!(config.db_image_base_path, "mb_images");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"pages_per_book": 32}"#).unwrap();
        assert_eq!(config.pages_per_book, 32);
        assert_eq!(config.image_ext, ".png");
    }

    #[test]
    fn test_full_json() {
        let config = Config::from_json(
            r#"{
                "image_dir": "/data/pages",
                "db_path": "/data/catalog.db",
                "db_image_base_path": "pages",
                "image_ext": ".jpg",
                "pages_per_book": 8
            }"#,
        )
        .unwrap();
        assert_eq!(config.image_dir, PathBuf::from("/data/pages"));
        assert_eq!(config.image_ext, ".jpg");
        assert_eq!(config.pages_per_book, 8);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Config::from_json("{not json").is_err());
    }
}

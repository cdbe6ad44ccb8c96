//! Loading interests from a TOML data file.
//!
//! The file format is a list of `[[interests]]` tables:
//!
//! ```toml
//! [[interests]]
//! title = "Compose"
//! icon = "star"
//! completed = true
//! category = "UI Framework"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::InterestItem;

/// Errors that can occur when loading interest data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read the data file.
    #[error("Failed to read interests from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the data file.
    #[error("Failed to parse interests: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The data is well-formed but invalid.
    #[error("Invalid interest data: {0}")]
    ValidationError(String),
}

/// On-disk representation of an interests data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestFile {
    /// The interests, in display order.
    #[serde(default)]
    pub interests: Vec<InterestItem>,
}

impl InterestFile {
    /// Validate the file contents.
    ///
    /// Empty titles are rejected. Duplicate titles are only logged, since
    /// identity by title is assumed but not enforced.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for (index, item) in self.interests.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(DataError::ValidationError(format!(
                    "interest #{} has an empty title",
                    index + 1
                )));
            }
            if !seen.insert(item.title.as_str()) {
                warn!(title = %item.title, "Duplicate interest title");
            }
        }
        Ok(())
    }
}

/// Parse and validate interests from TOML text.
pub fn parse_interests(content: &str) -> Result<Vec<InterestItem>, DataError> {
    let file: InterestFile = toml::from_str(content)?;
    file.validate()?;
    Ok(file.interests)
}

/// Load interests from a TOML file on disk.
pub fn load_interests(path: &Path) -> Result<Vec<InterestItem>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_interests(&content)?;
    debug!(path = %path.display(), count = items.len(), "Loaded interests");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_interests() {
        let items = parse_interests(
            r#"
            [[interests]]
            title = "Compose"
            icon = "star"
            completed = true
            category = "UI Framework"

            [[interests]]
            title = "Gaming"
            category = "Entertainment"
            is_new = true
            "#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Compose");
        assert!(items[0].completed);
        assert_eq!(items[1].category, "Entertainment");
        assert!(items[1].is_new);
        assert!(!items[1].completed);
    }

    #[test]
    fn test_parse_empty_file() {
        let items = parse_interests("").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let result = parse_interests(
            r#"
            [[interests]]
            title = "  "
            "#,
        );
        assert!(matches!(result, Err(DataError::ValidationError(_))));
        assert!(result.unwrap_err().to_string().contains("empty title"));
    }

    #[test]
    fn test_parse_allows_duplicate_titles() {
        let items = parse_interests(
            r#"
            [[interests]]
            title = "Compose"

            [[interests]]
            title = "Compose"
            "#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_interests("[[interests]\ntitle =");
        assert!(matches!(result, Err(DataError::ParseError(_))));
    }

    #[test]
    fn test_load_interests_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[interests]]\ntitle = \"Security\"\ncompleted = true").unwrap();

        let items = load_interests(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Security");
    }

    #[test]
    fn test_load_interests_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_interests(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(DataError::ReadError { .. })));
    }
}

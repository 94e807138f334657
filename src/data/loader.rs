use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::LoadError;

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Read and parse one CRISPRCasFinder `result.json`.
///
/// The content is parsed once into an untyped [`JsonValue`]; the shape is
/// only checked later by [`extract_spacers`](super::extract::extract_spacers),
/// so a document with missing keys still loads here.
///
/// A missing file or undecodable content comes back as
/// [`LoadError::NotFound`] / [`LoadError::Decode`], which
/// [`load_document`] turns into a skip.
pub fn load_json(path: &Path) -> Result<JsonValue, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_json`], but logs and swallows the skippable failures.
///
/// `Ok(None)` means the dataset should be left out of the merge. A file
/// holding only `null` is skipped quietly.
pub fn load_document(path: &Path) -> Result<Option<JsonValue>, LoadError> {
    match load_json(path) {
        Ok(JsonValue::Null) => {
            log::debug!("{} holds no document", path.display());
            Ok(None)
        }
        Ok(doc) => Ok(Some(doc)),
        Err(LoadError::NotFound(p)) => {
            log::warn!("{} not found. Skipping...", p.display());
            Ok(None)
        }
        Err(e @ LoadError::Decode { .. }) => {
            log::warn!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("S925-T2").join("result.json");

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(load_document(&path).unwrap().is_none());
    }

    #[test]
    fn invalid_syntax_is_skipped_and_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"Sequences\": [").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        let message = err.to_string();
        assert!(message.starts_with("Error decoding JSON in"));
        assert!(message.contains("broken.json"));

        assert!(load_document(&path).unwrap().is_none());
    }

    #[test]
    fn decode_message_has_no_skip_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let message = load_json(&path).unwrap_err().to_string();
        let prefix = format!("Error decoding JSON in {}: ", path.display());
        assert!(message.starts_with(&prefix));
        assert!(!message.contains("Skipping"));
    }

    #[test]
    fn null_document_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, "null").unwrap();

        assert_eq!(load_json(&path).unwrap(), JsonValue::Null);
        assert!(load_document(&path).unwrap().is_none());
    }

    #[test]
    fn directory_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn valid_file_loads_without_shape_checks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, r#"{"Date": "2023-05-01", "Sequences": []}"#).unwrap();

        let doc = load_document(&path).unwrap().unwrap();
        assert_eq!(doc["Date"], "2023-05-01");
        assert!(doc["Sequences"].as_array().unwrap().is_empty());
    }
}

//! Kinds of project file records.

use crate::error::CoreError;

/// An uploaded asset stored on the media host.
pub const FILE_TYPE_FILE: &str = "file";

/// A free-text note stored inline in `files.content`.
pub const FILE_TYPE_TEXT: &str = "text";

const VALID_FILE_TYPES: &[&str] = &[FILE_TYPE_FILE, FILE_TYPE_TEXT];

/// Validate the `fileType` discriminator of a file record.
pub fn validate_file_type(file_type: &str) -> Result<(), CoreError> {
    if VALID_FILE_TYPES.contains(&file_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid file type '{file_type}'. Must be one of: file, text"
        )))
    }
}

/// Validate the display name of a file record.
pub fn validate_file_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("File name is required".into()));
    }
    Ok(())
}

/// Whether a record with this type and public id has a remote asset to destroy.
pub fn has_remote_asset(file_type: &str, public_id: Option<&str>) -> bool {
    file_type != FILE_TYPE_TEXT && public_id.is_some_and(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_types() {
        assert!(validate_file_type("file").is_ok());
        assert!(validate_file_type("text").is_ok());
        assert!(validate_file_type("image").is_err());
    }

    #[test]
    fn notes_never_have_remote_assets() {
        assert!(has_remote_asset("file", Some("projects/3/abc")));
        assert!(!has_remote_asset("text", Some("projects/3/abc")));
        assert!(!has_remote_asset("file", None));
        assert!(!has_remote_asset("file", Some("")));
    }
}

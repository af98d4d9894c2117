use crate::types::DbId;

/// Domain failures shared by every layer. Each variant maps to one HTTP
/// status in the API crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist or is not owned by the caller.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_the_message() {
        let err = CoreError::Validation("Project name is required".into());
        assert_eq!(err.to_string(), "Validation failed: Project name is required");

        let err = CoreError::NotFound { entity: "Block", id: 7 };
        assert_eq!(err.to_string(), "Block 7 not found");
    }
}

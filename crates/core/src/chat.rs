//! Chat message roles and validation.

use crate::error::CoreError;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// Number of most recent messages sent to the model as conversation history.
pub const HISTORY_WINDOW: usize = 10;

/// Validate a chat message before it is stored.
pub fn validate_message(role: &str, content: &str) -> Result<(), CoreError> {
    if role.is_empty() || content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Role and content are required".into(),
        ));
    }
    if role != ROLE_USER && role != ROLE_ASSISTANT {
        return Err(CoreError::Validation("Invalid role".into()));
    }
    Ok(())
}

/// Return the trailing `HISTORY_WINDOW` items of a chronologically ordered thread.
pub fn history_window<T>(messages: &[T]) -> &[T] {
    let start = messages.len().saturating_sub(HISTORY_WINDOW);
    &messages[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_and_content_required() {
        let err = validate_message("", "hi").unwrap_err();
        assert!(err.to_string().contains("Role and content are required"));
        assert!(validate_message("user", " ").is_err());
    }

    #[test]
    fn only_user_and_assistant_roles() {
        assert!(validate_message("user", "hi").is_ok());
        assert!(validate_message("assistant", "hello").is_ok());
        let err = validate_message("system", "hi").unwrap_err();
        assert!(err.to_string().contains("Invalid role"));
    }

    #[test]
    fn history_keeps_latest_messages() {
        let thread: Vec<u32> = (0..15).collect();
        assert_eq!(history_window(&thread), &(5..15).collect::<Vec<_>>()[..]);
        let short = [1, 2, 3];
        assert_eq!(history_window(&short), &short);
    }
}

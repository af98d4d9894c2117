//! Project status values and project field validation.

use crate::error::CoreError;

/// Project is being worked on.
pub const STATUS_ACTIVE: &str = "active";

/// Project has been delivered.
pub const STATUS_COMPLETED: &str = "completed";

/// Project is hidden from day-to-day work.
pub const STATUS_ARCHIVED: &str = "archived";

/// Valid status values, matching the `ck_projects_status` check constraint.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_COMPLETED, STATUS_ARCHIVED];

/// Validate that `status` is a known project status.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a project name supplied on create or update.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Project name is required".into()));
    }
    Ok(())
}
